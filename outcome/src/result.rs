use alloc::boxed::Box;

use crate::{
    observe::Branch,
    variants::{Failure, Success},
};

/// Marker for failure payloads that can be boxed into the default failure type.
pub trait Error: core::error::Error {}

impl<T: core::error::Error> Error for T {}

/// Parametric type representing the result of a computation: exactly one of a
/// success payload of type `S` or a failure payload of type `F`.
///
/// There is no empty `Result`; a value is built from one of the variants, or
/// from a [`Success`]/[`Failure`] holder.
#[derive(Debug, Clone, Copy)]
#[must_use = "this `Result` may be a `Failure` variant, which should be handled"]
pub enum Result<S, F = Box<dyn Error>> {
    Success(S),
    Failure(F),
}

impl<S, F> Result<S, F> {
    /// Creates a result from a success holder whose payload converts into `S`.
    ///
    /// ```
    /// use outcome::{Result, Success};
    ///
    /// let result: Result<i64, ()> = Result::from_success(Success(3_i32));
    /// assert_eq!(result.success(), Some(3_i64));
    /// ```
    pub fn from_success<S2>(value: Success<S2>) -> Self
    where
        S2: Into<S>,
    {
        Self::Success(value.0.into())
    }

    /// Creates a result from a failure holder whose payload converts into `F`.
    pub fn from_failure<F2>(value: Failure<F2>) -> Self
    where
        F2: Into<F>,
    {
        Self::Failure(value.0.into())
    }

    /// Converts both payload types, keeping the variant.
    pub fn convert<S2, F2>(self) -> Result<S2, F2>
    where
        S: Into<S2>,
        F: Into<F2>,
    {
        match self {
            Self::Success(value) => Result::Success(value.into()),
            Self::Failure(value) => Result::Failure(value.into()),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Which variant is live, without the payload.
    #[must_use]
    pub const fn branch(&self) -> Branch {
        match self {
            Self::Success(_) => Branch::Success,
            Self::Failure(_) => Branch::Failure,
        }
    }

    /// Returns the success payload, discarding a failure.
    pub fn success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, discarding a success.
    pub fn failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    pub const fn as_ref(&self) -> Result<&S, &F> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    pub const fn as_mut(&mut self) -> Result<&mut S, &mut F> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Converts into the standard library's result.
    pub fn into_std(self) -> core::result::Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(value) => Err(value),
        }
    }
}

impl<S, F> From<Success<S>> for Result<S, F> {
    fn from(value: Success<S>) -> Self {
        Self::Success(value.0)
    }
}

impl<S, F> From<Failure<F>> for Result<S, F> {
    fn from(value: Failure<F>) -> Self {
        Self::Failure(value.0)
    }
}

impl<S, F> From<core::result::Result<S, F>> for Result<S, F> {
    fn from(value: core::result::Result<S, F>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(value) => Self::Failure(value),
        }
    }
}
