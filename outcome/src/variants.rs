//! Standalone holders for the two outcomes of a computation.
//!
//! A [`Success`] or [`Failure`] carries no behavior of its own; it exists to be
//! turned into a [`Result`](crate::Result), either as-is through [`From`] or
//! with a payload conversion through
//! [`Result::from_success`](crate::Result::from_success) and
//! [`Result::from_failure`](crate::Result::from_failure).
//!
//! A bare success can also start a pipeline: `Success(3) >> triple >> convert`
//! feeds the payload to `triple` and continues on the [`Result`](crate::Result)
//! it returns.

use core::ops::{BitAnd, Shr};

/// Computation that resulted in a success.
#[derive(Debug, Clone, Copy)]
pub struct Success<S>(pub S);

/// Computation that resulted in a failure.
#[derive(Debug, Clone, Copy)]
pub struct Failure<F>(pub F);

impl<S> Success<S> {
    pub const fn new(value: S) -> Self {
        Self(value)
    }

    /// Unwraps the success payload.
    pub fn into_inner(self) -> S {
        self.0
    }

    /// Converts the payload, keeping the value tagged as a success.
    pub fn convert<S2>(self) -> Success<S2>
    where
        S: Into<S2>,
    {
        Success(self.0.into())
    }
}

impl<F> Failure<F> {
    pub const fn new(value: F) -> Self {
        Self(value)
    }

    /// Unwraps the failure payload.
    pub fn into_inner(self) -> F {
        self.0
    }

    /// Converts the payload, keeping the value tagged as a failure.
    pub fn convert<F2>(self) -> Failure<F2>
    where
        F: Into<F2>,
    {
        Failure(self.0.into())
    }
}

/// `success >> fun` hands the payload to `fun` and returns whatever it builds.
impl<S, R, Fun> Shr<Fun> for Success<S>
where
    Fun: FnOnce(S) -> R,
{
    type Output = R;

    fn shr(self, fun: Fun) -> Self::Output {
        fun(self.0)
    }
}

/// `success(x) & success(y)` is `success(y)`, as for [`Result::and`](crate::Result::and).
impl<S, S2> BitAnd<Success<S2>> for Success<S> {
    type Output = Success<S2>;

    fn bitand(self, rhs: Success<S2>) -> Self::Output {
        rhs
    }
}
