//! `?` support, available on nightly with the `nightly` feature.
//!
//! A failure leaving through `?` is converted with [`From`], the same way the
//! standard library's `Result` does it.

use core::{
    convert::Infallible,
    ops::{ControlFlow, FromResidual, Try},
};

use crate::result::Result::{self, Failure, Success};

impl<S, F> Try for Result<S, F> {
    type Output = S;
    type Residual = Result<Infallible, F>;

    fn from_output(output: S) -> Self {
        Success(output)
    }

    fn branch(self) -> ControlFlow<Self::Residual, S> {
        match self {
            Success(success) => ControlFlow::Continue(success),
            Failure(failure) => ControlFlow::Break(Failure(failure)),
        }
    }
}

impl<S, F, F2> FromResidual<Result<Infallible, F2>> for Result<S, F>
where
    F2: Into<F>,
{
    fn from_residual(residual: Result<Infallible, F2>) -> Self {
        match residual {
            Success(never) => match never {},
            Failure(failure) => Failure(failure.into()),
        }
    }
}
