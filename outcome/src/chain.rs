use core::ops::Shr;

use crate::result::Result::{self, Failure, Success};

impl<S, F> Result<S, F> {
    /// Feeds the success payload to `fun` and returns the result it builds.
    ///
    /// A failure is passed through untouched and `fun` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Result::{self, Failure, Success};
    ///
    /// fn halve(value: i32) -> Result<i32, &'static str> {
    ///     if value % 2 == 0 { Success(value / 2) } else { Failure("odd") }
    /// }
    ///
    /// assert!(matches!(Success(8).and_then(halve).and_then(halve), Success(2)));
    /// assert!(matches!(Success(6).and_then(halve).and_then(halve), Failure("odd")));
    /// ```
    pub fn and_then<S2, Fun>(self, fun: Fun) -> Result<S2, F>
    where
        Fun: FnOnce(S) -> Result<S2, F>,
    {
        match self {
            Success(success) => fun(success),
            Failure(failure) => Failure(failure),
        }
    }

    /// Transforms the success payload with a step that cannot fail.
    pub fn map<S2, Fun>(self, fun: Fun) -> Result<S2, F>
    where
        Fun: FnOnce(S) -> S2,
    {
        match self {
            Success(success) => Success(fun(success)),
            Failure(failure) => Failure(failure),
        }
    }

    /// Transforms the failure payload. No other combinator rewrites a failure.
    pub fn map_failure<F2, Fun>(self, fun: Fun) -> Result<S, F2>
    where
        Fun: FnOnce(F) -> F2,
    {
        match self {
            Success(success) => Success(success),
            Failure(failure) => Failure(fun(failure)),
        }
    }
}

/// `result >> fun` is [`Result::and_then`].
impl<S, S2, F, Fun> Shr<Fun> for Result<S, F>
where
    Fun: FnOnce(S) -> Result<S2, F>,
{
    type Output = Result<S2, F>;

    fn shr(self, fun: Fun) -> Self::Output {
        self.and_then(fun)
    }
}
