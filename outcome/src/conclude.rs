use crate::result::Result::{self, Failure, Success};

impl<S, F> Result<S, F> {
    /// Consumes the result by calling exactly one of the two handlers.
    ///
    /// This is the end of a pipeline; whatever the handlers return is returned
    /// as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Result::{self, Failure, Success};
    ///
    /// let describe = |result: Result<f32, &str>| {
    ///     result.conclude(
    ///         |value| format!("success! value is {value}"),
    ///         |reason| format!("reason for error = {reason}"),
    ///     )
    /// };
    ///
    /// assert_eq!(describe(Success(9.0)), "success! value is 9");
    /// assert_eq!(describe(Failure("fail")), "reason for error = fail");
    /// ```
    pub fn conclude<R, FunS, FunF>(self, on_success: FunS, on_failure: FunF) -> R
    where
        FunS: FnOnce(S) -> R,
        FunF: FnOnce(F) -> R,
    {
        match self {
            Success(success) => on_success(success),
            Failure(failure) => on_failure(failure),
        }
    }

    /// Like [`conclude`](Self::conclude), but leaves the result in place.
    pub fn conclude_ref<'a, R, FunS, FunF>(&'a self, on_success: FunS, on_failure: FunF) -> R
    where
        FunS: FnOnce(&'a S) -> R,
        FunF: FnOnce(&'a F) -> R,
    {
        self.as_ref().conclude(on_success, on_failure)
    }
}
