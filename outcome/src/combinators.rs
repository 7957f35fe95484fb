use core::ops::{BitAnd, BitOr};

use crate::result::Result::{self, Failure, Success};

impl<S, F> Result<S, F> {
    /// Combines two results into one, keeping the left failure if there is one.
    ///
    /// This function adheres to the following table:
    ///   success(x) and success(y) = success(y)
    ///   success(x) and failure(y) = failure(y)
    ///   failure(x) and success(y) = failure(x)
    ///   failure(x) and failure(y) = failure(x)
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Result::{self, Failure, Success};
    ///
    /// let left: Result<i32, &str> = Success(1);
    /// assert!(matches!(left.and(Success::<&str, &str>("y")), Success("y")));
    /// assert!(matches!(Failure::<i32, _>("x").and(Failure::<u8, _>("y")), Failure("x")));
    /// ```
    pub fn and<S2>(self, other: Result<S2, F>) -> Result<S2, F> {
        match self {
            Success(_) => other,
            Failure(failure) => Failure(failure),
        }
    }

    /// Combines two results into one, keeping the left success if there is one.
    ///
    /// This function adheres to the following table:
    ///   success(x) or success(y) = success(x)
    ///   success(x) or failure(y) = success(x)
    ///   failure(x) or success(y) = success(y)
    ///   failure(x) or failure(y) = failure(y)
    pub fn or<F2>(self, other: Result<S, F2>) -> Result<S, F2> {
        match self {
            Success(success) => Success(success),
            Failure(_) => other,
        }
    }

    /// Like [`and`](Self::and), but builds the right side only when the left
    /// side succeeded.
    pub fn and_lazy<S2, Fun>(self, other: Fun) -> Result<S2, F>
    where
        Fun: FnOnce() -> Result<S2, F>,
    {
        match self {
            Success(_) => other(),
            Failure(failure) => Failure(failure),
        }
    }

    /// Like [`or`](Self::or), but builds the right side only when the left
    /// side failed.
    pub fn or_lazy<F2, Fun>(self, other: Fun) -> Result<S, F2>
    where
        Fun: FnOnce() -> Result<S, F2>,
    {
        match self {
            Success(success) => Success(success),
            Failure(_) => other(),
        }
    }
}

/// `left & right` is [`Result::and`].
impl<S, S2, F> BitAnd<Result<S2, F>> for Result<S, F> {
    type Output = Result<S2, F>;

    fn bitand(self, rhs: Result<S2, F>) -> Self::Output {
        self.and(rhs)
    }
}

/// `left | right` is [`Result::or`].
impl<S, F, F2> BitOr<Result<S, F2>> for Result<S, F> {
    type Output = Result<S, F2>;

    fn bitor(self, rhs: Result<S, F2>) -> Self::Output {
        self.or(rhs)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use crate::result::Result::{self, Failure, Success};

    fn success(value: i32) -> Result<i32, &'static str> {
        Success(value)
    }

    fn failure(reason: &'static str) -> Result<i32, &'static str> {
        Failure(reason)
    }

    #[test]
    fn test_and_table() {
        assert!(matches!(success(1).and(success(2)), Success(2)));
        assert!(matches!(success(1).and(failure("y")), Failure("y")));
        assert!(matches!(failure("x").and(success(2)), Failure("x")));
        assert!(matches!(failure("x").and(failure("y")), Failure("x")));
    }

    #[test]
    fn test_and_changes_success_type() {
        let combined: Result<char, &str> = success(1).and(Success('c'));
        assert!(matches!(combined, Success('c')));
    }

    #[test]
    fn test_or_table() {
        assert!(matches!(success(1).or(success(2)), Success(1)));
        assert!(matches!(success(1).or(failure("y")), Success(1)));
        assert!(matches!(failure("x").or(success(2)), Success(2)));
        assert!(matches!(failure("x").or(failure("y")), Failure("y")));
    }

    #[test]
    fn test_or_changes_failure_type() {
        let combined: Result<i32, u16> = failure("x").or(Failure(404));
        assert!(matches!(combined, Failure(404)));
    }

    #[test]
    fn test_operators_follow_tables() {
        assert!(matches!(success(1) & failure("y"), Failure("y")));
        assert!(matches!(failure("x") & success(2), Failure("x")));
        assert!(matches!(success(1) | failure("y"), Success(1)));
        assert!(matches!(failure("x") | failure("y"), Failure("y")));
    }

    #[test]
    fn test_lazy_forms_skip_right_side() {
        let calls = Cell::new(0);
        let right = || {
            calls.set(calls.get() + 1);
            success(2)
        };

        assert!(matches!(failure("x").and_lazy(right), Failure("x")));
        assert!(matches!(success(1).or_lazy(right), Success(1)));
        assert_eq!(calls.get(), 0);

        assert!(matches!(success(1).and_lazy(right), Success(2)));
        assert!(matches!(failure("x").or_lazy(right), Success(2)));
        assert_eq!(calls.get(), 2);
    }
}
