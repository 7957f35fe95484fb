//! Opt-in observation of combinator calls.
//!
//! The combinators on [`Result`] never report anything by themselves. To follow
//! a pipeline, wrap the starting value with [`Result::observed`] and hand it an
//! [`Observer`]; every step taken through the returned [`Observed`] reports one
//! [`Event`].
//!
//! # Examples
//! ```
//! use outcome::{Event, Observer, Operation, Result};
//!
//! #[derive(Default)]
//! struct Counter {
//!     steps: usize,
//! }
//!
//! impl Observer for Counter {
//!     fn observe(&mut self, _event: Event) {
//!         self.steps += 1;
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! let result = Result::<i32, &str>::Success(2)
//!     .observed(&mut counter)
//!     .map(|value| value * 2)
//!     .and_then(|value| Result::Success(value + 1))
//!     .into_inner();
//!
//! assert_eq!(result.success(), Some(5));
//! assert_eq!(counter.steps, 2);
//! ```

use core::fmt;

use crate::result::Result;

/// The live variant of a [`Result`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Success,
    Failure,
}

impl Branch {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combinator that produced an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    And,
    Or,
    AndThen,
    Map,
    Conclude,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::AndThen => "and_then",
            Self::Map => "map",
            Self::Conclude => "conclude",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One combinator step: the branch it was applied to and the branch it produced.
///
/// For [`Operation::Conclude`] the output is the branch whose handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub operation: Operation,
    pub input: Branch,
    pub output: Branch,
}

/// Receives an [`Event`] for every step taken through [`Observed`].
pub trait Observer {
    fn observe(&mut self, event: Event);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn observe(&mut self, event: Event) {
        (**self).observe(event);
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl Observer for NoOpObserver {
    fn observe(&mut self, _event: Event) {}
}

/// A [`Result`] paired with the observer that follows it through a pipeline.
///
/// Each method behaves exactly like the [`Result`] method of the same name.
#[must_use]
pub struct Observed<'o, S, F, O: Observer + ?Sized> {
    result: Result<S, F>,
    observer: &'o mut O,
}

impl<S, F> Result<S, F> {
    /// Starts an observed pipeline from this result.
    pub fn observed<O: Observer + ?Sized>(self, observer: &mut O) -> Observed<'_, S, F, O> {
        Observed {
            result: self,
            observer,
        }
    }
}

impl<'o, S, F, O: Observer + ?Sized> Observed<'o, S, F, O> {
    fn step<S2, F2>(
        self,
        operation: Operation,
        combine: impl FnOnce(Result<S, F>) -> Result<S2, F2>,
    ) -> Observed<'o, S2, F2, O> {
        let input = self.result.branch();
        let result = combine(self.result);
        self.observer.observe(Event {
            operation,
            input,
            output: result.branch(),
        });
        Observed {
            result,
            observer: self.observer,
        }
    }

    pub fn and<S2>(self, other: Result<S2, F>) -> Observed<'o, S2, F, O> {
        self.step(Operation::And, |result| result.and(other))
    }

    pub fn or<F2>(self, other: Result<S, F2>) -> Observed<'o, S, F2, O> {
        self.step(Operation::Or, |result| result.or(other))
    }

    pub fn and_then<S2, Fun>(self, fun: Fun) -> Observed<'o, S2, F, O>
    where
        Fun: FnOnce(S) -> Result<S2, F>,
    {
        self.step(Operation::AndThen, |result| result.and_then(fun))
    }

    pub fn map<S2, Fun>(self, fun: Fun) -> Observed<'o, S2, F, O>
    where
        Fun: FnOnce(S) -> S2,
    {
        self.step(Operation::Map, |result| result.map(fun))
    }

    /// Resolves the pipeline, reporting which handler ran.
    pub fn conclude<R, FunS, FunF>(self, on_success: FunS, on_failure: FunF) -> R
    where
        FunS: FnOnce(S) -> R,
        FunF: FnOnce(F) -> R,
    {
        let branch = self.result.branch();
        self.observer.observe(Event {
            operation: Operation::Conclude,
            input: branch,
            output: branch,
        });
        self.result.conclude(on_success, on_failure)
    }

    /// Ends observation and returns the result.
    pub fn into_inner(self) -> Result<S, F> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Branch, Event, NoOpObserver, Observer, Operation};
    use crate::result::Result::{self, Failure, Success};

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Observer for Recorder {
        fn observe(&mut self, event: Event) {
            self.events.push(event);
        }
    }

    fn event(operation: Operation, input: Branch, output: Branch) -> Event {
        Event {
            operation,
            input,
            output,
        }
    }

    #[test]
    fn test_records_one_event_per_step() {
        let mut recorder = Recorder::default();
        let concluded = Result::<i32, &str>::Success(3)
            .observed(&mut recorder)
            .map(|value| value + 1)
            .and(Failure("right"))
            .or(Result::<i32, &str>::Success(10))
            .and_then(|value| Success::<i32, &str>(value * 2))
            .conclude(|value| value, |_| -1);

        assert_eq!(concluded, 20);
        assert_eq!(
            recorder.events,
            [
                event(Operation::Map, Branch::Success, Branch::Success),
                event(Operation::And, Branch::Success, Branch::Failure),
                event(Operation::Or, Branch::Failure, Branch::Success),
                event(Operation::AndThen, Branch::Success, Branch::Success),
                event(Operation::Conclude, Branch::Success, Branch::Success),
            ]
        );
    }

    #[test]
    fn test_failure_propagates_through_observed_chain() {
        let mut recorder = Recorder::default();
        let result = Result::<i32, &str>::Failure("boom")
            .observed(&mut recorder)
            .map(|value| value + 1)
            .and_then(|value| Success::<i32, &str>(value))
            .into_inner();

        assert!(matches!(result, Failure("boom")));
        assert!(
            recorder
                .events
                .iter()
                .all(|event| event.input == Branch::Failure && event.output == Branch::Failure)
        );
    }

    #[test]
    fn test_noop_observer_leaves_result_untouched() {
        let mut observer = NoOpObserver;
        let result = Result::<i32, &str>::Success(4)
            .observed(&mut observer)
            .map(|value| value * 2)
            .into_inner();
        assert!(matches!(result, Success(8)));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(alloc::format!("{}", Operation::AndThen), "and_then");
        assert_eq!(alloc::format!("{}", Branch::Failure), "failure");
    }
}
