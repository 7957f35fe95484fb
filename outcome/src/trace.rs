//! [`Observer`] that forwards every combinator step to `tracing`.

use tracing::Level;

use crate::observe::{Event, Observer};

/// Emits one `tracing` event per observed step.
///
/// Events use the `outcome` target; the label is carried in the `pipeline`
/// field next to `operation`, `input` and `output`.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    label: &'static str,
    level: Level,
}

impl TracingObserver {
    /// Observer emitting at `TRACE` level.
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            level: Level::TRACE,
        }
    }

    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }
}

macro_rules! emit {
    ($level:expr, $label:expr, $event:expr) => {
        tracing::event!(
            target: "outcome",
            $level,
            pipeline = $label,
            operation = $event.operation.as_str(),
            input = $event.input.as_str(),
            output = $event.output.as_str(),
            "combinator step"
        )
    };
}

impl Observer for TracingObserver {
    fn observe(&mut self, event: Event) {
        match self.level {
            Level::ERROR => emit!(Level::ERROR, self.label, event),
            Level::WARN => emit!(Level::WARN, self.label, event),
            Level::INFO => emit!(Level::INFO, self.label, event),
            Level::DEBUG => emit!(Level::DEBUG, self.label, event),
            _ => emit!(Level::TRACE, self.label, event),
        }
    }
}
