use thiserror::Error;

/// Failure payload of the demonstration pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("can't go over {limit}!")]
    OverLimit { limit: i64 },

    #[error("{value} overflows when tripled")]
    Overflow { value: i64 },
}
