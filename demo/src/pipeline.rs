use outcome::{
    Observed, Observer,
    Result::{self, Failure, Success},
};

use crate::{config::DemoConfig, error::DemoError};

/// Triples values under the configured limit.
pub fn triple(value: i64, limit: i64) -> Result<i64, DemoError> {
    if value >= limit {
        return Failure(DemoError::OverLimit { limit });
    }
    value
        .checked_mul(3)
        .map_or(Failure(DemoError::Overflow { value }), Success)
}

#[allow(clippy::cast_precision_loss)]
pub fn to_float(value: i64) -> Result<f64, DemoError> {
    Success(value as f64)
}

/// Runs `start -> triple -> to_float`, reporting each step to `observer`.
///
/// The pipeline is handed back still observed, so the caller's `conclude` is
/// reported too.
pub fn run<O: Observer>(
    config: DemoConfig,
    observer: &mut O,
) -> Observed<'_, f64, DemoError, O> {
    let limit = config.limit;
    Result::<i64, DemoError>::Success(config.start)
        .observed(observer)
        .and_then(|value| triple(value, limit))
        .and_then(to_float)
}
