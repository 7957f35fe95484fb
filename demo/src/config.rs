use std::env;

use anyhow::{Context, Result};

pub const START_VAR: &str = "OUTCOME_DEMO_START";
pub const LIMIT_VAR: &str = "OUTCOME_DEMO_LIMIT";

/// Input of the demonstration pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Value the pipeline starts from.
    pub start: i64,
    /// Values at or above this limit are rejected by `triple`.
    pub limit: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start: 3,
            limit: 100,
        }
    }
}

impl DemoConfig {
    /// Reads overrides from the environment, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            start: parse_var(&lookup, START_VAR)?.unwrap_or(defaults.start),
            limit: parse_var(&lookup, LIMIT_VAR)?.unwrap_or(defaults.limit),
        })
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<i64>> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .with_context(|| format!("{key} must be an integer, got {raw:?}"))
        })
        .transpose()
}
