use outcome::trace::TracingObserver;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod pipeline;

use config::DemoConfig;
use error::DemoError;

fn print_success(value: f64) {
    info!(value, "pipeline succeeded");
    println!("success! value is {value}");
}

fn print_failure(reason: &DemoError) {
    error!(%reason, "pipeline failed");
    println!("reason for error = {reason}");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DemoConfig::from_env()?;
    info!(start = config.start, limit = config.limit, "running pipeline");

    let mut observer = TracingObserver::new("demo");
    pipeline::run(config, &mut observer)
        .conclude(print_success, |reason| print_failure(&reason));

    Ok(())
}
