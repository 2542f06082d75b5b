use anyhow::Result;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let json = config.format == "json";

    match &config.file_path {
        Some(file_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)?;

            if json {
                registry
                    .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE).with_writer(file))
                    .init();
            } else {
                registry
                    .with(fmt::layer().with_span_events(FmtSpan::CLOSE).with_writer(file))
                    .init();
            }
        }
        None => {
            if json {
                registry
                    .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                    .init();
            } else {
                registry
                    .with(fmt::layer().with_span_events(FmtSpan::CLOSE))
                    .init();
            }
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
    Ok(())
}
