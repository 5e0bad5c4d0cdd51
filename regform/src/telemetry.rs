use std::{error::Error, fmt::Display};

use tracing::{subscriber::SetGlobalDefaultError, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::{log::SetLoggerError, LogTracer};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug)]
pub enum TelemetryError {
    LoggerError(SetLoggerError),
    SubscriberError(SetGlobalDefaultError),
}

impl From<SetLoggerError> for TelemetryError {
    fn from(value: SetLoggerError) -> Self {
        TelemetryError::LoggerError(value)
    }
}

impl From<SetGlobalDefaultError> for TelemetryError {
    fn from(value: SetGlobalDefaultError) -> Self {
        TelemetryError::SubscriberError(value)
    }
}

impl Display for TelemetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelemetryError::LoggerError(err) => write!(f, "{}", err),
            TelemetryError::SubscriberError(err) => write!(f, "{}", err),
        }
    }
}

impl Error for TelemetryError {}

/// Builds a bunyan-formatted subscriber. `RUST_LOG` overrides `env_filter`.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs the subscriber globally and routes `log` records into it.
/// Must be called only once.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), TelemetryError> {
    LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn subscriber_can_be_used_locally() {
        let subscriber = get_subscriber("test".into(), "debug".into(), std::io::sink);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(field = "email", "formData: {{}}");
        });
    }
}
