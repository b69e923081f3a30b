//! Subscriber setup.

use super::exporter::{file_tracer_provider, SCOPE_NAME};
use super::file_writer::RotatingFile;
use crate::domain::{Result, TodoError};
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "ztodo-otlp.json";

/// Installs the global subscriber exporting spans to the trace file.
///
/// The filter comes from `config.trace_level` (an `EnvFilter` directive,
/// default `info`). A subscriber installed earlier is left in place.
///
/// # Errors
///
/// Returns [`TodoError::Config`] for an unparseable `trace_level` and
/// [`TodoError::Io`] if the data directory cannot be created. The plugin
/// keeps running without tracing in both cases.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.trace_level)
        .map_err(|e| TodoError::Config(format!("trace_level {:?}: {e}", config.trace_level)))?;

    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(RotatingFile::new(data_dir.join(TRACE_FILE_NAME)), resource);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)))
        .try_init();
    Ok(())
}
