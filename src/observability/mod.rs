//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → OtlpFileExporter → RotatingFile
//! ```
//!
//! Spans land in `~/.local/share/zellij/ztodo/ztodo-otlp.json`, one OTLP JSON
//! document per line. The file rotates at 10 MB and keeps three numbered
//! backups. Tracing is optional: failures during setup leave the plugin
//! running without a subscriber.
//!
//! # Modules
//!
//! - [`init`]: Subscriber and filter setup
//! - [`exporter`]: Span exporter and OTLP JSON encoding
//! - [`file_writer`]: Size-rotated line writer

pub mod exporter;
pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
