//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans emitted through `tracing` macros flow through the OpenTelemetry
//! SDK into a custom file exporter:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! Traces are written as OTLP JSON lines to
//! `~/.local/share/zellij/bookrack/bookrack-otlp.json`, rotated at 10 MB
//! with three backups retained. The filter directive comes from the
//! `trace_level` plugin configuration option (default `info`).
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: tracer provider and the file exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
