//! OpenTelemetry tracing with a local file exporter.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → TraceFileExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/fp-analyzer/fp-analyzer-otlp.json`
//! (`/host/...` inside the sandbox), one OTLP document per line. The file
//! rotates at 10 MiB and keeps three timestamped backups.
//!
//! The filter directive comes from the `trace_level` plugin option and
//! defaults to `info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: provider and exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: size-rotated writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
