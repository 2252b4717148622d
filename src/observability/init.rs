//! Subscriber setup.

use super::tracer;
use crate::infrastructure::paths::{get_data_dir, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "fp-analyzer";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` in front of an OpenTelemetry layer that exports to
/// `<data dir>/fp-analyzer-otlp.json`.
///
/// Tracing is best effort. If the data directory cannot be created, or a
/// subscriber is already installed, this returns without doing anything.
///
/// ```rust,no_run
/// use fp_analyzer::observability::init_tracing;
/// use fp_analyzer::Config;
///
/// init_tracing(&Config::default());
/// tracing::info!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();

    tracing::info!(
        endpoint = %config.endpoint,
        locale = ?config.locale,
        trace_level = %config.trace_level,
        "tracing initialized"
    );
}
