use crate::config::LogFormat;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Spans are exported over OTLP only
/// when an endpoint is given; a failing exporter is reported on stderr and the
/// service keeps logging locally.
pub fn init_tracing(
    service_name: &str,
    log_level: &str,
    log_format: LogFormat,
    otlp_endpoint: Option<&str>,
) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let tracer = otlp_endpoint.and_then(|endpoint| {
        let exporter = opentelemetry_otlp::new_exporter()
            .tonic()
            .with_endpoint(endpoint);

        opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(exporter)
            .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
                KeyValue::new("service.name", service_name.to_string()),
            ])))
            .install_batch(runtime::Tokio)
            .map_err(|e| {
                eprintln!(
                    "OTLP export disabled for '{}' (endpoint '{}'): {}",
                    service_name, endpoint, e
                );
            })
            .ok()
    });

    let telemetry = tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    let json_layer = (log_format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .json()
            .flatten_event(true)
    });
    let pretty_layer =
        (log_format == LogFormat::Pretty).then(|| tracing_subscriber::fmt::layer().pretty());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(json_layer)
        .with(pretty_layer)
        .init();
}
