//! Prometheus metrics for content-service.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

// HTTP metrics
pub static HTTP_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static HTTP_REQUEST_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();

// Generation metrics
pub static TITLE_SUGGESTIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static TRANSCRIPTIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PROVIDER_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static PROVIDER_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PROVIDER_TOKENS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

fn register<C>(registry: &Registry, collector: C) -> C
where
    C: prometheus::core::Collector + Clone + 'static,
{
    if let Err(e) = registry.register(Box::new(collector.clone())) {
        tracing::error!(error = %e, "Failed to register metric collector");
    }
    collector
}

/// Initialize all metrics. Later calls are no-ops.
pub fn init_metrics() {
    if REGISTRY.get().is_some() {
        return;
    }

    let registry = Registry::new();

    let metrics = (|| -> Result<_, prometheus::Error> {
        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )?;
        let http_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            ),
            &["method", "path", "status"],
        )?;
        let titles = IntCounterVec::new(
            Opts::new(
                "title_suggestions_total",
                "Title suggestion results by producing path",
            ),
            &["source"],
        )?;
        let transcriptions = IntCounterVec::new(
            Opts::new("transcriptions_total", "Transcription requests by outcome"),
            &["status"],
        )?;
        let provider_latency = HistogramVec::new(
            HistogramOpts::new(
                "provider_latency_seconds",
                "Generative model provider latency in seconds",
            )
            .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
            &["provider", "model"],
        )?;
        let provider_errors = IntCounterVec::new(
            Opts::new("provider_errors_total", "Total model provider errors"),
            &["provider", "error_type"],
        )?;
        let provider_tokens = IntCounterVec::new(
            Opts::new("provider_tokens_total", "Tokens reported by the provider"),
            &["model", "type"],
        )?;
        Ok((
            http_requests,
            http_duration,
            titles,
            transcriptions,
            provider_latency,
            provider_errors,
            provider_tokens,
        ))
    })();

    let (
        http_requests,
        http_duration,
        titles,
        transcriptions,
        provider_latency,
        provider_errors,
        provider_tokens,
    ) = match metrics {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create metrics; metrics disabled");
            return;
        }
    };

    let _ = HTTP_REQUESTS_TOTAL.set(register(&registry, http_requests));
    let _ = HTTP_REQUEST_DURATION_SECONDS.set(register(&registry, http_duration));
    let _ = TITLE_SUGGESTIONS_TOTAL.set(register(&registry, titles));
    let _ = TRANSCRIPTIONS_TOTAL.set(register(&registry, transcriptions));
    let _ = PROVIDER_LATENCY_SECONDS.set(register(&registry, provider_latency));
    let _ = PROVIDER_ERRORS_TOTAL.set(register(&registry, provider_errors));
    let _ = PROVIDER_TOKENS_TOTAL.set(register(&registry, provider_tokens));
    let _ = REGISTRY.set(registry);

    tracing::info!("Prometheus metrics initialized");
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let metric_families = registry.gather();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

// Helper functions for recording metrics

pub fn record_http_request(method: &str, path: &str, status: &str, duration_secs: f64) {
    if let Some(counter) = HTTP_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[method, path, status]).inc();
    }
    if let Some(histogram) = HTTP_REQUEST_DURATION_SECONDS.get() {
        histogram
            .with_label_values(&[method, path, status])
            .observe(duration_secs);
    }
}

/// Record which path produced a title set.
pub fn record_title_suggestion(source: &str) {
    if let Some(counter) = TITLE_SUGGESTIONS_TOTAL.get() {
        counter.with_label_values(&[source]).inc();
    }
}

pub fn record_transcription(status: &str) {
    if let Some(counter) = TRANSCRIPTIONS_TOTAL.get() {
        counter.with_label_values(&[status]).inc();
    }
}

pub fn record_provider_latency(provider: &str, model: &str, duration_secs: f64) {
    if let Some(histogram) = PROVIDER_LATENCY_SECONDS.get() {
        histogram
            .with_label_values(&[provider, model])
            .observe(duration_secs);
    }
}

pub fn record_provider_error(provider: &str, error_type: &str) {
    if let Some(counter) = PROVIDER_ERRORS_TOTAL.get() {
        counter.with_label_values(&[provider, error_type]).inc();
    }
}

pub fn record_tokens(model: &str, input_tokens: i32, output_tokens: i32) {
    if let Some(counter) = PROVIDER_TOKENS_TOTAL.get() {
        counter
            .with_label_values(&[model, "input"])
            .inc_by(input_tokens.max(0) as u64);
        counter
            .with_label_values(&[model, "output"])
            .inc_by(output_tokens.max(0) as u64);
    }
}
