use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use std::sync::Arc;
use tracing::info;

/// Counters of one SDK session. Owned by the session and handed to the
/// components that record into it.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Requests
    pub requests: IntCounterVec,
    pub request_duration: HistogramVec,
    pub transport_failures: IntCounterVec,

    // Token lifecycle
    pub token_acquisitions: IntCounterVec,
    pub token_checks: IntCounterVec,
    pub unauthorized_retries: IntCounterVec,
    pub token_expiry_unix_ms: IntGauge,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        info!("Initializing Metrics ...");
        let registry = Registry::new_custom(Some("graphgrid_sdk".into()), None)
            .expect("static metrics prefix is valid");

        let metrics: Arc<Metrics> = Arc::new(Self {
            requests: IntCounterVec::new(Opts::new("requests_total", "Service requests by service, method and status"),&["service", "method", "status"],).expect("valid metric"),
            request_duration: HistogramVec::new(HistogramOpts::new("request_duration_seconds", "Service request duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),&["service"],).expect("valid metric"),
            transport_failures: IntCounterVec::new(Opts::new("transport_failures_total", "Requests that produced no HTTP status"),&["service"],).expect("valid metric"),

            token_acquisitions: IntCounterVec::new(Opts::new("token_acquisitions_total", "Token acquisitions by outcome"),&["outcome"],).expect("valid metric"),
            token_checks: IntCounterVec::new(Opts::new("token_checks_total", "Check token calls by status"),&["status"],).expect("valid metric"),
            unauthorized_retries: IntCounterVec::new(Opts::new("unauthorized_retries_total", "Requests retried after a 401 with an invalid token"),&["service"],).expect("valid metric"),
            token_expiry_unix_ms: IntGauge::new("token_expiry_unix_milliseconds", "Expiry of the current bearer token").expect("valid metric"),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        let _ = reg.register(Box::new(metrics.requests.clone()));
        let _ = reg.register(Box::new(metrics.request_duration.clone()));
        let _ = reg.register(Box::new(metrics.transport_failures.clone()));
        let _ = reg.register(Box::new(metrics.token_acquisitions.clone()));
        let _ = reg.register(Box::new(metrics.token_checks.clone()));
        let _ = reg.register(Box::new(metrics.unauthorized_retries.clone()));
        let _ = reg.register(Box::new(metrics.token_expiry_unix_ms.clone()));

        metrics
    }

    /// Text exposition of every metric in this session.
    pub fn gather_text(&self) -> String {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if encoder.encode(&self.registry.gather(), &mut buffer).is_err() {
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
