//! Prometheus metrics for the sizing server

use prometheus::{register_histogram, register_int_counter, Histogram, IntCounter};
use std::sync::OnceLock;

/// Histogram buckets for calculation latency (in seconds); the engine is
/// pure arithmetic, so these sit well below typical request latencies.
const LATENCY_BUCKETS: &[f64] = &[
    0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.05, 0.1,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ServerMetricsInner> = OnceLock::new();

struct ServerMetricsInner {
    calculation_latency_seconds: Histogram,
    calculations_total: IntCounter,
    calculation_errors_total: IntCounter,
}

impl ServerMetricsInner {
    fn new() -> Self {
        Self {
            calculation_latency_seconds: register_histogram!(
                "sizer_calculation_latency_seconds",
                "Time spent running a sizing calculation",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register calculation_latency_seconds"),

            calculations_total: register_int_counter!(
                "sizer_calculations_total",
                "Total number of sizing calculations served"
            )
            .expect("Failed to register calculations_total"),

            calculation_errors_total: register_int_counter!(
                "sizer_calculation_errors_total",
                "Total number of sizing requests rejected with an error"
            )
            .expect("Failed to register calculation_errors_total"),
        }
    }
}

/// Handle to the server's Prometheus metrics
#[derive(Clone)]
pub struct ServerMetrics;

impl ServerMetrics {
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ServerMetricsInner::new);
        Self
    }

    fn inner(&self) -> &'static ServerMetricsInner {
        GLOBAL_METRICS.get_or_init(ServerMetricsInner::new)
    }

    pub fn observe_calculation_latency(&self, seconds: f64) {
        self.inner().calculation_latency_seconds.observe(seconds);
    }

    pub fn record_calculation(&self) {
        self.inner().calculations_total.inc();
    }

    pub fn record_error(&self) {
        self.inner().calculation_errors_total.inc();
    }
}

impl Default for ServerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
