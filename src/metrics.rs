//! Pipeline metrics.
//!
//! Recorded through the `metrics` facade; nothing is exported unless
//! [`init_metrics`] installs the Prometheus exporter.

use std::net::SocketAddr;

use tracing::{info, warn};

/// Why a scraped row was left out of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Visitors,
    Population,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Visitors => "visitors",
            DropReason::Population => "population",
        }
    }
}

pub struct PipelineMetrics;

impl PipelineMetrics {
    pub fn record_fetch_success(duration_secs: f64, payload_bytes: usize) {
        ::metrics::counter!("museums_fetch_success_total").increment(1);
        ::metrics::histogram!("museums_fetch_duration_seconds").record(duration_secs);
        ::metrics::histogram!("museums_fetch_payload_bytes").record(payload_bytes as f64);
    }

    pub fn record_fetch_error() {
        ::metrics::counter!("museums_fetch_error_total").increment(1);
    }

    pub fn record_drop(reason: DropReason) {
        ::metrics::counter!("museums_rows_dropped_total", "reason" => reason.as_str()).increment(1);
    }

    pub fn record_rows(scraped: usize, kept: usize, outliers: usize) {
        ::metrics::counter!("museums_rows_scraped_total").increment(scraped as u64);
        ::metrics::counter!("museums_rows_outliers_total").increment(outliers as u64);
        ::metrics::gauge!("museums_dataset_rows").set(kept as f64);
    }

    pub fn record_run(success: bool) {
        if success {
            ::metrics::counter!("museums_pipeline_runs_success_total").increment(1);
        } else {
            ::metrics::counter!("museums_pipeline_runs_error_total").increment(1);
        }
    }
}

/// Install the Prometheus exporter on `0.0.0.0:port`
pub fn init_metrics(port: u16) {
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => info!(%addr, "Prometheus exporter listening on /metrics"),
        Err(e) => warn!(%addr, error = %e, "Prometheus exporter install failed"),
    }
}
