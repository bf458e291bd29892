use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Option<Arc<PrometheusHandle>>,
}

impl AppState {
    pub(crate) fn new(readiness: Arc<AtomicBool>, metrics: PrometheusHandle) -> Self {
        Self {
            readiness,
            metrics: Some(Arc::new(metrics)),
        }
    }

    #[cfg(test)]
    pub(crate) fn without_metrics(ready: bool) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: None,
        }
    }
}
