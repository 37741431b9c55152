//! Application metrics collection.

use metrics::{counter, histogram};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Preview counters, mirrored to the global `metrics` recorder.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    pub preview_requests: AtomicU64,
    pub cache_hits: AtomicU64,
    pub renders: AtomicU64,
    pub declined: AtomicU64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_preview_request(&self) {
        self.preview_requests.fetch_add(1, Ordering::Relaxed);
        counter!("preview_requests_total").increment(1);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
        counter!("preview_cache_hits_total").increment(1);
    }

    pub fn record_render(&self, elapsed: Duration) {
        self.renders.fetch_add(1, Ordering::Relaxed);
        counter!("preview_renders_total").increment(1);
        histogram!("preview_render_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
    }

    pub fn record_declined(&self) {
        self.declined.fetch_add(1, Ordering::Relaxed);
        counter!("preview_declined_total").increment(1);
    }

    /// Prometheus text exposition of the counters, used when no recorder
    /// is installed.
    pub fn render_text(&self) -> String {
        let mut output = String::new();
        for (name, help, value) in [
            ("preview_requests_total", "Total preview requests", &self.preview_requests),
            ("preview_cache_hits_total", "Previews served from a stored file", &self.cache_hits),
            ("preview_renders_total", "Previews rendered", &self.renders),
            ("preview_declined_total", "Preview requests declined", &self.declined),
        ] {
            output.push_str(&format!(
                "# HELP {name} {help}\n# TYPE {name} counter\n{name} {}\n",
                value.load(Ordering::Relaxed)
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let m = MetricsCollector::new();
        m.record_preview_request();
        m.record_preview_request();
        m.record_declined();

        let text = m.render_text();
        assert!(text.contains("preview_requests_total 2\n"));
        assert!(text.contains("preview_declined_total 1\n"));
        assert!(text.contains("preview_renders_total 0\n"));
    }
}
