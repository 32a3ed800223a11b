use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::WindowMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for window metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and hands back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_sample(&self, kind: &str, name: &str, value: impl std::fmt::Display) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_sample("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: i64) {
        self.write_sample("gauge", &self.metric_name(suffix), value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<WindowMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &WindowMetricsSnapshot) {
        self.write_counter("write_calls_total", snapshot.write_calls);
        self.write_counter("forward_writes_total", snapshot.forward_writes);
        self.write_counter("cleared_slots_total", snapshot.cleared_slots);
        self.write_counter("take_calls_total", snapshot.take_calls);
        self.write_counter("take_found_total", snapshot.take_found);
        self.write_counter("shift_calls_total", snapshot.shift_calls);
        self.write_counter("shifted_slots_total", snapshot.shifted_slots);
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_counter("read_calls_total", snapshot.read_calls);
        self.write_counter("read_hits_total", snapshot.read_hits);
        self.write_counter("read_misses_total", snapshot.read_misses);
        self.write_counter("nearest_calls_total", snapshot.nearest_calls);
        self.write_counter(
            "nearest_backward_calls_total",
            snapshot.nearest_backward_calls,
        );
        self.write_counter("nearest_probe_steps_total", snapshot.nearest_probe_steps);
        self.write_counter("nearest_hits_total", snapshot.nearest_hits);
        self.write_counter("nearest_misses_total", snapshot.nearest_misses);

        self.write_gauge("length", snapshot.length as i64);
        self.write_gauge("available_history", snapshot.available_history as i64);
        self.write_gauge("capacity", snapshot.capacity as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("ticks", Vec::new());
        let snap = WindowMetricsSnapshot {
            write_calls: 7,
            length: 3,
            available_history: -5,
            capacity: 8,
            ..Default::default()
        };
        exporter.export(&snap);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE ticks_write_calls_total counter\nticks_write_calls_total 7\n"));
        assert!(text.contains("# TYPE ticks_available_history gauge\nticks_available_history -5\n"));
        assert!(text.contains("ticks_capacity 8\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&WindowMetricsSnapshot::default());

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("\nlength 0\n"));
        assert!(text.starts_with("# TYPE write_calls_total counter"));
    }
}
