use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{WindowMetricsReadRecorder, WindowMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct WindowMetrics {
    pub write_calls: u64,
    pub forward_writes: u64,
    pub cleared_slots: u64,
    pub take_calls: u64,
    pub take_found: u64,
    pub shift_calls: u64,
    pub shifted_slots: u64,
    pub clear_calls: u64,
    pub read_calls: MetricsCell,
    pub read_hits: MetricsCell,
    pub read_misses: MetricsCell,
    pub nearest_calls: MetricsCell,
    pub nearest_backward_calls: MetricsCell,
    pub nearest_probe_steps: MetricsCell,
    pub nearest_hits: MetricsCell,
    pub nearest_misses: MetricsCell,
}

impl WindowMetrics {
    pub fn new() -> WindowMetrics {
        Self::default()
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        self.write_calls = 0;
        self.forward_writes = 0;
        self.cleared_slots = 0;
        self.take_calls = 0;
        self.take_found = 0;
        self.shift_calls = 0;
        self.shifted_slots = 0;
        self.clear_calls = 0;
        self.read_calls.reset();
        self.read_hits.reset();
        self.read_misses.reset();
        self.nearest_calls.reset();
        self.nearest_backward_calls.reset();
        self.nearest_probe_steps.reset();
        self.nearest_hits.reset();
        self.nearest_misses.reset();
    }
}

impl WindowMetricsRecorder for WindowMetrics {
    fn record_write_call(&mut self) {
        self.write_calls += 1;
    }

    fn record_forward_write(&mut self) {
        self.forward_writes += 1;
    }

    fn record_cleared_slots(&mut self, count: u64) {
        self.cleared_slots += count;
    }

    fn record_take_call(&mut self) {
        self.take_calls += 1;
    }

    fn record_take_found(&mut self) {
        self.take_found += 1;
    }

    fn record_shift_call(&mut self) {
        self.shift_calls += 1;
    }

    fn record_shifted_slots(&mut self, count: u64) {
        self.shifted_slots += count;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl WindowMetricsReadRecorder for &WindowMetrics {
    fn record_read_call(&self) {
        self.read_calls.incr();
    }

    fn record_read_hit(&self) {
        self.read_hits.incr();
    }

    fn record_read_miss(&self) {
        self.read_misses.incr();
    }

    fn record_nearest_call(&self) {
        self.nearest_calls.incr();
    }

    fn record_nearest_backward_call(&self) {
        self.nearest_backward_calls.incr();
    }

    fn record_nearest_probe_step(&self) {
        self.nearest_probe_steps.incr();
    }

    fn record_nearest_hit(&self) {
        self.nearest_hits.incr();
    }

    fn record_nearest_miss(&self) {
        self.nearest_misses.incr();
    }
}
