/// Point-in-time copy of a buffer's counters plus window gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetricsSnapshot {
    pub write_calls: u64,
    pub forward_writes: u64,
    pub cleared_slots: u64, // slots emptied by forward writes and over-length shifts

    pub take_calls: u64,
    pub take_found: u64,

    pub shift_calls: u64,
    pub shifted_slots: u64,

    pub clear_calls: u64,

    pub read_calls: u64,
    pub read_hits: u64,
    pub read_misses: u64,

    pub nearest_calls: u64,
    pub nearest_backward_calls: u64,
    pub nearest_probe_steps: u64, // slots examined past the requested position
    pub nearest_hits: u64,
    pub nearest_misses: u64,

    // gauges captured at snapshot time
    pub length: usize,
    pub available_history: isize,
    pub capacity: usize,
}

impl WindowMetricsSnapshot {
    /// Fraction of `read` calls that found a value, or `0.0` with no reads.
    pub fn read_hit_ratio(&self) -> f64 {
        if self.read_calls == 0 {
            0.0
        } else {
            self.read_hits as f64 / self.read_calls as f64
        }
    }

    /// Average number of probes per nearest-fill search.
    pub fn avg_probe_steps(&self) -> f64 {
        let searches = self.nearest_calls + self.nearest_backward_calls;
        if searches == 0 {
            0.0
        } else {
            self.nearest_probe_steps as f64 / searches as f64
        }
    }
}
