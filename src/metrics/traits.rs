//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting, and export are kept in separate traits so the
//! buffer only ever writes counters and consumers only ever read them.
//!
//! ## Architecture
//!
//! ```text
//!   Recording (inside SlidingWindowBuffer):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ WindowMetricsRecorder        │    │ WindowMetricsReadRecorder    │
//!   │ write/take/shift/clear       │    │ read/nearest-fill lookups    │
//!   │ (&mut self, plain u64)       │    │ (&self, MetricsCell)         │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! ## Design Goals
//! - **Single responsibility**: recorders only write counters; providers only
//!   read/snapshot; exporters only publish to monitoring systems.
//! - **Borrow split**: lookups take `&self`, so their counters go through a
//!   separate read recorder backed by interior mutability.

/// Counters for operations that mutate the window.
pub trait WindowMetricsRecorder {
    fn record_write_call(&mut self);
    fn record_forward_write(&mut self);
    fn record_cleared_slots(&mut self, count: u64);
    fn record_take_call(&mut self);
    fn record_take_found(&mut self);
    fn record_shift_call(&mut self);
    fn record_shifted_slots(&mut self, count: u64);
    fn record_clear(&mut self);
}

/// Counters for `&self` lookups (uses interior mutability).
pub trait WindowMetricsReadRecorder {
    fn record_read_call(&self);
    fn record_read_hit(&self);
    fn record_read_miss(&self);
    fn record_nearest_call(&self);
    fn record_nearest_backward_call(&self);
    fn record_nearest_probe_step(&self);
    fn record_nearest_hit(&self);
    fn record_nearest_miss(&self);
}

/// Produce a point-in-time snapshot of metrics (bench/test).
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
