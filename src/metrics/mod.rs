//! Optional operation counters for [`SlidingWindowBuffer`](crate::ds::SlidingWindowBuffer).
//!
//! Enabled with the `metrics` cargo feature. Recording is split from
//! snapshotting and export, see [`traits`] for the hierarchy.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::WindowMetrics;
pub use snapshot::WindowMetricsSnapshot;
pub use traits::{
    MetricsExporter, MetricsSnapshotProvider, WindowMetricsReadRecorder, WindowMetricsRecorder,
};
