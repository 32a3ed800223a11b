pub use crate::ds::{SlidingWindowBuffer, WindowState};
pub use crate::error::{ConfigError, InvariantError};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::WindowMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
