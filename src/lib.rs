//! tickwindow: a fixed-capacity sliding window over per-tick state.
//!
//! See [`ds::sliding_window`] for the data structure and its invariants.

pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;

pub use crate::ds::{SlidingWindowBuffer, WindowState};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::WindowMetricsSnapshot;
