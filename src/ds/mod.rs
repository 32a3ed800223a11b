pub mod sliding_window;

pub use sliding_window::{Iter, SlidingWindowBuffer, WindowState};
