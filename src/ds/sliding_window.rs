//! Fixed-capacity sliding window over a logical tick index.
//!
//! Maps an unbounded, monotonically advancing logical index space onto `C`
//! physical slots. Callers write per-tick state at logical indices, possibly
//! ahead of the current frontier, advance the window with
//! [`shift_window`](SlidingWindowBuffer::shift_window), and fill gaps with
//! nearest-neighbour lookups.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                   SlidingWindowBuffer<T> (C = 6)                            │
//! │                                                                             │
//! │   slots: Box<[Option<T>]>     begin: physical slot of logical index 0       │
//! │   len:   live slots (0..=C)   available_history = len - C  (always <= 0)    │
//! │                                                                             │
//! │   Logical window  [available_history, len)                                  │
//! │                                                                             │
//! │     history (< 0)          │ live (>= 0)                                    │
//! │     -2      -1             │  0     1     2     3                           │
//! │   ┌─────┬─────┐            │┌─────┬─────┬─────┬─────┐                       │
//! │   │  A  │  _  │            ││  B  │  _  │  _  │  C  │                       │
//! │   └─────┴─────┘            │└─────┴─────┴─────┴─────┘                       │
//! │                                                                             │
//! │   Physical mapping                                                          │
//! │   ────────────────                                                          │
//! │                                                                             │
//! │   physical(i) = (i + begin) mod C      (Euclidean, i may be negative)       │
//! │                                                                             │
//! │   begin = 2:                                                                │
//! │   Index:     0     1     2     3     4     5                                │
//! │            ┌─────┬─────┬─────┬─────┬─────┬─────┐                          │
//! │   slots:   │  A  │  _  │  B  │  _  │  _  │  C  │                          │
//! │            └─────┴─────┴─────┴─────┴─────┴─────┘                          │
//! │                          ▲                                                  │
//! │                          begin (logical 0)                                  │
//! │                                                                             │
//! │   shift_window(k): begin = (begin + k) mod C, len = len - k (floor 0)       │
//! │   logical 0 now names what used to be logical k                             │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation                          | Description                          | Complexity |
//! |------------------------------------|--------------------------------------|------------|
//! | [`read`]                           | Element at a logical index           | O(1)       |
//! | [`write`]                          | Store, clearing skipped slots        | O(gap)     |
//! | [`take`]                           | Remove and return an element         | O(1)       |
//! | [`shift_window`]                   | Advance the frontier by `k` ticks    | O(1)*      |
//! | [`find_nearest_filled`]            | Closest filled slot, both directions | O(len)     |
//! | [`find_nearest_filled_backward`]   | Closest filled slot at or before     | O(len)     |
//! | [`iter`]                           | Walk the window oldest to newest     | O(C)       |
//!
//! \* O(k) when shifting past the frontier, since never-written positions
//! are cleared as they move into history.
//!
//! [`read`]: SlidingWindowBuffer::read
//! [`write`]: SlidingWindowBuffer::write
//! [`take`]: SlidingWindowBuffer::take
//! [`shift_window`]: SlidingWindowBuffer::shift_window
//! [`find_nearest_filled`]: SlidingWindowBuffer::find_nearest_filled
//! [`find_nearest_filled_backward`]: SlidingWindowBuffer::find_nearest_filled_backward
//! [`iter`]: SlidingWindowBuffer::iter
//!
//! ## Example Usage
//!
//! ```
//! use tickwindow::ds::SlidingWindowBuffer;
//!
//! let mut snapshots = SlidingWindowBuffer::new(4);
//!
//! snapshots.write(0, "A");
//! assert_eq!(snapshots.length(), 1);
//! assert_eq!(snapshots.available_history(), -3);
//!
//! // Writing ahead of the frontier clears the skipped slots
//! assert_eq!(snapshots.write(3, "B"), 2);
//! assert_eq!(snapshots.read(1), None);
//!
//! // Gap filling prefers the closest value
//! assert_eq!(snapshots.find_nearest_filled(1), Some(&"A"));
//!
//! // Advance two ticks: logical 0 is what used to be logical 2
//! snapshots.shift_window(2);
//! assert_eq!(snapshots.length(), 2);
//! assert_eq!(snapshots.read(-2), Some(&"A"));
//! assert_eq!(snapshots.read(1), Some(&"B"));
//! ```
//!
//! ## Thread Safety
//!
//! `SlidingWindowBuffer` has no internal synchronization. Share it across
//! threads only behind an external lock or a single owning task.
//!
//! ## Implementation Notes
//!
//! - Out-of-range indices panic in every build profile; see
//!   [`is_addressable`](SlidingWindowBuffer::is_addressable) for the
//!   non-panicking check.
//! - Slots at or past the frontier are never exposed, even though the
//!   physical storage behind them may still hold history.
//! - `debug_validate_invariants()` available in debug/test builds

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::WindowMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::WindowMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsSnapshotProvider, WindowMetricsReadRecorder, WindowMetricsRecorder,
};

/// Fixed-capacity ring of optional elements addressed by logical tick index.
///
/// The window covers logical indices `[available_history(), length())`.
/// Index 0 is the current frontier; negative indices reach back into history.
/// Capacity is fixed at construction and the backing store is never
/// reallocated.
///
/// # Example
///
/// ```
/// use tickwindow::ds::SlidingWindowBuffer;
///
/// let mut window = SlidingWindowBuffer::new(3);
/// window.write(0, 10);
/// window.write(1, 11);
/// window.write(2, 12);
///
/// // Tick forward: the window now starts at what was index 1
/// window.shift_window(1);
/// assert_eq!(window.read(0), Some(&11));
/// assert_eq!(window.read(-1), Some(&10));
/// assert_eq!(window.available_history(), -1);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingWindowBuffer<T> {
    slots: Box<[Option<T>]>,
    begin: usize,
    len: usize,
    #[cfg(feature = "metrics")]
    metrics: WindowMetrics,
}

/// Compact descriptor of a window's bookkeeping, for diagnostics.
///
/// Renders as `l=<length> h=<available_history> b=<begin>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowState {
    pub length: usize,
    pub available_history: isize,
    pub begin: usize,
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "l={} h={} b={}",
            self.length, self.available_history, self.begin
        )
    }
}

/// Maps a possibly negative index into `0..modulus`.
#[inline]
fn wrap(index: isize, modulus: usize) -> usize {
    // modulus <= isize::MAX is enforced at construction
    index.rem_euclid(modulus as isize) as usize
}

impl<T> SlidingWindowBuffer<T> {
    /// Creates an empty window backed by exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is invalid. See [`try_new`](Self::try_new).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let window = SlidingWindowBuffer::<u64>::new(8);
    /// assert!(window.is_empty());
    /// assert_eq!(window.capacity(), 8);
    /// assert_eq!(window.available_history(), -8);
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(window) => window,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty window, validating `capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or larger than
    /// `isize::MAX` (logical indices are `isize`).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// assert!(SlidingWindowBuffer::<u8>::try_new(16).is_ok());
    /// assert!(SlidingWindowBuffer::<u8>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new(
                "window capacity must be greater than zero",
            ));
        }
        if capacity > isize::MAX as usize {
            return Err(ConfigError::new(format!(
                "window capacity must not exceed {}, got {}",
                isize::MAX,
                capacity
            )));
        }
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Ok(Self {
            slots,
            begin: 0,
            len: 0,
            #[cfg(feature = "metrics")]
            metrics: WindowMetrics::default(),
        })
    }

    /// Returns the fixed number of physical slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live logical slots, `0..=capacity()`.
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(4);
    /// window.write(2, 'x');
    /// assert_eq!(window.length(), 3);
    ///
    /// // Length caps at capacity
    /// window.write(3, 'y');
    /// assert_eq!(window.length(), 4);
    /// ```
    #[inline]
    pub fn length(&self) -> usize {
        self.len
    }

    /// Returns `true` if no logical slot at or after the frontier is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the smallest addressable logical index, `length() - capacity()`.
    ///
    /// Always `<= 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(5);
    /// assert_eq!(window.available_history(), -5);
    ///
    /// window.write(1, ());
    /// assert_eq!(window.available_history(), -3);
    /// ```
    #[inline]
    pub fn available_history(&self) -> isize {
        self.len as isize - self.capacity() as isize
    }

    /// Returns `true` if `index` satisfies the bounds contract of
    /// [`read`](Self::read) and [`write`](Self::write):
    /// `available_history() <= index < capacity()`.
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(4);
    /// window.write(0, 1u8);
    ///
    /// assert!(window.is_addressable(-3));
    /// assert!(window.is_addressable(3));
    /// assert!(!window.is_addressable(-4));
    /// assert!(!window.is_addressable(4));
    /// ```
    #[inline]
    pub fn is_addressable(&self, index: isize) -> bool {
        index >= self.available_history() && index < self.capacity() as isize
    }

    /// Returns the element stored at logical `index`.
    ///
    /// Returns `None` if the slot was never written, was cleared, or lies at
    /// or past the frontier (`index >= length()`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not [addressable](Self::is_addressable).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(4);
    /// window.write(0, "a");
    /// window.write(2, "c");
    ///
    /// assert_eq!(window.read(0), Some(&"a"));
    /// assert_eq!(window.read(1), None); // skipped by the forward write
    /// assert_eq!(window.read(3), None); // past the frontier
    /// ```
    #[track_caller]
    pub fn read(&self, index: isize) -> Option<&T> {
        self.check_addressable("read", index);
        let value = self.live(index);
        #[cfg(feature = "metrics")]
        {
            (&self.metrics).record_read_call();
            if value.is_some() {
                (&self.metrics).record_read_hit();
            } else {
                (&self.metrics).record_read_miss();
            }
        }
        value
    }

    /// Returns a mutable reference to the element at logical `index`.
    ///
    /// Same contract as [`read`](Self::read).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not [addressable](Self::is_addressable).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(2);
    /// window.write(0, 1);
    /// if let Some(v) = window.read_mut(0) {
    ///     *v += 41;
    /// }
    /// assert_eq!(window.read(0), Some(&42));
    /// ```
    #[track_caller]
    pub fn read_mut(&mut self, index: isize) -> Option<&mut T> {
        self.check_addressable("read_mut", index);
        if index >= self.len as isize {
            return None;
        }
        let slot = self.physical(index);
        self.slots[slot].as_mut()
    }

    /// Stores `value` at logical `index` and returns how many slots were
    /// cleared to reach it.
    ///
    /// A write at or past the frontier first empties every slot in
    /// `[length(), index)`, so physical slots reused from earlier wraps never
    /// leak stale values. The frontier then grows to cover `index`, capped at
    /// `capacity()`; history that falls below the new
    /// `available_history()` becomes unaddressable.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not [addressable](Self::is_addressable).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(4);
    /// assert_eq!(window.write(0, 'a'), 0);
    /// assert_eq!(window.write(3, 'd'), 2); // clears 1 and 2
    /// assert_eq!(window.length(), 4);
    /// assert_eq!(window.available_history(), 0);
    ///
    /// // Overwriting inside the window clears nothing
    /// assert_eq!(window.write(1, 'b'), 0);
    /// ```
    #[track_caller]
    pub fn write(&mut self, index: isize, value: T) -> usize {
        self.check_addressable("write", index);
        let old_len = self.len as isize;
        let cleared = if index > old_len {
            for skipped in old_len..index {
                let slot = self.physical(skipped);
                self.slots[slot] = None;
            }
            (index - old_len) as usize
        } else {
            0
        };

        let slot = self.physical(index);
        self.slots[slot] = Some(value);
        self.len = (index + 1).max(old_len).min(self.capacity() as isize) as usize;

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_write_call();
            if index >= old_len {
                self.metrics.record_forward_write();
            }
            self.metrics.record_cleared_slots(cleared as u64);
        }
        cleared
    }

    /// Empties the slot at logical `index`, returning its previous value.
    ///
    /// Never moves the frontier. Positions at or past the frontier hold no
    /// value and return `None`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not [addressable](Self::is_addressable).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(3);
    /// window.write(1, "late");
    ///
    /// assert_eq!(window.take(1), Some("late"));
    /// assert_eq!(window.read(1), None);
    /// assert_eq!(window.length(), 2);
    /// ```
    #[track_caller]
    pub fn take(&mut self, index: isize) -> Option<T> {
        self.check_addressable("take", index);
        #[cfg(feature = "metrics")]
        self.metrics.record_take_call();
        if index >= self.len as isize {
            return None;
        }
        let slot = self.physical(index);
        let value = self.slots[slot].take();
        #[cfg(feature = "metrics")]
        if value.is_some() {
            self.metrics.record_take_found();
        }
        value
    }

    /// Advances the frontier by `count` ticks.
    ///
    /// Logical index 0 is redefined to what was logical index `count`, and
    /// the length shrinks by `count` (floored at 0). Every previously
    /// addressable element keeps its physical slot; it is simply renumbered
    /// `count` lower. Shifting past the frontier moves never-written
    /// positions into history, and those are cleared on the way.
    ///
    /// `shift_window(0)` is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `count > capacity()`.
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(4);
    /// for tick in 0..4 {
    ///     window.write(tick, tick * 10);
    /// }
    ///
    /// window.shift_window(2);
    /// assert_eq!(window.length(), 2);
    /// assert_eq!(window.available_history(), -2);
    /// assert_eq!(window.read(0), Some(&20));
    /// assert_eq!(window.read(-2), Some(&0));
    /// ```
    #[track_caller]
    pub fn shift_window(&mut self, count: usize) {
        let capacity = self.capacity();
        assert!(
            count <= capacity,
            "shift_window: count {} exceeds capacity {}",
            count,
            capacity
        );
        if count == 0 {
            return;
        }

        let old_len = self.len;
        for stale in old_len..count {
            let slot = (self.begin + stale) % capacity;
            self.slots[slot] = None;
        }
        self.begin = (self.begin + count) % capacity;
        self.len = old_len.saturating_sub(count);

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_shift_call();
            self.metrics.record_shifted_slots(count as u64);
            self.metrics
                .record_cleared_slots(count.saturating_sub(old_len) as u64);
        }
    }

    /// Returns the filled element closest to `pos`.
    ///
    /// Checks `pos` first, then probes `pos + 1, pos - 1, pos + 2, pos - 2, …`
    /// (forward first at each distance). Forward probes stop at
    /// `length() - 1`, backward probes at `available_history()`, both
    /// inclusive. Returns `None` when the whole window is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not [addressable](Self::is_addressable).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(8);
    /// window.write(0, "a");
    /// window.write(4, "e");
    ///
    /// assert_eq!(window.find_nearest_filled(1), Some(&"a"));
    /// assert_eq!(window.find_nearest_filled(3), Some(&"e"));
    /// // Equal distance: forward wins
    /// assert_eq!(window.find_nearest_filled(2), Some(&"e"));
    /// ```
    #[track_caller]
    pub fn find_nearest_filled(&self, pos: isize) -> Option<&T> {
        self.nearest_filled_entry(pos).map(|(_, value)| value)
    }

    /// Like [`find_nearest_filled`](Self::find_nearest_filled), but also
    /// returns the logical index where the element was found.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not [addressable](Self::is_addressable).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(6);
    /// window.write(-2, 'h');
    /// window.write(3, 'f');
    ///
    /// assert_eq!(window.nearest_filled_entry(0), Some((-2, &'h')));
    /// assert_eq!(window.nearest_filled_entry(2), Some((3, &'f')));
    /// ```
    #[track_caller]
    pub fn nearest_filled_entry(&self, pos: isize) -> Option<(isize, &T)> {
        self.check_addressable("find_nearest_filled", pos);
        #[cfg(feature = "metrics")]
        (&self.metrics).record_nearest_call();

        let found = match self.live(pos) {
            Some(value) => Some((pos, value)),
            None => self.scan_outward(pos),
        };
        self.record_nearest_outcome(found.is_some());
        found
    }

    /// Returns the filled element closest to `pos` at or before `pos`.
    ///
    /// Checks `pos`, then `pos - 1` down to `available_history()` inclusive.
    /// Never looks forward, so later ticks cannot leak into a lookup of an
    /// earlier one.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not [addressable](Self::is_addressable).
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(8);
    /// window.write(0, "a");
    /// window.write(2, "c");
    ///
    /// assert_eq!(window.find_nearest_filled_backward(1), Some(&"a"));
    /// assert_eq!(window.find_nearest_filled_backward(-1), None);
    /// ```
    #[track_caller]
    pub fn find_nearest_filled_backward(&self, pos: isize) -> Option<&T> {
        self.nearest_filled_backward_entry(pos)
            .map(|(_, value)| value)
    }

    /// Like [`find_nearest_filled_backward`](Self::find_nearest_filled_backward),
    /// but also returns the logical index where the element was found.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not [addressable](Self::is_addressable).
    #[track_caller]
    pub fn nearest_filled_backward_entry(&self, pos: isize) -> Option<(isize, &T)> {
        self.check_addressable("find_nearest_filled_backward", pos);
        #[cfg(feature = "metrics")]
        (&self.metrics).record_nearest_backward_call();

        let found = match self.live(pos) {
            Some(value) => Some((pos, value)),
            None => self.scan_backward(pos),
        };
        self.record_nearest_outcome(found.is_some());
        found
    }

    /// Returns an iterator over `(logical_index, element)` for every index in
    /// `[available_history(), length())`, oldest first.
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(3);
    /// window.write(0, 'a');
    /// window.write(2, 'c');
    ///
    /// let seen: Vec<_> = window.iter().collect();
    /// assert_eq!(seen, vec![(0, Some(&'a')), (1, None), (2, Some(&'c'))]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            window: self,
            front: self.available_history(),
            back: self.len as isize,
        }
    }

    /// Returns the current bookkeeping as a [`WindowState`].
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(4);
    /// window.write(3, 0u8);
    /// window.shift_window(2);
    /// assert_eq!(window.state().to_string(), "l=2 h=-2 b=2");
    /// ```
    pub fn state(&self) -> WindowState {
        WindowState {
            length: self.len,
            available_history: self.available_history(),
            begin: self.begin,
        }
    }

    /// Empties every slot and resets the window to its freshly built state.
    ///
    /// # Example
    ///
    /// ```
    /// use tickwindow::ds::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(3);
    /// window.write(1, 5);
    /// window.shift_window(1);
    ///
    /// window.clear();
    /// assert!(window.is_empty());
    /// assert_eq!(window.state().begin, 0);
    /// assert_eq!(window.find_nearest_filled(0), None);
    /// ```
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.begin = 0;
        self.len = 0;
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Returns an approximate memory footprint in bytes.
    ///
    /// Covers the struct and the backing store; heap memory owned by the
    /// elements themselves is not counted.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.capacity() * std::mem::size_of::<Option<T>>()
    }

    /// Verifies the window bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let capacity = self.capacity();
        if capacity == 0 || capacity > isize::MAX as usize {
            return Err(InvariantError::new(format!(
                "backing store capacity {} is out of range",
                capacity
            )));
        }
        if self.len > capacity {
            return Err(InvariantError::new(format!(
                "length {} exceeds capacity {}",
                self.len, capacity
            )));
        }
        if self.begin >= capacity {
            return Err(InvariantError::new(format!(
                "rotation offset {} outside backing store of {} slots",
                self.begin, capacity
            )));
        }
        if self.available_history() > 0 {
            return Err(InvariantError::new(format!(
                "available history {} is positive",
                self.available_history()
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the window contents as `(logical_index, element)` pairs.
    pub fn debug_snapshot(&self) -> Vec<(isize, Option<&T>)> {
        self.iter().collect()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("{}", e);
        }
    }

    #[inline]
    fn physical(&self, index: isize) -> usize {
        let capacity = self.capacity();
        (wrap(index, capacity) + self.begin) % capacity
    }

    /// Bounds-unchecked read that hides everything at or past the frontier.
    #[inline]
    fn live(&self, index: isize) -> Option<&T> {
        if index >= self.len as isize {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    #[inline]
    fn probe(&self, index: isize) -> Option<(isize, &T)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_nearest_probe_step();
        self.live(index).map(|value| (index, value))
    }

    /// Interleaved probe of `pos + 1, pos - 1, pos + 2, …`, forward first.
    fn scan_outward(&self, pos: isize) -> Option<(isize, &T)> {
        let lowest = self.available_history();
        let frontier = self.len as isize;
        let mut forward = pos + 1;
        // nothing at or past the frontier is live
        let mut backward = pos.min(frontier) - 1;

        while forward < frontier || backward >= lowest {
            if forward < frontier {
                if let Some(hit) = self.probe(forward) {
                    return Some(hit);
                }
                forward += 1;
            }
            if backward >= lowest {
                if let Some(hit) = self.probe(backward) {
                    return Some(hit);
                }
                backward -= 1;
            }
        }
        None
    }

    fn scan_backward(&self, pos: isize) -> Option<(isize, &T)> {
        let lowest = self.available_history();
        let mut backward = pos.min(self.len as isize) - 1;
        while backward >= lowest {
            if let Some(hit) = self.probe(backward) {
                return Some(hit);
            }
            backward -= 1;
        }
        None
    }

    #[cfg(feature = "metrics")]
    fn record_nearest_outcome(&self, found: bool) {
        if found {
            (&self.metrics).record_nearest_hit();
        } else {
            (&self.metrics).record_nearest_miss();
        }
    }

    #[cfg(not(feature = "metrics"))]
    #[inline]
    fn record_nearest_outcome(&self, _found: bool) {}

    #[track_caller]
    fn check_addressable(&self, op: &str, index: isize) {
        assert!(
            self.is_addressable(index),
            "{}: logical index {} outside addressable range [{}, {})",
            op,
            index,
            self.available_history(),
            self.capacity()
        );
    }
}

#[cfg(feature = "metrics")]
impl<T> SlidingWindowBuffer<T> {
    pub fn metrics_snapshot(&self) -> WindowMetricsSnapshot {
        WindowMetricsSnapshot {
            write_calls: self.metrics.write_calls,
            forward_writes: self.metrics.forward_writes,
            cleared_slots: self.metrics.cleared_slots,
            take_calls: self.metrics.take_calls,
            take_found: self.metrics.take_found,
            shift_calls: self.metrics.shift_calls,
            shifted_slots: self.metrics.shifted_slots,
            clear_calls: self.metrics.clear_calls,
            read_calls: self.metrics.read_calls.get(),
            read_hits: self.metrics.read_hits.get(),
            read_misses: self.metrics.read_misses.get(),
            nearest_calls: self.metrics.nearest_calls.get(),
            nearest_backward_calls: self.metrics.nearest_backward_calls.get(),
            nearest_probe_steps: self.metrics.nearest_probe_steps.get(),
            nearest_hits: self.metrics.nearest_hits.get(),
            nearest_misses: self.metrics.nearest_misses.get(),
            length: self.len,
            available_history: self.available_history(),
            capacity: self.capacity(),
        }
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<WindowMetricsSnapshot> for SlidingWindowBuffer<T> {
    fn snapshot(&self) -> WindowMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// Display: "l=<len> h=<hist> [ <history> | <live> ]", empty slots as `_`
// ---------------------------------------------------------------------------

impl<T: fmt::Display> fmt::Display for SlidingWindowBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l={} h={} [ ", self.len, self.available_history())?;
        for (index, value) in self.iter() {
            if index == 0 {
                f.write_str("| ")?;
            }
            match value {
                Some(value) => write!(f, "{} ", value)?,
                None => f.write_str("_ ")?,
            }
        }
        if self.len == 0 {
            f.write_str("| ")?;
        }
        f.write_str("]")
    }
}

// ---------------------------------------------------------------------------
// PartialEq, Eq: compare the logical window, not the raw backing store
// (rotation offset and slots past the frontier are not observable)
// ---------------------------------------------------------------------------

impl<T: PartialEq> PartialEq for SlidingWindowBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SlidingWindowBuffer<T> {}

// ---------------------------------------------------------------------------
// Iterator
// ---------------------------------------------------------------------------

/// Borrowed iterator over a [`SlidingWindowBuffer`], oldest logical index first.
///
/// Created by [`SlidingWindowBuffer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    window: &'a SlidingWindowBuffer<T>,
    front: isize,
    back: isize, // exclusive
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (isize, Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some((index, self.window.live(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some((self.back, self.window.live(self.back)))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SlidingWindowBuffer<T> {
    type Item = (isize, Option<&'a T>);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
