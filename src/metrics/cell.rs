use std::cell::Cell;

/// A counter that can be bumped through a shared reference.
///
/// Used for counters recorded by `&self` lookups (`read`, the nearest-fill
/// searches). The owning buffer is single-threaded, so a plain [`Cell`] is
/// enough; the cell makes the buffer `!Sync` when the `metrics` feature is on.
#[repr(transparent)]
#[derive(Debug, Default, Clone)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.add(1);
    }

    #[inline]
    pub fn add(&self, n: u64) {
        self.0.set(self.0.get().wrapping_add(n));
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_counts_and_resets() {
        let cell = MetricsCell::new();
        cell.incr();
        cell.add(4);
        assert_eq!(cell.get(), 5);
        cell.reset();
        assert_eq!(cell.get(), 0);
    }
}
