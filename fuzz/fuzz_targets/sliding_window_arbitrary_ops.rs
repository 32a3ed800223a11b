#![no_main]

use libfuzzer_sys::fuzz_target;
use tickwindow::ds::SlidingWindowBuffer;

// Fuzz arbitrary operation sequences on SlidingWindowBuffer
//
// Tests random sequences of write, take, read, shift_window, the two
// nearest-fill searches, and clear to find edge cases and invariant
// violations. Indices are folded into the addressable range so every call
// honours the bounds contract.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Use first byte to determine capacity (1-64)
    let capacity = (data[0] as usize % 64).max(1);
    let mut window = SlidingWindowBuffer::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let arg = data[idx + 1];
        let index = fold_index(&window, arg);

        match op {
            0 => {
                let old_len = window.length() as isize;
                let cleared = window.write(index, arg);
                assert_eq!(cleared, (index - old_len).max(0) as usize);
                assert_eq!(window.read(index), Some(&arg));
            }
            1 => {
                let before = window.read(index).copied();
                assert_eq!(window.take(index), before);
                assert_eq!(window.read(index), None);
            }
            2 => {
                let value = window.read(index);
                if index >= window.length() as isize {
                    assert!(value.is_none());
                }
            }
            3 => {
                let count = arg as usize % (capacity + 1);
                let old_len = window.length();
                let floor = window_floor(capacity, old_len, count);
                let survivor = window
                    .iter()
                    .find(|&(i, v)| v.is_some() && i - count as isize >= floor)
                    .map(|(i, v)| (i, v.copied()));
                window.shift_window(count);
                if let Some((old_index, value)) = survivor {
                    assert_eq!(window.read(old_index - count as isize).copied(), value);
                }
                assert_eq!(window.length(), old_len.saturating_sub(count));
            }
            4 => {
                if let Some((found, _)) = window.nearest_filled_entry(index) {
                    assert!(found >= window.available_history());
                    assert!(found < window.length() as isize);
                }
            }
            5 => {
                if let Some((found, _)) = window.nearest_filled_backward_entry(index) {
                    assert!(found <= index);
                    assert!(found >= window.available_history());
                }
            }
            6 => {
                window.clear();
                assert!(window.is_empty());
                assert_eq!(window.find_nearest_filled(0), None);
            }
            _ => unreachable!(),
        }

        // Validate invariants after each operation
        window.debug_validate_invariants();
        assert!(window.length() <= capacity);
        assert_eq!(window.capacity(), capacity);
        assert_eq!(
            window.available_history(),
            window.length() as isize - capacity as isize
        );
        assert_eq!(window.iter().len(), capacity);

        idx += 2;
    }
});

fn fold_index(window: &SlidingWindowBuffer<u8>, arg: u8) -> isize {
    let width = window.capacity() as isize - window.available_history();
    window.available_history() + (arg as isize % width)
}

/// Lowest logical index (post-shift) that survives `shift_window(count)`.
fn window_floor(capacity: usize, old_len: usize, count: usize) -> isize {
    old_len.saturating_sub(count) as isize - capacity as isize
}
