#![no_main]

use libfuzzer_sys::fuzz_target;
use tickwindow::ds::SlidingWindowBuffer;

// Fuzz property-based tests for SlidingWindowBuffer
//
// Tests specific invariants and properties:
// - Nearest-fill matches a brute-force scan (distance, then forward first)
// - Backward fill never returns a later tick
// - Forward writes clear exactly the skipped slots
// - Shifting renumbers surviving entries by the shift amount
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = (data[0] as usize % 32).max(1);
    let test_type = data[1] % 4;
    let body = &data[2..];

    match test_type {
        0 => test_nearest_matches_brute_force(capacity, body),
        1 => test_backward_never_looks_ahead(capacity, body),
        2 => test_forward_write_clears_gap(capacity, body),
        3 => test_shift_renumbers(capacity, body),
        _ => unreachable!(),
    }
});

fn fold_index(window: &SlidingWindowBuffer<u8>, arg: u8) -> isize {
    let width = window.capacity() as isize - window.available_history();
    window.available_history() + (arg as isize % width)
}

fn populate(capacity: usize, data: &[u8]) -> SlidingWindowBuffer<u8> {
    let mut window = SlidingWindowBuffer::new(capacity);
    for pair in data.chunks_exact(2) {
        let index = fold_index(&window, pair[0]);
        if pair[1] % 5 == 0 {
            window.take(index);
        } else {
            window.write(index, pair[1]);
        }
    }
    window
}

// Property: nearest-fill returns the closest filled slot, forward on ties
fn test_nearest_matches_brute_force(capacity: usize, data: &[u8]) {
    let Some((&pos_byte, rest)) = data.split_first() else {
        return;
    };
    let window = populate(capacity, rest);
    let pos = fold_index(&window, pos_byte);

    let expected = (window.available_history()..window.length() as isize)
        .filter_map(|i| window.read(i).map(|v| (i, *v)))
        .min_by_key(|&(i, _)| ((i - pos).abs(), i <= pos));
    let found = window.nearest_filled_entry(pos).map(|(i, v)| (i, *v));
    assert_eq!(found, expected);
    window.debug_validate_invariants();
}

// Property: backward fill returns the latest filled slot at or before pos
fn test_backward_never_looks_ahead(capacity: usize, data: &[u8]) {
    let Some((&pos_byte, rest)) = data.split_first() else {
        return;
    };
    let window = populate(capacity, rest);
    let pos = fold_index(&window, pos_byte);

    let expected = (window.available_history()..=pos)
        .rev()
        .find_map(|i| window.read(i).map(|v| (i, *v)));
    let found = window.nearest_filled_backward_entry(pos).map(|(i, v)| (i, *v));
    assert_eq!(found, expected);
    if let Some((index, _)) = found {
        assert!(index <= pos);
    }
}

// Property: a write at or past the frontier clears exactly [length, index)
fn test_forward_write_clears_gap(capacity: usize, data: &[u8]) {
    let Some((&target, rest)) = data.split_first() else {
        return;
    };
    let mut window = populate(capacity, rest);
    let old_len = window.length();
    if old_len == capacity {
        window.shift_window(capacity);
    }
    let old_len = window.length();
    let index = (old_len + target as usize % (capacity - old_len)) as isize;

    let cleared = window.write(index, target);
    assert_eq!(cleared, (index - old_len as isize) as usize);
    for skipped in old_len as isize..index {
        assert_eq!(window.read(skipped), None);
    }
    assert_eq!(window.read(index), Some(&target));
}

// Property: after shift(k), logical i holds what logical i + k held
fn test_shift_renumbers(capacity: usize, data: &[u8]) {
    let Some((&count_byte, rest)) = data.split_first() else {
        return;
    };
    let mut window = populate(capacity, rest);
    let count = count_byte as usize % (capacity + 1);
    let old_len = window.length();
    let before: Vec<_> = window.iter().map(|(i, v)| (i, v.copied())).collect();

    window.shift_window(count);

    let evicted = count.saturating_sub(old_len);
    for (old_index, value) in before.into_iter().skip(evicted) {
        assert_eq!(window.read(old_index - count as isize).copied(), value);
    }
    window.debug_validate_invariants();
}
