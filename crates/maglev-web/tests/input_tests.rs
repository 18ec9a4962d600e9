// Host-side tests for the pure drag-state math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::DragState;

#[test]
fn begin_records_button_and_position() {
    let mut drag = DragState::default();
    assert!(!drag.active);
    drag.begin(0, 10.0, 20.0);
    assert!(drag.active);
    assert_eq!(drag.button, 0);
    assert_eq!((drag.last_x, drag.last_y), (10.0, 20.0));
}

#[test]
fn advance_returns_deltas_since_the_last_sample() {
    let mut drag = DragState::default();
    drag.begin(0, 100.0, 100.0);
    assert_eq!(drag.advance(103.0, 98.0), (3.0, -2.0));
    // Deltas are relative to the previous sample, not the drag origin.
    assert_eq!(drag.advance(103.0, 98.0), (0.0, 0.0));
    assert_eq!(drag.advance(100.0, 100.0), (-3.0, 2.0));
}

#[test]
fn secondary_button_pans() {
    let mut drag = DragState::default();
    drag.begin(2, 0.0, 0.0);
    assert!(drag.is_pan());
    drag.begin(0, 0.0, 0.0);
    assert!(!drag.is_pan());
    drag.begin(1, 0.0, 0.0);
    assert!(!drag.is_pan());
}

#[test]
fn end_stops_the_drag_but_keeps_the_last_position() {
    let mut drag = DragState::default();
    drag.begin(0, 5.0, 6.0);
    drag.end();
    assert!(!drag.active);
    assert_eq!((drag.last_x, drag.last_y), (5.0, 6.0));
}
