// Host-side tests for the shared input state.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn new_state_defaults_pointer_and_scroll() {
    let s = InputState::new(Vec2::new(800.0, 600.0));
    assert_eq!(s.scroll_y, 0.0);
    assert_eq!(s.pointer, Vec2::ZERO);
    assert_eq!(s.viewport, Vec2::new(800.0, 600.0));
}

#[test]
fn setters_are_last_write_wins() {
    let mut s = InputState::new(Vec2::new(800.0, 600.0));
    s.set_scroll(120.0);
    s.set_scroll(340.0);
    assert_eq!(s.scroll_y, 340.0);

    s.set_pointer(10.0, 20.0);
    s.set_pointer(400.0, 300.0);
    assert_eq!(s.pointer, Vec2::new(400.0, 300.0));

    s.set_viewport(1024.0, 768.0);
    assert_eq!(s.viewport, Vec2::new(1024.0, 768.0));
}

#[test]
fn scroll_offset_never_goes_negative() {
    let mut s = InputState::default();
    s.set_scroll(-50.0); // rubber-band overscroll
    assert_eq!(s.scroll_y, 0.0);
}

#[test]
fn pointer_uv_normalizes_against_the_viewport() {
    let mut s = InputState::new(Vec2::new(800.0, 600.0));
    s.set_pointer(400.0, 300.0);
    assert_eq!(s.pointer_uv(), [0.5, 0.5]);

    s.set_pointer(800.0, 0.0);
    assert_eq!(s.pointer_uv(), [1.0, 0.0]);

    // Coordinates outside the viewport clamp instead of exceeding [0,1]
    s.set_pointer(2000.0, -10.0);
    assert_eq!(s.pointer_uv(), [1.0, 0.0]);
}

#[test]
fn pointer_uv_guards_a_zero_viewport() {
    let mut s = InputState::new(Vec2::ZERO);
    s.set_pointer(123.0, 456.0);
    assert_eq!(s.pointer_uv(), [0.5, 0.5]);
}
