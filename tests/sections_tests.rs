// Host-side tests for active-section resolution.
// The crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sections {
    include!("../src/core/sections.rs");
}

use constants::SECTION_LOOKAHEAD_PX;
use sections::active_index;

#[test]
fn last_qualifying_section_wins() {
    // Scroll 650 with margin 200: both the section at 0 and the one at 500
    // qualify (650 >= -200, 650 >= 300) but 1000 does not (650 < 800).
    let tops = [0.0, 500.0, 1000.0];
    assert_eq!(active_index(&tops, 650.0, SECTION_LOOKAHEAD_PX), Some(1));
}

#[test]
fn nothing_qualifies_before_first_section() {
    let tops = [300.0, 900.0];
    assert_eq!(active_index(&tops, 50.0, SECTION_LOOKAHEAD_PX), None);
}

#[test]
fn margin_boundary_is_inclusive() {
    let tops = [500.0];
    assert_eq!(active_index(&tops, 300.0, 200.0), Some(0));
    assert_eq!(active_index(&tops, 299.9, 200.0), None);
}

#[test]
fn deep_scroll_selects_final_section() {
    let tops = [0.0, 500.0, 1000.0];
    assert_eq!(active_index(&tops, 5000.0, SECTION_LOOKAHEAD_PX), Some(2));
}

#[test]
fn empty_section_list_yields_none() {
    assert_eq!(active_index(&[], 650.0, SECTION_LOOKAHEAD_PX), None);
}

#[test]
fn margin_pulls_a_section_in_early() {
    let tops = [1000.0];
    assert_eq!(active_index(&tops, 800.0, 200.0), Some(0));
    assert_eq!(active_index(&tops, 800.0, 0.0), None);
}
