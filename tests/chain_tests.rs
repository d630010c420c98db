// Host-side tests for the trail chain smoothing.
// The crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod chain {
    include!("../src/core/chain.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use chain::step_chain;
use constants::{TRAIL_DOT_COUNT, TRAIL_FOLLOW};
use glam::Vec2;

#[test]
fn head_dot_renders_at_pointer() {
    let mut chain = vec![Vec2::ZERO; TRAIL_DOT_COUNT];
    let mut render = vec![Vec2::ZERO; TRAIL_DOT_COUNT];
    let pointer = Vec2::new(42.0, 17.0);

    step_chain(&mut chain, &mut render, pointer, TRAIL_FOLLOW);
    assert_eq!(render[0], pointer);
}

#[test]
fn converges_to_resting_pointer() {
    let mut chain = vec![Vec2::ZERO; TRAIL_DOT_COUNT];
    let mut render = vec![Vec2::ZERO; TRAIL_DOT_COUNT];
    let pointer = Vec2::new(100.0, 100.0);

    for _ in 0..400 {
        step_chain(&mut chain, &mut render, pointer, TRAIL_FOLLOW);
    }
    for (i, pos) in chain.iter().enumerate() {
        let dist = (*pos - pointer).length();
        assert!(dist < 0.05, "dot {i} still {dist} away from pointer");
    }
}

#[test]
fn settled_chain_is_a_fixed_point() {
    let pointer = Vec2::new(30.0, -12.5);
    let mut chain = vec![pointer; TRAIL_DOT_COUNT];
    let mut render = vec![Vec2::ZERO; TRAIL_DOT_COUNT];

    step_chain(&mut chain, &mut render, pointer, TRAIL_FOLLOW);
    for pos in &chain {
        assert_eq!(*pos, pointer);
    }
    for pos in &render {
        assert_eq!(*pos, pointer);
    }
}

#[test]
fn last_dot_chases_updated_first_dot() {
    // Hand-walked with follow 0.5 and three dots on the x axis. The first
    // dot's position is updated to 4 before the last dot reads it; chasing
    // the stale value 0 would land the last dot at 5 instead of 7.
    let mut chain = vec![Vec2::ZERO, Vec2::new(8.0, 0.0), Vec2::new(16.0, 0.0)];
    let mut render = vec![Vec2::ZERO; 3];

    step_chain(&mut chain, &mut render, Vec2::ZERO, 0.5);
    assert_eq!(chain[0], Vec2::new(4.0, 0.0));
    assert_eq!(chain[1], Vec2::new(10.0, 0.0));
    assert_eq!(chain[2], Vec2::new(7.0, 0.0));
}

#[test]
fn renders_previous_frame_positions_ahead_of_update() {
    // Each dot draws at the head before the head eases toward the next dot,
    // so render[i+1] reflects the value just stored into chain[i].
    let mut chain = vec![Vec2::ZERO, Vec2::new(8.0, 0.0), Vec2::new(16.0, 0.0)];
    let mut render = vec![Vec2::ZERO; 3];

    step_chain(&mut chain, &mut render, Vec2::ZERO, 0.5);
    assert_eq!(render[0], Vec2::ZERO);
    assert_eq!(render[1], Vec2::new(4.0, 0.0));
    assert_eq!(render[2], Vec2::new(10.0, 0.0));
}

#[test]
fn empty_chain_is_a_noop() {
    let mut chain: Vec<Vec2> = Vec::new();
    let mut render: Vec<Vec2> = Vec::new();
    step_chain(&mut chain, &mut render, Vec2::new(5.0, 5.0), TRAIL_FOLLOW);
    assert!(chain.is_empty());
}
