// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_diagonal_matches_the_documented_pulse_bound() {
    let diagonal = ((CANVAS_WIDTH * CANVAS_WIDTH + CANVAS_HEIGHT * CANVAS_HEIGHT) as f64).sqrt();
    assert!((diagonal - 1322.0).abs() < 1.0);
    // Edge-to-edge traversal speed the simulator derives from these.
    let velocity = diagonal / PULSE_TRAVERSAL_SEC as f64;
    assert!((velocity - 528.7).abs() < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_constants_are_within_reasonable_bounds() {
    assert!(PULSE_START_RADIUS > 0.0);
    assert!(PULSE_TRAVERSAL_SEC > 0.0);
    // The start radius must sit well inside the bound or pulses would
    // terminate instantly.
    let diagonal = ((CANVAS_WIDTH * CANVAS_WIDTH + CANVAS_HEIGHT * CANVAS_HEIGHT) as f64).sqrt();
    assert!((PULSE_START_RADIUS as f64) < diagonal / 10.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_easing_endpoints_are_ordered() {
    assert!(RING_ALPHA_START > RING_ALPHA_END);
    assert!(RING_ALPHA_START <= 1.0 && RING_ALPHA_END > 0.0);
    assert!(RING_WIDTH_END > RING_WIDTH_START);
    assert!(RING_WIDTH_START > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn crystal_and_tone_constants_are_consistent() {
    assert!(CRYSTAL_SCALE_MIN >= 1.0);
    assert!(CRYSTAL_SCALE_MAX > CRYSTAL_SCALE_MIN);
    assert!(CRYSTAL_BASE_RADIUS > 0.0);
    assert!(TONE_BASE_DURATION_SEC > TONE_MIN_DURATION_SEC);
    assert!(TONE_MIN_DURATION_SEC > 0.0);
    assert!(TONE_DURATION_HZ_DIVISOR > 0.0);
    assert!(CRYSTAL_MUTED_ALPHA > 0.0 && CRYSTAL_MUTED_ALPHA < 1.0);
    assert!(CRYSTAL_GLOW_BLUR > 0.0);
}
