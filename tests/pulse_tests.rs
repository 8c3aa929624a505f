// Host-side tests for the pure pulse simulator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod sim {
    include!("../src/core/sim.rs");
}

use constants::*;
use glam::Vec2;
use sim::*;

const CANVAS_W: f32 = 1152.0;
const CANVAS_H: f32 = 648.0;

fn simulator() -> PulseSimulator {
    PulseSimulator::new(CANVAS_W, CANVAS_H)
}

#[test]
fn max_radius_is_canvas_diagonal() {
    let sim = simulator();
    let diagonal = (CANVAS_W * CANVAS_W + CANVAS_H * CANVAS_H).sqrt();
    assert!((sim.max_radius() - diagonal).abs() < 1e-3);
    assert!((sim.max_radius() - 1321.75).abs() < 1.0);
}

#[test]
fn advance_without_pulse_is_a_noop() {
    let mut sim = simulator();
    assert!(!sim.is_active());
    assert!(sim.advance(0.5).is_none());
    assert!(sim.advance(1.0).is_none());
}

#[test]
fn radius_growth_is_monotonic_and_linear() {
    let mut sim = simulator();
    let velocity = sim.max_radius() / PULSE_TRAVERSAL_SEC;
    let t0 = 10.0;
    sim.start_pulse(Vec2::new(100.0, 100.0), t0);

    let mut prev = PULSE_START_RADIUS;
    let mut t = t0;
    // Uneven frame spacing on purpose; growth must track wall-clock time.
    for dt in [0.016, 0.033, 0.008, 0.1, 0.016, 0.05] {
        t += dt;
        let frame = sim.advance(t).expect("pulse is active");
        assert!(frame.new_radius >= frame.old_radius);
        assert!(frame.new_radius >= prev);
        let expected = PULSE_START_RADIUS + velocity * (t - t0) as f32;
        assert!(
            (frame.new_radius - expected).abs() < 1e-2,
            "radius {} != expected {expected}",
            frame.new_radius
        );
        prev = frame.new_radius;
    }
}

#[test]
fn pulse_terminates_on_first_frame_reaching_max_radius() {
    let mut sim = simulator();
    sim.start_pulse(Vec2::ZERO, 0.0);
    let mut t = 0.0;
    let mut terminal_seen = false;
    for _ in 0..400 {
        t += 1.0 / 60.0;
        match sim.advance(t) {
            Some(frame) => {
                assert!(
                    !terminal_seen,
                    "advance returned a frame after termination"
                );
                if frame.new_radius >= sim.max_radius() {
                    terminal_seen = true;
                    assert!(!sim.is_active());
                }
            }
            None => assert!(terminal_seen || !sim.is_active()),
        }
    }
    assert!(terminal_seen, "pulse never terminated");
    // Traversal takes ~2.5 s from the start radius; well under 400 frames.
    assert!(sim.advance(t + 1.0).is_none());
}

#[test]
fn terminal_frame_is_still_reported_to_the_detector() {
    let mut sim = simulator();
    sim.start_pulse(Vec2::ZERO, 0.0);
    // One huge frame gap sweeps straight past the bound.
    let frame = sim.advance(10.0).expect("terminal frame must be returned");
    assert!(frame.new_radius >= sim.max_radius());
    assert!(!sim.is_active());
}

#[test]
fn backwards_timestamp_does_not_shrink_the_pulse() {
    let mut sim = simulator();
    sim.start_pulse(Vec2::ZERO, 5.0);
    let frame = sim.advance(4.0).expect("pulse is active");
    assert_eq!(frame.old_radius, frame.new_radius);
    assert_eq!(sim.current_radius(), Some(PULSE_START_RADIUS));
}

#[test]
fn starting_a_new_pulse_replaces_the_old_one() {
    let mut sim = simulator();
    sim.start_pulse(Vec2::new(0.0, 0.0), 0.0);
    sim.advance(1.0);
    assert!(sim.current_radius().unwrap() > PULSE_START_RADIUS);

    sim.start_pulse(Vec2::new(500.0, 300.0), 1.2);
    assert_eq!(sim.current_radius(), Some(PULSE_START_RADIUS));
    let frame = sim.advance(1.3).expect("replacement pulse is active");
    assert_eq!(frame.origin, Vec2::new(500.0, 300.0));
    assert!(frame.old_radius == PULSE_START_RADIUS);
}

#[test]
fn clear_is_idempotent() {
    let mut sim = simulator();
    sim.start_pulse(Vec2::ZERO, 0.0);
    sim.clear();
    assert!(!sim.is_active());
    sim.clear();
    assert!(!sim.is_active());
    assert!(sim.advance(1.0).is_none());
}
