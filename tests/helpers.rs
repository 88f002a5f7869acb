//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::{TEST_PPM, TestClock};
use pulse_timer::{SimulatedCounter, TickEngine, Timer};

/// Engine type used by scenario tests.
pub type SimEngine = TickEngine<SimulatedCounter, TestClock>;

// ============================================================================
// Engine Creation Helpers
// ============================================================================

/// Create an idle engine over a simulated counter.
pub fn create_sim_engine() -> SimEngine {
    TickEngine::new(SimulatedCounter::new())
}

/// Create an engine and an enabled timer with the given interval.
pub fn create_engine_with_timer(interval_ms: u32) -> (SimEngine, Timer) {
    let mut engine = create_sim_engine();
    let timer = Timer::new(&mut engine, interval_ms).unwrap();
    (engine, timer)
}

// ============================================================================
// Time Stepping Helpers
// ============================================================================

/// Feed the simulated counter exactly one millisecond of pulses.
pub fn feed_one_ms(engine: &mut SimEngine) {
    engine.counter_mut().pulse(TEST_PPM);
}

/// Step `ms` milliseconds, polling `timer` once per step.
///
/// Returns the shared counter values at which the timer fired.
pub fn fire_times(engine: &mut SimEngine, timer: &Timer, ms: u32) -> Vec<u32> {
    let mut fired = Vec::new();
    for _ in 0..ms {
        feed_one_ms(engine);
        if timer.elapsed(engine) {
            fired.push(engine.last_elapsed_ms());
        }
    }
    fired
}

/// Advance shared time by `ms` milliseconds without polling any timer.
pub fn advance_ms(engine: &mut SimEngine, ms: u32) {
    for _ in 0..ms {
        feed_one_ms(engine);
        assert!(engine.advance(), "engine did not take a full millisecond");
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that `fired` lists exactly the positive multiples of `interval` up to `end`.
pub fn assert_fires_on_multiples(fired: &[u32], interval: u32, end: u32) {
    let expected: Vec<u32> = (1..=end / interval).map(|k| k * interval).collect();
    assert_eq!(
        fired, expected,
        "Expected firings at multiples of {} up to {}",
        interval, end
    );
}
