//! Test fixtures and utilities for pulse-timer testing.
//!
//! Provides:
//! - `MockCounter`: Scripted implementation of the PulseCounter trait
//! - `TestClock`: Small clock so scenarios need few pulses per millisecond
//! - Helper functions for common test scenarios

#![allow(dead_code)]

use pulse_timer::config::ClockConfig;
use pulse_timer::{ControlWord, PulseCounter};
use std::collections::VecDeque;

// ============================================================================
// MockCounter - Scripted PulseCounter Implementation
// ============================================================================

/// Mock pulse counter for testing.
///
/// Reads pop from a script; once the script runs dry the last value (or
/// `idle_value`) is repeated. Every control word written is captured.
#[derive(Debug)]
pub struct MockCounter {
    /// Values returned by successive reads
    reads: VecDeque<u32>,

    /// Value returned when the script is empty
    idle_value: u32,

    /// Number of reads performed
    read_count: usize,

    /// Captured control words
    writes: Vec<ControlWord>,
}

impl MockCounter {
    /// Create MockCounter that always reads zero.
    pub fn new() -> Self {
        Self {
            reads: VecDeque::new(),
            idle_value: 0,
            read_count: 0,
            writes: Vec::new(),
        }
    }

    /// Create MockCounter with pre-loaded reads.
    pub fn with_reads(reads: &[u32]) -> Self {
        let mut counter = Self::new();
        counter.push_reads(reads);
        counter
    }

    /// Queue values for upcoming reads.
    pub fn push_reads(&mut self, reads: &[u32]) {
        self.reads.extend(reads.iter().copied());
    }

    /// Value to read once the script is exhausted.
    pub fn set_idle_value(&mut self, value: u32) {
        self.idle_value = value;
    }

    /// Captured control words.
    pub fn writes(&self) -> &[ControlWord] {
        &self.writes
    }

    /// Clear captured control words.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Number of reads performed.
    pub fn read_count(&self) -> usize {
        self.read_count
    }

    /// Remaining scripted reads.
    pub fn remaining_reads(&self) -> usize {
        self.reads.len()
    }
}

impl Default for MockCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCounter for MockCounter {
    fn write_control(&mut self, word: ControlWord) {
        self.writes.push(word);
    }

    fn read(&mut self) -> u32 {
        self.read_count += 1;
        match self.reads.pop_front() {
            Some(value) => {
                self.idle_value = value;
                value
            }
            None => self.idle_value,
        }
    }
}

// ============================================================================
// TestClock - Tiny Clock for Readable Scenarios
// ============================================================================

/// 10 kHz clock: 10 pulses per millisecond.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestClock;

impl ClockConfig for TestClock {
    const CLOCK_HZ: u32 = 10_000;
}

/// Pulses per millisecond for `TestClock`.
pub const TEST_PPM: u32 = TestClock::PULSES_PER_MS;

// ============================================================================
// Helper Functions
// ============================================================================

/// Control word sequence issued when the engine rolls over one millisecond.
pub const ROLLOVER: [ControlWord; 2] = [ControlWord::Reset, ControlWord::Start];

/// MockCounter whose next `n` reads each report one full millisecond.
pub fn counter_with_ticks(n: usize) -> MockCounter {
    MockCounter::with_reads(&vec![TEST_PPM; n])
}
