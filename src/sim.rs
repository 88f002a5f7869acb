//! Simulated pulse counter for host builds and tests.
//!
//! Behaves like the hardware peripheral: the count only moves while started,
//! `Reset` clears it, `Stop` freezes it. Pulses are fed in explicitly with
//! [`SimulatedCounter::pulse`], or automatically on every read to model time
//! passing between polls.

use crate::hw::{ControlWord, PulseCounter};

/// Number of control words remembered by [`SimulatedCounter`].
pub const COMMAND_LOG_SIZE: usize = 16;

/// Simulated free-running pulse counter.
#[derive(Debug)]
pub struct SimulatedCounter {
    count: u32,
    running: bool,
    pulses_per_read: u32,
    commands: heapless::Deque<ControlWord, COMMAND_LOG_SIZE>,
    total_commands: usize,
}

impl SimulatedCounter {
    /// Create a stopped counter at zero.
    pub const fn new() -> Self {
        Self {
            count: 0,
            running: false,
            pulses_per_read: 0,
            commands: heapless::Deque::new(),
            total_commands: 0,
        }
    }

    /// Create a counter that accumulates `pulses` before every read while
    /// running.
    pub const fn with_pulses_per_read(pulses: u32) -> Self {
        let mut counter = Self::new();
        counter.pulses_per_read = pulses;
        counter
    }

    /// Feed `pulses` clock pulses. Ignored while stopped; wraps like the
    /// 32-bit register.
    pub fn pulse(&mut self, pulses: u32) {
        if self.running {
            self.count = self.count.wrapping_add(pulses);
        }
    }

    /// Force the raw count, regardless of running state.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Current raw count, without auto-advance.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the last state command was `Start`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Most recent control words, oldest first.
    pub fn commands(&self) -> impl Iterator<Item = &ControlWord> {
        self.commands.iter()
    }

    /// Total control words written since creation or the last
    /// [`clear_commands`](Self::clear_commands).
    pub fn total_commands(&self) -> usize {
        self.total_commands
    }

    /// Forget recorded control words.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.total_commands = 0;
    }
}

impl Default for SimulatedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCounter for SimulatedCounter {
    fn write_control(&mut self, word: ControlWord) {
        match word {
            ControlWord::Stop => self.running = false,
            ControlWord::Reset => self.count = 0,
            ControlWord::Start => self.running = true,
        }

        // Ring buffer behavior - drop oldest if full
        if self.commands.is_full() {
            self.commands.pop_front();
        }
        let _ = self.commands.push_back(word);
        self.total_commands += 1;
    }

    fn read(&mut self) -> u32 {
        self.pulse(self.pulses_per_read);
        self.count
    }
}
