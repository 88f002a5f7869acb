//! Wall-clock backed pulse counter
//!
//! Reports the number of pulses a clock of the configured frequency would
//! have produced since the last reset, truncated to 32 bits like the
//! hardware register.

use pulse_timer::{ControlWord, PulseCounter};
use std::time::Instant;

/// Pulse counter derived from `std::time::Instant`.
pub struct HostCounter {
    clock_hz: u32,
    /// Pulses banked across stop/start pairs
    banked: u64,
    /// Set while counting
    started_at: Option<Instant>,
}

impl HostCounter {
    pub fn new(clock_hz: u32) -> Self {
        Self {
            clock_hz,
            banked: 0,
            started_at: None,
        }
    }

    fn pulses(&self) -> u64 {
        let live = self.started_at.map_or(0, |t| {
            let nanos = t.elapsed().as_nanos();
            (nanos * u128::from(self.clock_hz) / 1_000_000_000) as u64
        });
        self.banked + live
    }
}

impl PulseCounter for HostCounter {
    fn write_control(&mut self, word: ControlWord) {
        match word {
            ControlWord::Stop => {
                self.banked = self.pulses();
                self.started_at = None;
            }
            ControlWord::Reset => {
                self.banked = 0;
                if self.started_at.is_some() {
                    self.started_at = Some(Instant::now());
                }
            }
            ControlWord::Start => {
                if self.started_at.is_none() {
                    self.started_at = Some(Instant::now());
                }
            }
        }
    }

    fn read(&mut self) -> u32 {
        self.pulses() as u32
    }
}
