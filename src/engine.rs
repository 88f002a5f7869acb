//! Millisecond tick engine.
//!
//! Turns the free-running pulse count into one monotonic millisecond counter
//! shared by every [`Timer`](crate::Timer). The engine is the only writer of
//! the hardware control register during normal operation.
//!
//! There is exactly one engine per hardware counter. Timers borrow it mutably
//! on every poll, so the read/reset/start sequence can never interleave.

use core::marker::PhantomData;

use crate::config::{ClockConfig, DefaultClock};
use crate::hw::PulseCounter;

/// Shared millisecond state driven by a hardware pulse counter.
///
/// `advance()` takes at most one millisecond per call. Callers must poll at
/// least once per millisecond; slower polling under-counts.
#[derive(Debug)]
pub struct TickEngine<H: PulseCounter, C: ClockConfig = DefaultClock> {
    counter: H,
    elapsed_ms: u32,
    running: bool,
    _clock: PhantomData<C>,
}

impl<H: PulseCounter, C: ClockConfig> TickEngine<H, C> {
    /// Create an engine at 0 ms. The hardware is left untouched until the
    /// first [`enable_hardware`](Self::enable_hardware) (usually through
    /// [`Timer::initialize`](crate::Timer::initialize)).
    pub fn new(counter: H) -> Self {
        const {
            assert!(
                C::PULSES_PER_MS > 0,
                "ClockConfig::CLOCK_HZ must be at least 1000"
            )
        };

        Self {
            counter,
            elapsed_ms: 0,
            running: false,
            _clock: PhantomData,
        }
    }

    /// Poll the hardware counter, taking one millisecond if a full
    /// millisecond of pulses has accumulated.
    ///
    /// Returns `true` if the shared counter moved. Sub-threshold reads issue
    /// no control writes.
    pub fn advance(&mut self) -> bool {
        let pulses = self.counter.read();
        if pulses < C::PULSES_PER_MS {
            return false;
        }

        if pulses / C::PULSES_PER_MS >= 2 {
            log::warn!(
                "tick engine polled late: {} pulses pending, counting 1 ms",
                pulses
            );
        }

        self.elapsed_ms = self.elapsed_ms.wrapping_add(1);
        self.counter.reset();
        self.counter.start();

        log::trace!("tick: {} ms", self.elapsed_ms);
        true
    }

    /// Advance, then return the shared millisecond count.
    pub fn elapsed_ms(&mut self) -> u32 {
        self.advance();
        self.elapsed_ms
    }

    /// Shared millisecond count as of the last poll, without touching the
    /// hardware.
    pub fn last_elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Reset and start the hardware counter. The millisecond count is kept.
    pub fn enable_hardware(&mut self) {
        self.counter.reset();
        self.counter.start();
        self.running = true;
        log::debug!("pulse counter enabled at {} ms", self.elapsed_ms);
    }

    /// Stop and reset the hardware counter and zero the shared millisecond
    /// count. Every timer sharing this engine sees time restart from 0.
    pub fn disable_hardware(&mut self) {
        self.counter.stop();
        self.counter.reset();
        self.elapsed_ms = 0;
        self.running = false;
        log::debug!("pulse counter disabled, time base cleared");
    }

    /// Start the hardware unless this engine already started it.
    pub(crate) fn ensure_running(&mut self) {
        if !self.running {
            self.enable_hardware();
        }
    }

    /// Whether the hardware counter has been started by this engine.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Hardware pulses that make up one millisecond.
    pub const fn pulses_per_ms() -> u32 {
        C::PULSES_PER_MS
    }

    /// Get immutable reference to the pulse counter.
    pub fn counter(&self) -> &H {
        &self.counter
    }

    /// Get mutable reference to the pulse counter (for simulation).
    pub fn counter_mut(&mut self) -> &mut H {
        &mut self.counter
    }

    /// Release the pulse counter.
    pub fn into_counter(self) -> H {
        self.counter
    }
}
