//! Logical timers.
//!
//! A [`Timer`] is an interval plus an enabled flag. It owns no hardware:
//! every poll goes through the shared [`TickEngine`], and the timer fires
//! whenever the shared millisecond count is a nonzero multiple of its
//! interval.

use crate::config::ClockConfig;
use crate::engine::TickEngine;
use crate::error::TimerError;
use crate::hw::PulseCounter;

/// Periodic millisecond timer.
///
/// Timers are plain values: copy them, store them in arrays, drop them. The
/// default value is the cleared state (interval 0, disabled).
///
/// Firing is level-based, not edge-triggered. Polling several times within a
/// millisecond that is a multiple of the interval reports `true` each time.
///
/// # Example
///
/// ```
/// use pulse_timer::{SimulatedCounter, TickEngine, Timer};
///
/// let mut engine: TickEngine<_> = TickEngine::new(SimulatedCounter::new());
/// let timer = Timer::new(&mut engine, 2).unwrap();
///
/// let mut fired = 0;
/// for _ in 0..4 {
///     engine.counter_mut().pulse(TickEngine::<SimulatedCounter>::pulses_per_ms());
///     if timer.elapsed(&mut engine) {
///         fired += 1;
///     }
/// }
/// assert_eq!(fired, 2); // at 2 ms and 4 ms
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Timer {
    interval_ms: u32,
    enabled: bool,
}

impl Timer {
    /// Cleared timer: interval 0, disabled. Must be initialized before use.
    pub const fn cleared() -> Self {
        Self {
            interval_ms: 0,
            enabled: false,
        }
    }

    /// Create an enabled timer, starting the shared hardware if needed.
    pub fn new<H: PulseCounter, C: ClockConfig>(
        engine: &mut TickEngine<H, C>,
        interval_ms: u32,
    ) -> Result<Self, TimerError> {
        let mut timer = Self::cleared();
        timer.initialize(engine, interval_ms)?;
        Ok(timer)
    }

    /// Set the interval, enable the timer and start the shared hardware
    /// counter if it is not already running.
    ///
    /// Rejects a zero interval without changing anything.
    pub fn initialize<H: PulseCounter, C: ClockConfig>(
        &mut self,
        engine: &mut TickEngine<H, C>,
        interval_ms: u32,
    ) -> Result<(), TimerError> {
        self.set_interval(interval_ms)?;
        self.enabled = true;
        engine.ensure_running();
        log::debug!("timer initialized: every {} ms", interval_ms);
        Ok(())
    }

    /// Return to the cleared state. No hardware effect.
    pub fn clear(&mut self) {
        *self = Self::cleared();
    }

    /// Enable the timer.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable the timer. Firings missed while disabled are never replayed.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Flip the enabled flag.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Change the interval, effective from the next poll.
    ///
    /// If the shared count is already a multiple of the new interval, the next
    /// [`elapsed`](Self::elapsed) reports `true` straight away.
    pub fn set_interval(&mut self, interval_ms: u32) -> Result<(), TimerError> {
        if interval_ms == 0 {
            return Err(TimerError::ZeroInterval);
        }
        self.interval_ms = interval_ms;
        Ok(())
    }

    /// Poll the timer.
    ///
    /// Disabled timers return `false` without touching the engine. Otherwise
    /// the engine is advanced and the timer fires if the shared count is a
    /// nonzero multiple of the interval. A timer enabled with interval 0
    /// (cleared, then re-enabled) never fires.
    pub fn elapsed<H: PulseCounter, C: ClockConfig>(&self, engine: &mut TickEngine<H, C>) -> bool {
        if !self.enabled {
            return false;
        }

        let now = engine.elapsed_ms();
        now != 0 && now.checked_rem(self.interval_ms) == Some(0)
    }

    /// Configured interval in milliseconds (0 when cleared).
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Whether the timer is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
