//! Clock configuration traits and implementations.
//!
//! The `ClockConfig` trait fixes the platform clock frequency at compile time,
//! and with it the number of hardware pulses that make up one millisecond.

/// Platform clock configuration.
///
/// All values are const (zero runtime cost). Implementations only need to name
/// the clock frequency; the per-millisecond threshold is derived from it.
///
/// Custom boards can implement this by hand or with
/// `#[derive(ClockConfig)]` and a `#[clock(hz = ...)]` attribute.
pub trait ClockConfig {
    /// Frequency of the clock driving the hardware pulse counter, in Hz.
    const CLOCK_HZ: u32;

    /// Pulses that make up one millisecond (`CLOCK_HZ / 1000`).
    const PULSES_PER_MS: u32 = Self::CLOCK_HZ / 1000;
}

/// Default configuration: the 50 MHz reference FPGA board.
///
/// - CLOCK_HZ: 50 000 000
/// - PULSES_PER_MS: 50 000
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultClock;

impl ClockConfig for DefaultClock {
    const CLOCK_HZ: u32 = 50_000_000;
}

/// Configuration for soft cores clocked at 100 MHz.
///
/// - CLOCK_HZ: 100 000 000
/// - PULSES_PER_MS: 100 000
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Clock100MHz;

impl ClockConfig for Clock100MHz {
    const CLOCK_HZ: u32 = 100_000_000;
}
