//! # pulse-timer
//!
//! Periodic millisecond timers for bare-metal polling loops, all sharing one
//! free-running hardware pulse counter.
//!
//! **Key features:**
//! - **One counter, many timers** - A single tick engine turns raw pulses into a shared millisecond count
//! - **Value-type timers** - No allocation, no registration; a timer is an interval and a flag
//! - **Injected hardware** - Platform-agnostic `PulseCounter` trait, with MMIO and simulated implementations
//! - **Const clock configuration** - Pulses-per-millisecond derived at compile time from the clock frequency
//!
//! ```
//! use pulse_timer::{SimulatedCounter, TickEngine, Timer};
//!
//! let mut engine: TickEngine<_> = TickEngine::new(SimulatedCounter::new());
//! let mut t1 = Timer::new(&mut engine, 500).unwrap();
//!
//! // Main loop body
//! if t1.elapsed(&mut engine) {
//!     t1.toggle();
//! }
//! ```
//!
//! Polling is cooperative: the engine counts at most one millisecond per poll,
//! so the loop must come round at least once per millisecond.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// Re-export derive macro
pub use pulse_timer_macros::ClockConfig;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod engine;
pub mod error;
pub mod hw;
pub mod sim;
pub mod timer;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Hardware
pub use hw::{ControlWord, MmioCounter, PulseCounter};
pub use sim::SimulatedCounter;

// Configuration
pub use config::{Clock100MHz, ClockConfig, DefaultClock};

// Error types
pub use error::TimerError;

// Core types
pub use engine::TickEngine;
pub use timer::Timer;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
