//! Shared library code for native platform demos
//!
//! Host-side stand-ins for the pieces a bare-metal board provides: a pulse
//! counter driven by the wall clock and a line console. `run` is the polling
//! loop of the demo binaries.

pub mod app;
pub mod counter;
pub mod io;

use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

// Re-export commonly used types for convenience
pub use app::run;
pub use counter::HostCounter;
pub use io::{Console, StdoutConsole};

/// Install the stderr logger.
///
/// The level comes from `RUST_LOG` (`error` through `trace`). Without it
/// only errors are printed.
pub fn init_logging() -> Result<(), SetLoggerError> {
    SimpleLogger::new()
        .with_level(LevelFilter::Error)
        .env()
        .init()
}
