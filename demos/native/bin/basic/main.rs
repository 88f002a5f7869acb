//! Basic demo of pulse-timer on the native platform
//!
//! Two timers share one counter: timer 1 every 500 ms, timer 2 every
//! 1000 ms. Each firing is printed to the console. The counter is simulated
//! from the host clock at the reference board's 50 MHz.
//!
//! ```bash
//! cargo run --bin basic            # run for 3 seconds
//! cargo run --bin basic -- 10      # run for 10 seconds
//! RUST_LOG=trace cargo run --bin basic
//! ```

use clap::Parser;
use native_demos::{HostCounter, StdoutConsole};
use pulse_timer::{ClockConfig, DefaultClock, TickEngine, Timer};

/// Longest run whose end still fits the 32-bit millisecond count.
const MAX_RUN_SECONDS: u32 = u32::MAX / 1000;

#[derive(Parser, Debug)]
#[command(name = "basic", about = "Two periodic timers sharing one pulse counter")]
struct Args {
    /// How long to run, in seconds
    #[arg(
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_RUN_SECONDS))
    )]
    seconds: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    native_demos::init_logging()?;
    let args = Args::parse();

    println!("pulse-timer Basic Demo");
    println!("======================\n");
    println!(
        "Clock: {} Hz ({} pulses/ms), running for {} s\n",
        DefaultClock::CLOCK_HZ,
        DefaultClock::PULSES_PER_MS,
        args.seconds
    );

    let mut console = StdoutConsole::new();
    let mut engine: TickEngine<HostCounter, DefaultClock> =
        TickEngine::new(HostCounter::new(DefaultClock::CLOCK_HZ));

    let timers = [Timer::new(&mut engine, 500)?, Timer::new(&mut engine, 1000)?];
    native_demos::run(&mut engine, &timers, &mut console, args.seconds * 1000)?;

    engine.disable_hardware();
    Ok(())
}
