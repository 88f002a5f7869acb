//! Demo polling loop
//!
//! Polls a set of timers in order and prints "Timer N elapsed!" once per
//! firing, until the shared millisecond count reaches the end of the run.

use crate::io::Console;
use pulse_timer::{ClockConfig, PulseCounter, TickEngine, Timer};
use std::io;

/// Poll `timers` until every one of them has been polled at `end_ms` or later.
///
/// A timer reports elapsed on every poll during its millisecond, so each
/// firing is printed only once. Timers are numbered from 1 in slice order.
pub fn run<H, C, W>(
    engine: &mut TickEngine<H, C>,
    timers: &[Timer],
    console: &mut W,
    end_ms: u32,
) -> io::Result<()>
where
    H: PulseCounter,
    C: ClockConfig,
    W: Console + ?Sized,
{
    let mut last_fired = vec![0u32; timers.len()];
    let mut polled_at = vec![0u32; timers.len()];

    loop {
        for (index, timer) in timers.iter().enumerate() {
            let fired = timer.elapsed(engine);
            let now = engine.last_elapsed_ms();
            polled_at[index] = now;

            if fired && now != last_fired[index] {
                last_fired[index] = now;
                console.print_line(&format!("[{:>6} ms] Timer {} elapsed!", now, index + 1))?;
            }
        }

        // A later timer's poll may take the count to `end_ms`; the earlier
        // ones still get their poll at that millisecond.
        if polled_at.iter().all(|&ms| ms >= end_ms) {
            return Ok(());
        }
    }
}
