#![no_std]
#![no_main]

use pulse_timer::{MmioCounter, TickEngine, Timer};
use panic_halt as _;

// Pulse counter peripheral on the soft core's system bus
const COUNTER_BASE: usize = 0x4000_1000;

#[derive(pulse_timer::ClockConfig)]
#[clock(hz = 50_000_000)]
struct BoardClock;

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    // SAFETY: fixed peripheral address, only driven through this engine
    let counter = unsafe { MmioCounter::new(COUNTER_BASE) };
    let mut engine: TickEngine<MmioCounter, BoardClock> = TickEngine::new(counter);

    let (Ok(mut t1), Ok(t2)) = (Timer::new(&mut engine, 500), Timer::new(&mut engine, 1000)) else {
        loop {
            cortex_m::asm::nop();
        }
    };

    // Poll both timers so every code path is included
    loop {
        if core::hint::black_box(t1.elapsed(&mut engine)) {
            t1.toggle();
            t1.toggle();
        }
        if core::hint::black_box(t2.elapsed(&mut engine)) {
            engine.disable_hardware();
            engine.enable_hardware();
        }
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
