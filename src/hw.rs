//! Hardware pulse counter abstraction.
//!
//! The `PulseCounter` trait exposes the free-running counter peripheral as a
//! narrow capability: write a control word, read the current count. The tick
//! engine drives it exclusively; it never sees the register itself.

/// Command encodings accepted by the counter's control register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum ControlWord {
    /// Freeze the count at its current value
    Stop = 0x0000_0000,

    /// Clear the count to zero
    Reset = 0x4000_0000,

    /// Count one per clock pulse
    Start = 0x8000_0000,
}

impl ControlWord {
    /// Raw register encoding.
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// Platform-agnostic pulse counter trait.
///
/// Implementations must complete each access before returning and must not
/// block. Register writes cannot fail from software's point of view, so none
/// of these operations return a `Result`.
pub trait PulseCounter {
    /// Write a command to the control register.
    fn write_control(&mut self, word: ControlWord);

    /// Read pulses accumulated since the last reset.
    fn read(&mut self) -> u32;

    /// Stop counting.
    fn stop(&mut self) {
        self.write_control(ControlWord::Stop);
    }

    /// Clear the count to zero.
    fn reset(&mut self) {
        self.write_control(ControlWord::Reset);
    }

    /// Start (or resume) counting.
    fn start(&mut self) {
        self.write_control(ControlWord::Start);
    }
}

impl<T: PulseCounter + ?Sized> PulseCounter for &mut T {
    fn write_control(&mut self, word: ControlWord) {
        (**self).write_control(word);
    }

    fn read(&mut self) -> u32 {
        (**self).read()
    }
}

/// Memory-mapped pulse counter.
///
/// Control words are written to, and the count is read from, the 32-bit
/// register at byte offset [`MmioCounter::REGISTER_OFFSET`] from the
/// peripheral base address.
///
/// ```rust,ignore
/// // Base address from the FPGA system description
/// let counter = unsafe { MmioCounter::new(0x0008_1000) };
/// ```
#[derive(Debug)]
pub struct MmioCounter {
    register: *mut u32,
}

impl MmioCounter {
    /// Byte offset of the control/count register.
    pub const REGISTER_OFFSET: usize = 4;

    /// Create a counter for the peripheral at `base`.
    ///
    /// # Safety
    ///
    /// `base + REGISTER_OFFSET` must be the 4-byte aligned address of the
    /// counter register, mapped for volatile reads and writes, and no other
    /// code may drive the same register for the lifetime of this value.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            register: (base + Self::REGISTER_OFFSET) as *mut u32,
        }
    }

    /// Address of the control/count register.
    pub fn register_address(&self) -> usize {
        self.register as usize
    }
}

impl PulseCounter for MmioCounter {
    #[inline]
    fn write_control(&mut self, word: ControlWord) {
        // SAFETY: `new` requires a valid, exclusively owned register address.
        unsafe { core::ptr::write_volatile(self.register, word.bits()) }
    }

    #[inline]
    fn read(&mut self) -> u32 {
        // SAFETY: `new` requires a valid, exclusively owned register address.
        unsafe { core::ptr::read_volatile(self.register) }
    }
}
