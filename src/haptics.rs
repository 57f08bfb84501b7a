/// Best-effort tactile feedback. Platforms without a vibration motor use [`NoHaptics`].
pub trait Haptics {
    fn pulse(&mut self, duration_ms: u32);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self, _duration_ms: u32) {}
}

/// Counts pulses instead of emitting them; used by the replay driver and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseCounter {
    pub pulses: usize,
}

impl Haptics for PulseCounter {
    fn pulse(&mut self, _duration_ms: u32) {
        self.pulses += 1;
    }
}

impl<H: Haptics + ?Sized> Haptics for &mut H {
    fn pulse(&mut self, duration_ms: u32) {
        (**self).pulse(duration_ms)
    }
}
