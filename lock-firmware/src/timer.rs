use lock_core::SettleTimer;
use microbit::hal::{pac::TIMER0, Timer};

/// One-shot TIMER0 whose interrupt ends the debounce interval.
pub struct DebounceTimer {
    timer: Timer<TIMER0>,
}

impl DebounceTimer {
    pub fn new(timer0: TIMER0) -> Self {
        let mut timer = Timer::new(timer0);
        timer.disable_interrupt();
        Self { timer }
    }
}

impl SettleTimer for DebounceTimer {
    fn arm(&mut self, interval_us: u32) {
        // 1 MHz timer clock: one cycle per microsecond
        self.timer.start(interval_us);
        self.timer.enable_interrupt();
    }

    fn disarm(&mut self) {
        self.timer.disable_interrupt();
        self.timer.reset_event();
    }
}
