#![allow(dead_code)]

use lock_core::{
    BusPins, Controller, Digit, EdgeGate, Level, Lines, SettleTimer, Timing, COMBO_LEN,
};

pub const TIMING: Timing = Timing {
    debounce_us: 1_000,
    tick_us: 10,
};

#[derive(Debug, Default)]
pub struct FakeGate {
    pub masked: bool,
    pub masks: u32,
}

impl EdgeGate for FakeGate {
    fn mask(&mut self) {
        self.masked = true;
        self.masks += 1;
    }

    fn unmask(&mut self) {
        self.masked = false;
    }
}

#[derive(Debug, Default)]
pub struct FakeTimer {
    pub armed: Option<u32>,
}

impl SettleTimer for FakeTimer {
    fn arm(&mut self, interval_us: u32) {
        assert!(self.armed.is_none(), "settle timer armed twice");
        self.armed = Some(interval_us);
    }

    fn disarm(&mut self) {
        self.armed = None;
    }
}

#[derive(Debug, Default)]
pub struct FakeBus {
    pub levels: Option<[Level; 3]>,
    pub writes: u32,
}

impl BusPins for FakeBus {
    fn drive(&mut self, levels: [Level; 3]) {
        self.levels = Some(levels);
        self.writes += 1;
    }
}

pub type TestController = Controller<FakeGate, FakeTimer, FakeBus>;

pub fn controller() -> TestController {
    Controller::new(
        FakeGate::default(),
        FakeTimer::default(),
        FakeBus::default(),
        TIMING,
    )
}

pub fn digits(bits: u8) -> impl Iterator<Item = Digit> {
    (0..COMBO_LEN).rev().map(move |shift| {
        if (bits >> shift) & 1 == 1 {
            Digit::One
        } else {
            Digit::Zero
        }
    })
}

/// Press one digit the way the hardware delivers it: the press edge, a few
/// display ticks and then the settle expiry. The release edge is lost while
/// masked.
pub fn press(ctl: &mut TestController, digit: Digit) {
    ctl.on_edge(Lines::pressed(digit));
    ctl.on_tick();
    ctl.on_edge(Lines::RELEASED);
    ctl.on_tick();
    settle(ctl);
}

pub fn settle(ctl: &mut TestController) {
    if ctl.timer().armed.is_some() {
        ctl.on_settled();
    }
}

/// Enter a whole combination, leaving the last debounce interval pending.
pub fn enter(ctl: &mut TestController, bits: u8) {
    let mut digits = digits(bits).peekable();
    while let Some(digit) = digits.next() {
        if digits.peek().is_some() {
            press(ctl, digit);
        } else {
            ctl.on_edge(Lines::pressed(digit));
        }
    }
}
