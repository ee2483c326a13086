use lock_core::{BusPins, Level};
use microbit::hal::gpio::{self, Disconnected, Floating, Input, Output, Pin, PushPull};
use embedded_hal::digital::OutputPin;

/// One charlieplex line. Floating means configured as an input.
enum Line {
    Driven(Pin<Output<PushPull>>),
    Floating(Pin<Input<Floating>>),
}

impl Line {
    fn set(self, level: Level) -> Line {
        match (self, level) {
            (Line::Driven(pin), Level::Float) => Line::Floating(pin.into_floating_input()),
            (line @ Line::Floating(_), Level::Float) => line,
            (Line::Floating(pin), Level::High) => {
                Line::Driven(pin.into_push_pull_output(gpio::Level::High))
            }
            (Line::Floating(pin), Level::Low) => {
                Line::Driven(pin.into_push_pull_output(gpio::Level::Low))
            }
            (Line::Driven(mut pin), Level::High) => {
                // Infallible on nRF52
                let _ = pin.set_high();
                Line::Driven(pin)
            }
            (Line::Driven(mut pin), Level::Low) => {
                let _ = pin.set_low();
                Line::Driven(pin)
            }
        }
    }
}

/// LED bus on edge pins 0, 1 and 2.
pub struct EdgeBus {
    lines: [Option<Line>; 3],
}

impl EdgeBus {
    pub fn new(a: Pin<Disconnected>, b: Pin<Disconnected>, c: Pin<Disconnected>) -> Self {
        Self {
            lines: [a, b, c].map(|pin| Some(Line::Floating(pin.into_floating_input()))),
        }
    }

    fn apply(&mut self, levels: [Level; 3], pass: impl Fn(Level) -> bool) {
        for (slot, level) in self.lines.iter_mut().zip(levels) {
            if !pass(level) {
                continue;
            }
            if let Some(line) = slot.take() {
                *slot = Some(line.set(level));
            }
        }
    }
}

impl BusPins for EdgeBus {
    fn drive(&mut self, levels: [Level; 3]) {
        // release first so two LEDs are never driven at once
        self.apply(levels, |level| level == Level::Float);
        self.apply(levels, |level| level != Level::Float);
    }
}
