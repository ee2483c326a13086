//! Display driver for four LEDs charlieplexed on three lines.
//!
//! Line B is shared. Each LED sits between B and one outer line, so lighting
//! one drives exactly two lines and floats the third:
//!
//! ```text
//! Green  A -> B      Yellow B -> A
//! Blue   B -> C      Red    C -> B
//! ```
//!
//! Only one LED can be lit at a time; blends are produced by the ticker
//! switching between them faster than the eye follows.

use crate::hal::{BusPins, Level};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Led {
    Green,
    Yellow,
    Blue,
    Red,
}

impl Led {
    /// Line levels `[A, B, C]` that light this LED.
    pub fn levels(self) -> [Level; 3] {
        use Level::{Float, High, Low};
        match self {
            Led::Green => [High, Low, Float],
            Led::Yellow => [Low, High, Float],
            Led::Blue => [Float, High, Low],
            Led::Red => [Float, Low, High],
        }
    }
}

/// Owns the bus and remembers which LED it last lit.
#[derive(Debug)]
pub struct Display<P> {
    pins: P,
    lit: Led,
}

impl<P: BusPins> Display<P> {
    /// Take the bus and light green, the power-on indication.
    pub fn new(mut pins: P) -> Self {
        pins.drive(Led::Green.levels());
        Self {
            pins,
            lit: Led::Green,
        }
    }

    pub fn show(&mut self, led: Led) {
        self.pins.drive(led.levels());
        self.lit = led;
    }

    pub fn lit(&self) -> Led {
        self.lit
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }
}
