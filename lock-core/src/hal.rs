//! Capabilities the lock needs from the board.

use crate::combo::Digit;

/// Drive level of one charlieplex line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
    /// High impedance, the line carries no current.
    Float,
}

/// The three lines of the LED bus.
pub trait BusPins {
    fn drive(&mut self, levels: [Level; 3]);
}

/// Gates whether a button edge reaches the edge handler.
pub trait EdgeGate {
    fn mask(&mut self);
    /// Re-enable edge detection, dropping any edge latched while masked.
    fn unmask(&mut self);
}

/// One-shot timer whose expiry calls the settle handler.
pub trait SettleTimer {
    fn arm(&mut self, interval_us: u32);
    fn disarm(&mut self);
}

/// Digit lines sampled when an edge is detected. `true` means asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lines {
    pub digit0: bool,
    pub digit1: bool,
}

impl Lines {
    pub const RELEASED: Lines = Lines {
        digit0: false,
        digit1: false,
    };

    pub fn pressed(digit: Digit) -> Self {
        match digit {
            Digit::Zero => Lines {
                digit0: true,
                digit1: false,
            },
            Digit::One => Lines {
                digit0: false,
                digit1: true,
            },
        }
    }

    /// The digit these lines enter, if any.
    ///
    /// Digit-1 only counts when digit-0 is released, so pressing both enters
    /// a 0. This precedence is kept for compatibility with the original
    /// board behavior; it was most likely never intended.
    pub fn digit(self) -> Option<Digit> {
        if self.digit0 {
            Some(Digit::Zero)
        } else if self.digit1 {
            Some(Digit::One)
        } else {
            None
        }
    }
}
