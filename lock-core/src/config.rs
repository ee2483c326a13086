//! Compile-time configuration.

/// Digits in a combination. Fixed for the whole system.
pub const COMBO_LEN: u8 = 6;

/// Settle time after an edge before edges are accepted again.
/// 256 counts of a 1 MHz clock prescaled by 1024.
pub const DEBOUNCE_US: u32 = 262_144;

/// Display refresh period. 2 counts of a 1 MHz clock prescaled by 2048.
pub const TICK_US: u32 = 4_096;

/// Consecutive asserted samples the polling design needs to register a digit.
pub const HISTORY_DEPTH: u32 = 8;

/// Time between two button samples in the polling design.
pub const POLL_SAMPLE_US: u32 = 1_000;

/// How long the polling design flashes blue after a registered digit.
pub const PRESS_FLASH_MS: u32 = 300;

/// Yellow/red alternations shown by the polling design on a rejected entry.
pub const INVALID_FLASHES: u32 = 10;

/// Time each color stays lit during a rejection flash.
pub const INVALID_FLASH_MS: u32 = 25;

/// Timer intervals used by a [`Controller`](crate::Controller).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub debounce_us: u32,
    pub tick_us: u32,
}

impl Timing {
    pub const DEFAULT: Timing = Timing {
        debounce_us: DEBOUNCE_US,
        tick_us: TICK_US,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debounce_outlasts_many_ticks() {
        let timing = Timing::default();
        assert!(timing.debounce_us / timing.tick_us >= 32);
    }

    #[test]
    fn combination_fits_in_a_byte() {
        assert!(COMBO_LEN as u32 <= u8::BITS);
        assert_eq!(HISTORY_DEPTH, u8::BITS);
    }
}
