//! Combination store: the armed combination and the entry in progress.

use crate::config::COMBO_LEN;
use crate::state::Family;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Digit {
    Zero,
    One,
}

impl Digit {
    pub fn bit(self) -> u8 {
        match self {
            Digit::Zero => 0,
            Digit::One => 1,
        }
    }
}

/// Result of finishing a complete entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    /// The entry became the stored combination.
    Locked,
    /// The entry matched the stored combination, which is now cleared.
    Unlocked,
    /// The entry did not match; the stored combination is kept.
    Rejected,
}

/// Entered and stored combinations, most significant digit first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComboStore {
    entered: u8,
    stored: u8,
    presses: u8,
}

impl ComboStore {
    pub const fn new() -> Self {
        Self {
            entered: 0,
            stored: 0,
            presses: 0,
        }
    }

    pub fn entered(&self) -> u8 {
        self.entered
    }

    pub fn stored(&self) -> u8 {
        self.stored
    }

    pub fn presses(&self) -> u8 {
        self.presses
    }

    pub fn is_complete(&self) -> bool {
        self.presses == COMBO_LEN
    }

    /// Shift one digit into the entry.
    pub fn push(&mut self, digit: Digit) {
        debug_assert!(self.presses < COMBO_LEN);
        self.entered = (self.entered << 1) | digit.bit();
        self.presses += 1;
    }

    pub fn clear_entry(&mut self) {
        self.entered = 0;
        self.presses = 0;
    }

    /// Finish a complete entry for a lock in `family`.
    ///
    /// Returns `None` and changes nothing while the entry is still short.
    /// Otherwise the entry is always cleared.
    pub fn finish(&mut self, family: Family) -> Option<Commit> {
        if !self.is_complete() {
            return None;
        }
        let commit = match family {
            Family::Unlocked => {
                self.stored = self.entered;
                Commit::Locked
            }
            Family::Locked if self.entered == self.stored => {
                self.stored = 0;
                Commit::Unlocked
            }
            Family::Locked => Commit::Rejected,
        };
        self.clear_entry();
        Some(commit)
    }
}
