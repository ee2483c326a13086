//! Busy-polling variant of the lock.
//!
//! No interrupts: the main loop samples both buttons every pass and a button
//! counts as pressed once it has read asserted for eight samples in a row.
//! The combination rules are the same as the interrupt-driven design. The
//! caller provides the feedback, which here blocks the loop.

use crate::combo::{ComboStore, Commit, Digit};
use crate::hal::Lines;
use crate::state::{Family, LockState};

/// Result of one polling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollStep {
    pub digit: Option<Digit>,
    pub commit: Option<Commit>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PollingLock {
    digit0_history: u8,
    digit1_history: u8,
    family: Family,
    combo: ComboStore,
}

impl PollingLock {
    pub const fn new() -> Self {
        Self {
            digit0_history: 0,
            digit1_history: 0,
            family: Family::Unlocked,
            combo: ComboStore::new(),
        }
    }

    /// Either `Unlocked` or `Locked`; this design has no transient states.
    pub fn state(&self) -> LockState {
        match self.family {
            Family::Unlocked => LockState::Unlocked,
            Family::Locked => LockState::Locked,
        }
    }

    pub fn combo(&self) -> &ComboStore {
        &self.combo
    }

    pub fn sample(&mut self, lines: Lines) -> PollStep {
        self.digit0_history <<= 1;
        self.digit1_history <<= 1;
        // only one history takes the sample, digit-0 first
        match lines.digit() {
            Some(Digit::Zero) => self.digit0_history |= 1,
            Some(Digit::One) => self.digit1_history |= 1,
            None => {}
        }

        let digit = if self.digit0_history == u8::MAX {
            Some(Digit::Zero)
        } else if self.digit1_history == u8::MAX {
            Some(Digit::One)
        } else {
            None
        };
        let Some(digit) = digit else {
            return PollStep::default();
        };

        self.combo.push(digit);
        let commit = self.combo.finish(self.family);
        match commit {
            Some(Commit::Locked) => self.family = Family::Locked,
            Some(Commit::Unlocked) => self.family = Family::Unlocked,
            Some(Commit::Rejected) | None => {}
        }
        PollStep {
            digit: Some(digit),
            commit,
        }
    }
}
