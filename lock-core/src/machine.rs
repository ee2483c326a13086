//! The lock state machine.
//!
//! Two handlers mutate it: [`LockMachine::on_edge`] for a detected button
//! edge and [`LockMachine::on_settled`] when the debounce interval ends.
//! They never overlap because edges stay masked while the debounce timer is
//! armed; see [`Controller`](crate::Controller).

use crate::combo::{ComboStore, Commit, Digit};
use crate::display::Led;
use crate::hal::Lines;
use crate::state::LockState;

/// What one edge did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeOutcome {
    /// `None` for a release edge.
    pub digit: Option<Digit>,
    pub commit: Option<Commit>,
    /// LED to light right away instead of waiting for the next tick.
    pub show: Option<Led>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockMachine {
    state: LockState,
    combo: ComboStore,
}

impl LockMachine {
    pub const fn new() -> Self {
        Self {
            state: LockState::Unlocked,
            combo: ComboStore::new(),
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn combo(&self) -> &ComboStore {
        &self.combo
    }

    pub fn on_edge(&mut self, lines: Lines) -> EdgeOutcome {
        let digit = lines.digit();
        if let Some(digit) = digit {
            self.combo.push(digit);
            self.state = self.state.pressed();
        }

        let commit = self.combo.finish(self.state.family());
        let show = match commit {
            Some(Commit::Locked) => {
                self.state = LockState::Locked;
                Some(Led::Red)
            }
            Some(Commit::Unlocked) => {
                self.state = LockState::Unlocked;
                Some(Led::Green)
            }
            Some(Commit::Rejected) => {
                self.state = LockState::LockedInvalid;
                None
            }
            None => None,
        };

        EdgeOutcome {
            digit,
            commit,
            show,
        }
    }

    /// Collapse a transient state. Returns the steady LED to show, or `None`
    /// if the machine was already steady.
    pub fn on_settled(&mut self) -> Option<Led> {
        if self.state.is_steady() {
            return None;
        }
        self.state = self.state.settled();
        Some(self.state.steady_led())
    }
}
