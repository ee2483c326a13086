use crate::display::Led;

/// Lock state. `Unlocked` and `Locked` are steady; the other three last at
/// most one debounce interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockState {
    /// Ready to take a new combination.
    #[default]
    Unlocked,
    /// A digit of a new combination was just entered.
    UnlockedPressed,
    /// Ready to take the stored combination.
    Locked,
    /// A digit of an unlock attempt was just entered.
    LockedPressed,
    /// An unlock attempt did not match.
    LockedInvalid,
}

/// Whether a state belongs to the unlocked or the locked side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Family {
    #[default]
    Unlocked,
    Locked,
}

impl LockState {
    pub fn family(self) -> Family {
        match self {
            LockState::Unlocked | LockState::UnlockedPressed => Family::Unlocked,
            LockState::Locked | LockState::LockedPressed | LockState::LockedInvalid => {
                Family::Locked
            }
        }
    }

    pub fn is_steady(self) -> bool {
        matches!(self, LockState::Unlocked | LockState::Locked)
    }

    /// State after a digit has been entered.
    pub fn pressed(self) -> LockState {
        match self.family() {
            Family::Unlocked => LockState::UnlockedPressed,
            Family::Locked => LockState::LockedPressed,
        }
    }

    /// Steady state this one returns to once the debounce interval ends.
    pub fn settled(self) -> LockState {
        match self.family() {
            Family::Unlocked => LockState::Unlocked,
            Family::Locked => LockState::Locked,
        }
    }

    /// The single LED shown while settled in this state's family.
    pub fn steady_led(self) -> Led {
        match self.family() {
            Family::Unlocked => Led::Green,
            Family::Locked => Led::Red,
        }
    }
}
