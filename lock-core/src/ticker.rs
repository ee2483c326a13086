//! Display refresh rule.
//!
//! The next frame depends only on the lock state and the LED currently lit,
//! so the ticker keeps no phase of its own and can run at any moment.

use crate::display::Led;
use crate::state::LockState;

/// LED to show on the next tick, or `None` to leave the bus as it is.
pub fn next_frame(state: LockState, lit: Led) -> Option<Led> {
    let next = match state {
        LockState::Locked => return None,
        // green + yellow
        LockState::Unlocked => match lit {
            Led::Green => Led::Yellow,
            _ => Led::Green,
        },
        // green + yellow + blue
        LockState::UnlockedPressed => match lit {
            Led::Green => Led::Yellow,
            Led::Yellow => Led::Blue,
            Led::Blue | Led::Red => Led::Green,
        },
        // red + blue
        LockState::LockedPressed => match lit {
            Led::Red => Led::Blue,
            _ => Led::Red,
        },
        // red + yellow
        LockState::LockedInvalid => match lit {
            Led::Red | Led::Blue => Led::Yellow,
            Led::Green | Led::Yellow => Led::Red,
        },
    };
    Some(next)
}
