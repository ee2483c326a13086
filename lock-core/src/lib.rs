//! Hardware-independent core of a two-button combination lock.
//!
//! Digit-0 and digit-1 presses build a six digit combination. While unlocked
//! the first complete entry locks the safe; while locked a matching entry
//! unlocks it and anything else is rejected. Four LEDs on a charlieplexed bus
//! report the state, blended by a periodic ticker.
//!
//! Nothing here touches a peripheral. The firmware implements the traits in
//! [`hal`] and calls into a [`Controller`] from its interrupt handlers, with
//! the controller kept in a [`SharedLock`].
#![cfg_attr(not(test), no_std)]

pub mod combo;
pub mod config;
pub mod controller;
pub mod display;
pub mod hal;
pub mod machine;
pub mod poll;
pub mod shared;
pub mod state;
pub mod ticker;

pub use combo::{ComboStore, Commit, Digit};
pub use config::{Timing, COMBO_LEN};
pub use controller::{Controller, Snapshot};
pub use display::{Display, Led};
pub use hal::{BusPins, EdgeGate, Level, Lines, SettleTimer};
pub use machine::{EdgeOutcome, LockMachine};
pub use poll::{PollStep, PollingLock};
pub use shared::SharedLock;
pub use state::{Family, LockState};
pub use ticker::next_frame;
