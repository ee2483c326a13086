//! micro:bit v2 adapters for `lock-core`.
//!
//! Button A enters a 0 and button B a 1. The four status LEDs hang off edge
//! connector pins 0, 1 and 2, charlieplexed with pin 1 as the common line.
#![no_std]

pub mod buttons;
pub mod bus;
pub mod timer;

pub use buttons::{ButtonGate, Buttons};
pub use bus::EdgeBus;
pub use timer::DebounceTimer;
