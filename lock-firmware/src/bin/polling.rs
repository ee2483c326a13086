//! Busy-polling combination lock.
//!
//! Same behavior as the interrupt-driven build without any interrupts: the
//! loop samples the buttons, and feedback flashes block the loop while they
//! play.
#![deny(unsafe_code)]
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use lock_core::{
    config::{INVALID_FLASHES, INVALID_FLASH_MS, POLL_SAMPLE_US, PRESS_FLASH_MS},
    next_frame, Commit, Display, Led, PollingLock,
};
use lock_firmware::{Buttons, EdgeBus};
use microbit::hal::{pac::TIMER0, Timer};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    let board = microbit::Board::take().unwrap();

    let mut timer = Timer::new(board.TIMER0);
    let mut buttons = Buttons::new(
        board.buttons.button_a.into_floating_input().degrade(),
        board.buttons.button_b.into_floating_input().degrade(),
    );
    let mut display = Display::new(EdgeBus::new(
        board.edge.e00.degrade(),
        board.edge.e01.degrade(),
        board.edge.e02.degrade(),
    ));
    let mut lock = PollingLock::new();

    rprintln!("Combination lock ready (polling), unlocked.");

    loop {
        let step = lock.sample(buttons.sample());

        if let Some(digit) = step.digit {
            rprintln!("digit {}", digit.bit());
            flash_press(&mut display, &mut timer);
        }
        match step.commit {
            Some(Commit::Locked) => {
                rprintln!("locked");
                display.show(Led::Red);
            }
            Some(Commit::Unlocked) => {
                rprintln!("unlocked");
                display.show(Led::Green);
            }
            Some(Commit::Rejected) => {
                rprintln!("wrong combination");
                flash_invalid(&mut display, &mut timer);
            }
            None => {}
        }

        if let Some(led) = next_frame(lock.state(), display.lit()) {
            display.show(led);
        }
        timer.delay_us(POLL_SAMPLE_US);
    }
}

// Blue for a moment, then back to whatever was lit
fn flash_press(display: &mut Display<EdgeBus>, timer: &mut Timer<TIMER0>) {
    let previous = display.lit();
    display.show(Led::Blue);
    timer.delay_ms(PRESS_FLASH_MS);
    display.show(previous);
}

// Yellow/red alternation, ending on red
fn flash_invalid(display: &mut Display<EdgeBus>, timer: &mut Timer<TIMER0>) {
    for _ in 0..INVALID_FLASHES {
        display.show(Led::Yellow);
        timer.delay_ms(INVALID_FLASH_MS);
        display.show(Led::Red);
        timer.delay_ms(INVALID_FLASH_MS);
    }
}
