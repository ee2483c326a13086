//! Interrupt-driven combination lock.
//!
//! `main` only sets things up and then sleeps. Three interrupts do the work:
//! GPIOTE for button presses, TIMER0 for the end of the debounce interval
//! and TIMER1 for the LED refresh.
#![no_main]
#![no_std]

use cortex_m::asm;
use cortex_m_rt::entry;
use critical_section_lock_mut::LockMut;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use lock_core::{config::TICK_US, Commit, Controller, EdgeOutcome, SharedLock, Timing};
use lock_firmware::{ButtonGate, Buttons, DebounceTimer, EdgeBus};
use microbit::hal::{
    pac::{self, interrupt, TIMER1},
    Timer,
};

type Lock = Controller<ButtonGate, DebounceTimer, EdgeBus>;

static LOCK: SharedLock<Lock> = SharedLock::new();
static TICK_TIMER: LockMut<Timer<TIMER1>> = LockMut::new();

// Button A or B pressed
#[interrupt]
fn GPIOTE() {
    let outcome = LOCK.with(|lock| {
        let lines = lock.gate_mut().take_edge();
        lock.on_edge(lines)
    });
    if let Some(Some(outcome)) = outcome {
        report(outcome);
    }
}

// Debounce interval over
#[interrupt]
fn TIMER0() {
    LOCK.with(|lock| lock.on_settled());
}

// LED refresh
#[interrupt]
fn TIMER1() {
    TICK_TIMER.with_lock(|timer| timer.start(TICK_US));
    LOCK.with(|lock| lock.on_tick());
}

fn report(outcome: EdgeOutcome) {
    if let Some(digit) = outcome.digit {
        rprintln!("digit {}", digit.bit());
    }
    match outcome.commit {
        Some(Commit::Locked) => rprintln!("locked"),
        Some(Commit::Unlocked) => rprintln!("unlocked"),
        Some(Commit::Rejected) => rprintln!("wrong combination"),
        None => {}
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    let board = microbit::Board::take().unwrap();

    let buttons = Buttons::new(
        board.buttons.button_a.into_floating_input().degrade(),
        board.buttons.button_b.into_floating_input().degrade(),
    );
    let gate = ButtonGate::new(board.GPIOTE, buttons);
    let bus = EdgeBus::new(
        board.edge.e00.degrade(),
        board.edge.e01.degrade(),
        board.edge.e02.degrade(),
    );
    let debounce = DebounceTimer::new(board.TIMER0);

    let mut tick_timer = Timer::new(board.TIMER1);
    tick_timer.enable_interrupt();
    tick_timer.start(TICK_US);

    // Everything the handlers touch is in place before they are unmasked.
    LOCK.init(Controller::new(gate, debounce, bus, Timing::DEFAULT));
    TICK_TIMER.init(tick_timer);

    // SAFETY: the handlers only reach shared state through critical sections.
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER1);
        pac::NVIC::unmask(pac::Interrupt::TIMER0);
        pac::NVIC::unmask(pac::Interrupt::GPIOTE);
    }

    rprintln!("Combination lock ready, unlocked.");
    rprintln!("Enter 6 digits (A = 0, B = 1) to lock.");

    loop {
        asm::wfi();
    }
}
