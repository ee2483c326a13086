mod common;

use common::{controller, enter, press, settle, TIMING};
use lock_core::{Commit, Digit, Led, Level, Lines, LockState};

#[test]
fn scenario_a_locks_with_the_entered_digits() {
    let mut ctl = controller();
    enter(&mut ctl, 0b101010);

    let snap = ctl.snapshot();
    assert_eq!(snap.state, LockState::Locked);
    assert_eq!(snap.stored, 0b101010);
    assert_eq!((snap.entered, snap.presses), (0, 0));
    assert_eq!(snap.lit, Led::Red);
    assert_eq!(ctl.pins().levels, Some([Level::Float, Level::Low, Level::High]));
}

#[test]
fn scenario_b_unlocks_with_the_same_digits() {
    let mut ctl = controller();
    enter(&mut ctl, 0b101010);
    settle(&mut ctl);
    enter(&mut ctl, 0b101010);

    let snap = ctl.snapshot();
    assert_eq!(snap.state, LockState::Unlocked);
    assert_eq!(snap.stored, 0);
    assert_eq!(snap.lit, Led::Green);
}

#[test]
fn scenario_c_rejects_then_settles_locked() {
    let mut ctl = controller();
    enter(&mut ctl, 0b101010);
    settle(&mut ctl);
    enter(&mut ctl, 0b111111);

    let snap = ctl.snapshot();
    assert_eq!(snap.state, LockState::LockedInvalid);
    assert_eq!((snap.entered, snap.presses), (0, 0));
    assert_eq!(snap.stored, 0b101010);
    assert_eq!(ctl.timer().armed, Some(TIMING.debounce_us));

    assert_eq!(ctl.on_tick(), Some(Led::Yellow));
    assert_eq!(ctl.on_tick(), Some(Led::Red));

    assert_eq!(ctl.on_settled(), Some(Led::Red));
    let snap = ctl.snapshot();
    assert_eq!(snap.state, LockState::Locked);
    assert_eq!(snap.stored, 0b101010);
    assert!(snap.edges_enabled);
}

#[test]
fn rejected_entry_does_not_disturb_a_later_unlock() {
    let mut ctl = controller();
    enter(&mut ctl, 0b000001);
    settle(&mut ctl);
    enter(&mut ctl, 0b100000);
    settle(&mut ctl);
    enter(&mut ctl, 0b000001);
    assert_eq!(ctl.state(), LockState::Unlocked);
}

#[test]
fn every_edge_is_debounced() {
    let mut ctl = controller();
    for digit in [Digit::One, Digit::Zero, Digit::One] {
        press(&mut ctl, digit);
    }
    // three presses, each release edge swallowed by the gate
    assert_eq!(ctl.gate().masks, 3);
    assert_eq!(ctl.snapshot().entered, 0b101);
}

#[test]
fn release_edge_still_arms_the_debounce() {
    let mut ctl = controller();
    let outcome = ctl.on_edge(Lines::RELEASED).expect("gate open");
    assert_eq!((outcome.digit, outcome.commit), (None, None));
    assert!(ctl.gate().masked);
    assert_eq!(ctl.state(), LockState::Unlocked);
    assert_eq!(ctl.on_settled(), None);
    assert!(!ctl.gate().masked);
}

#[test]
fn edges_during_commit_window_have_no_effect() {
    let mut ctl = controller();
    enter(&mut ctl, 0b010101);
    let before = ctl.snapshot();
    for lines in [Lines::pressed(Digit::Zero), Lines::pressed(Digit::One)] {
        assert_eq!(ctl.on_edge(lines), None);
    }
    assert_eq!(ctl.snapshot(), before);
}

#[test]
fn commit_outcome_reports_the_transition() {
    let mut ctl = controller();
    let mut digits = common::digits(0b110000);
    for digit in digits.by_ref().take(5) {
        press(&mut ctl, digit);
    }
    let last = digits.next().expect("sixth digit");
    let outcome = ctl.on_edge(Lines::pressed(last)).expect("gate open");
    assert_eq!(outcome.digit, Some(Digit::Zero));
    assert_eq!(outcome.commit, Some(Commit::Locked));
    assert_eq!(outcome.show, Some(Led::Red));
}

#[test]
fn locked_display_holds_red_across_ticks() {
    let mut ctl = controller();
    enter(&mut ctl, 0b111000);
    settle(&mut ctl);
    let writes = ctl.pins().writes;
    for _ in 0..10 {
        assert_eq!(ctl.on_tick(), None);
    }
    assert_eq!(ctl.pins().writes, writes);
    assert_eq!(ctl.snapshot().lit, Led::Red);
}

#[test]
fn pressed_states_animate_until_settled() {
    let mut ctl = controller();
    ctl.on_edge(Lines::pressed(Digit::One));
    assert_eq!(ctl.state(), LockState::UnlockedPressed);
    let frames: Vec<_> = (0..3).filter_map(|_| ctl.on_tick()).collect();
    assert_eq!(frames, vec![Led::Yellow, Led::Blue, Led::Green]);
    ctl.on_settled();

    for digit in common::digits(0).skip(1) {
        press(&mut ctl, digit);
    }
    assert_eq!(ctl.state(), LockState::Locked);

    ctl.on_edge(Lines::pressed(Digit::Zero));
    assert_eq!(ctl.state(), LockState::LockedPressed);
    assert_eq!(ctl.on_tick(), Some(Led::Blue));
    assert_eq!(ctl.on_tick(), Some(Led::Red));
    assert_eq!(ctl.on_settled(), Some(Led::Red));
}
