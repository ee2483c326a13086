//! Coordination of the three interrupt handlers.
//!
//! The edge handler masks edges and arms the settle timer; the settle
//! handler unmasks them. So at most one of the two is ever pending and they
//! need no lock between them. The tick handler can preempt either one on
//! real hardware, which is why the whole controller lives in a
//! [`SharedLock`](crate::SharedLock) and every handler goes through it.

use crate::config::Timing;
use crate::display::{Display, Led};
use crate::hal::{BusPins, EdgeGate, Lines, SettleTimer};
use crate::machine::{EdgeOutcome, LockMachine};
use crate::state::LockState;

/// Consistent view of everything the handlers share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub state: LockState,
    pub entered: u8,
    pub stored: u8,
    pub presses: u8,
    pub lit: Led,
    pub edges_enabled: bool,
}

pub struct Controller<G, T, P> {
    machine: LockMachine,
    display: Display<P>,
    gate: G,
    timer: T,
    timing: Timing,
    edges_enabled: bool,
}

impl<G, T, P> Controller<G, T, P>
where
    G: EdgeGate,
    T: SettleTimer,
    P: BusPins,
{
    /// Take the hardware, light green and open the gate.
    pub fn new(mut gate: G, timer: T, pins: P, timing: Timing) -> Self {
        gate.unmask();
        Self {
            machine: LockMachine::new(),
            display: Display::new(pins),
            gate,
            timer,
            timing,
            edges_enabled: true,
        }
    }

    /// Button edge handler. Returns `None` when edges are masked.
    pub fn on_edge(&mut self, lines: Lines) -> Option<EdgeOutcome> {
        if !self.edges_enabled {
            return None;
        }
        let outcome = self.machine.on_edge(lines);
        if let Some(led) = outcome.show {
            self.display.show(led);
        }

        self.gate.mask();
        self.edges_enabled = false;
        self.timer.arm(self.timing.debounce_us);
        Some(outcome)
    }

    /// Settle timer expiry handler.
    pub fn on_settled(&mut self) -> Option<Led> {
        self.timer.disarm();
        self.gate.unmask();
        self.edges_enabled = true;

        let led = self.machine.on_settled()?;
        self.display.show(led);
        Some(led)
    }

    /// Display refresh handler. Never changes the lock state.
    pub fn on_tick(&mut self) -> Option<Led> {
        let led = crate::ticker::next_frame(self.machine.state(), self.display.lit())?;
        self.display.show(led);
        Some(led)
    }

    pub fn state(&self) -> LockState {
        self.machine.state()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn snapshot(&self) -> Snapshot {
        let combo = self.machine.combo();
        Snapshot {
            state: self.machine.state(),
            entered: combo.entered(),
            stored: combo.stored(),
            presses: combo.presses(),
            lit: self.display.lit(),
            edges_enabled: self.edges_enabled,
        }
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// For the edge interrupt to acknowledge the edge and sample the lines
    /// before calling [`on_edge`](Controller::on_edge).
    pub fn gate_mut(&mut self) -> &mut G {
        &mut self.gate
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn pins(&self) -> &P {
        self.display.pins()
    }
}
