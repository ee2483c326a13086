use embedded_hal::digital::InputPin;
use lock_core::{EdgeGate, Lines};
use microbit::hal::{
    gpio::{Floating, Input, Pin},
    gpiote::Gpiote,
    pac::{self, GPIOTE},
};

/// The two digit buttons. Both are active low.
pub struct Buttons {
    digit0: Pin<Input<Floating>>,
    digit1: Pin<Input<Floating>>,
}

impl Buttons {
    pub fn new(digit0: Pin<Input<Floating>>, digit1: Pin<Input<Floating>>) -> Self {
        Self { digit0, digit1 }
    }

    pub fn sample(&mut self) -> Lines {
        Lines {
            digit0: matches!(self.digit0.is_low(), Ok(true)),
            digit1: matches!(self.digit1.is_low(), Ok(true)),
        }
    }
}

/// Press edges of both buttons through GPIOTE channels 0 and 1.
pub struct ButtonGate {
    gpiote: Gpiote,
    buttons: Buttons,
}

impl ButtonGate {
    pub fn new(gpiote: GPIOTE, buttons: Buttons) -> Self {
        let gate = Self {
            gpiote: Gpiote::new(gpiote),
            buttons,
        };
        gate.listen(false);
        gate.gpiote.reset_events();
        gate
    }

    /// Acknowledge the pending edge and read both lines.
    pub fn take_edge(&mut self) -> Lines {
        self.gpiote.channel0().reset_events();
        self.gpiote.channel1().reset_events();
        self.buttons.sample()
    }

    fn listen(&self, enabled: bool) {
        let channels = [
            (self.gpiote.channel0(), &self.buttons.digit0),
            (self.gpiote.channel1(), &self.buttons.digit1),
        ];
        for (channel, pin) in &channels {
            // high-to-low = button press
            let event = channel.input_pin(*pin);
            event.hi_to_lo();
            if enabled {
                event.enable_interrupt();
            } else {
                event.disable_interrupt();
            }
        }
    }
}

impl EdgeGate for ButtonGate {
    fn mask(&mut self) {
        self.listen(false);
    }

    fn unmask(&mut self) {
        // bounces latched while masked must not fire now
        self.gpiote.reset_events();
        pac::NVIC::unpend(pac::Interrupt::GPIOTE);
        self.listen(true);
    }
}
