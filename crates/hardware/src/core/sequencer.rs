//! Cluster power-up release sequencer.
//!
//! After a system reset the cluster's reset and power-enable controls are
//! held asserted for a fixed settling period before the cluster is allowed
//! to come up. The hardware expresses this as a two-state FSM gated by a
//! wait timer; here it is an explicit state enum plus a bounded counter,
//! advanced once per clock tick.

use super::control::ControlOutputs;

/// Default settling period, in ticks.
pub const SETTLE_TICKS: u32 = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Resetting,
    PoweredUp,
}

#[derive(Debug)]
pub struct ReleaseSequencer {
    state: SequencerState,
    settle_ticks: u32,
    counter: u32,
}

impl ReleaseSequencer {
    pub fn new(settle_ticks: u32) -> Self {
        Self {
            state: SequencerState::Resetting,
            settle_ticks: if settle_ticks == 0 { 1 } else { settle_ticks },
            counter: 0,
        }
    }

    /// Advances the sequencer by one tick and returns the outputs for that
    /// tick.
    ///
    /// An asserted external reset always wins: the state is forced back to
    /// `Resetting` with the counter restarted at 0, whatever the current
    /// state. Otherwise the counter advances while `Resetting`, and once it
    /// has counted the full settling period the state moves to `PoweredUp`,
    /// where it stays until the next external reset.
    ///
    /// Release boundary: the tick on which the counter reaches the settling
    /// period still returns asserted outputs; the deasserted outputs are
    /// first visible on the following tick. With the default period of 128,
    /// ticks 1..=128 return `(true, true)` and tick 129 onward returns
    /// `(false, false)`.
    pub fn on_tick(&mut self, external_reset_asserted: bool) -> ControlOutputs {
        if external_reset_asserted {
            self.state = SequencerState::Resetting;
            self.counter = 0;
            return self.outputs();
        }

        match self.state {
            SequencerState::Resetting => {
                let outputs = self.outputs();
                self.counter += 1;
                if self.counter >= self.settle_ticks {
                    self.state = SequencerState::PoweredUp;
                    self.counter = 0;
                }
                outputs
            }
            SequencerState::PoweredUp => self.outputs(),
        }
    }

    /// Outputs implied by the current state, without advancing.
    pub fn outputs(&self) -> ControlOutputs {
        let asserted = self.state == SequencerState::Resetting;
        ControlOutputs {
            cluster_reset_asserted: asserted,
            cluster_power_asserted: asserted,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn settle_ticks(&self) -> u32 {
        self.settle_ticks
    }
}
