//! Shared helpers for the unit tests.

use coregate::config::Config;
use coregate::core::Cpu;
use coregate::core::sequencer::ReleaseSequencer;
use coregate::cores::CoreKind;

/// A sequencer with the default 128-tick settling period.
pub fn fresh_sequencer() -> ReleaseSequencer {
    ReleaseSequencer::new(coregate::core::sequencer::SETTLE_TICKS)
}

/// An I6500 model with the default configuration.
pub fn boot_cpu() -> Cpu {
    Cpu::new(CoreKind::I6500, &Config::default()).unwrap()
}
