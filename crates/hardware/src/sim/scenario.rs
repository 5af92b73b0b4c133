//! Power-up scenario driver.
//!
//! Replays a schedule of external reset assertions against a [`System`] and
//! reports when the cluster released. Shared by the CLI and the integration
//! tests.

use crate::soc::System;

/// Ticks (1-based) at which the external reset line is asserted.
pub struct ResetScenario {
    reset_ticks: Vec<u64>,
}

impl ResetScenario {
    pub fn new(mut reset_ticks: Vec<u64>) -> Self {
        reset_ticks.sort_unstable();
        reset_ticks.dedup();
        Self { reset_ticks }
    }

    /// A scenario that never asserts reset.
    pub fn quiet() -> Self {
        Self::new(Vec::new())
    }

    pub fn asserts_at(&self, tick: u64) -> bool {
        self.reset_ticks.binary_search(&tick).is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUpReport {
    /// Tick on which the cluster controls first deasserted.
    pub release_tick: Option<u64>,
    pub ticks_run: u64,
    pub resets_applied: u64,
}

/// Runs the scenario until the cluster releases or `max_ticks` pass.
pub fn run(system: &mut System, scenario: &ResetScenario, max_ticks: u64) -> PowerUpReport {
    let mut resets_applied = 0;
    for _ in 0..max_ticks {
        let tick = system.cpu.stats.ticks + 1;
        if scenario.asserts_at(tick) {
            system.request_reset();
            resets_applied += 1;
        }
        let outputs = system.tick();
        if outputs.released() {
            return PowerUpReport {
                release_tick: Some(system.cpu.stats.ticks),
                ticks_run: system.cpu.stats.ticks,
                resets_applied,
            };
        }
    }
    PowerUpReport {
        release_tick: None,
        ticks_run: system.cpu.stats.ticks,
        resets_applied,
    }
}
