use crate::config::Config;
use crate::core::Cpu;
use crate::core::control::ControlOutputs;
use crate::cores::CoreKind;

/// The integration harness: one core model plus the clock/reset source it
/// hangs off. The external reset line is modeled as a one-shot request that
/// is consumed by the next tick.
pub struct System {
    pub cpu: Cpu,
    reset_pending: bool,
}

impl System {
    pub fn new(kind: CoreKind, config: &Config) -> Result<Self, String> {
        let cpu = Cpu::new(kind, config)?;
        let descriptor = cpu.descriptor;
        println!(
            "[Soc] Registered core: {:<10} {} ({}-bit, {} bus, {} irq lines)",
            descriptor.name,
            descriptor.human_name,
            descriptor.data_width,
            descriptor.bus.name(),
            descriptor.interrupt_lines,
        );
        Ok(Self {
            cpu,
            reset_pending: false,
        })
    }

    /// Asserts the external reset line for the next tick.
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    pub fn tick(&mut self) -> ControlOutputs {
        let reset = std::mem::take(&mut self.reset_pending);
        self.cpu.tick(reset)
    }

    /// Ticks until the cluster controls deassert, returning the tick on
    /// which that first happened, or None if `limit` ticks pass first.
    pub fn run_until_released(&mut self, limit: u64) -> Option<u64> {
        for _ in 0..limit {
            if self.tick().released() {
                return Some(self.cpu.stats.ticks);
            }
        }
        None
    }
}
