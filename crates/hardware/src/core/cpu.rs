use super::control::{ClusterPins, ControlOutputs};
use super::sequencer::{ReleaseSequencer, SequencerState};
use crate::config::Config;
use crate::cores::{CoreKind, CpuDescriptor, JtagPads};
use crate::stats::SimStats;

/// One instantiated core: the immutable descriptor plus the mutable
/// integration state (soft reset line, reset vector, JTAG pads, release
/// sequencer).
#[derive(Debug)]
pub struct Cpu {
    pub descriptor: &'static CpuDescriptor,
    pub variant: String,
    pub reset_address: Option<u64>,
    pub jtag: Option<JtagPads>,
    pub sequencer: ReleaseSequencer,
    pub stats: SimStats,
    pub trace: bool,

    reset_request: bool,
    released_seen: bool,
}

impl Cpu {
    pub fn new(kind: CoreKind, config: &Config) -> Result<Self, String> {
        let descriptor = kind.descriptor();
        let variant = config.general.variant.clone();
        if !descriptor.supports_variant(&variant) {
            return Err(format!(
                "core '{}' has no variant '{}' (supported: {})",
                descriptor.name,
                variant,
                descriptor.variants.join(", ")
            ));
        }

        Ok(Self {
            descriptor,
            variant,
            reset_address: config.soc.reset_address,
            jtag: None,
            sequencer: ReleaseSequencer::new(config.cluster.settle_ticks),
            stats: SimStats::default(),
            trace: config.general.trace_sequencer,
            reset_request: false,
            released_seen: false,
        })
    }

    /// Advances the model by one tick of the system clock domain.
    ///
    /// The external reset line is ORed with the model's own soft reset
    /// request, which is consumed here; the combined line feeds the release
    /// sequencer.
    pub fn tick(&mut self, external_reset: bool) -> ControlOutputs {
        let reset = external_reset || self.reset_request;
        self.reset_request = false;

        self.stats.ticks += 1;
        if reset {
            self.stats.external_resets += 1;
            self.released_seen = false;
        }

        let outputs = self.sequencer.on_tick(reset);
        if outputs.released() && !self.released_seen {
            self.released_seen = true;
            self.stats.releases += 1;
            self.stats.last_release_tick = Some(self.stats.ticks);
        }

        if cfg!(feature = "always-trace") || self.trace {
            eprintln!(
                "SEQ tick={} reset={} state={:?} reset_out={} pwr_out={}",
                self.stats.ticks,
                reset,
                self.sequencer.state(),
                outputs.cluster_reset_asserted,
                outputs.cluster_power_asserted,
            );
        }

        outputs
    }

    /// Requests a soft reset, consumed by the next tick.
    pub fn request_reset(&mut self) {
        self.reset_request = true;
    }

    pub fn set_reset_address(&mut self, reset_address: u64) {
        self.reset_address = Some(reset_address);
    }

    /// Maps a physical BIOS address into the core's boot segments: KSEG0
    /// when cached, KSEG1 when uncached.
    pub fn bios_map(&self, addr: u64, cached: bool) -> u64 {
        if cached {
            addr.wrapping_add(self.descriptor.kseg_cached_base)
        } else {
            addr.wrapping_add(self.descriptor.kseg_uncached_base)
        }
    }

    /// Current sequencer outputs inverted onto the active-low vendor pins.
    pub fn cluster_pins(&self) -> ClusterPins {
        ClusterPins::from(self.sequencer.outputs())
    }

    pub fn attach_jtag(&mut self, pads: JtagPads) {
        self.jtag = Some(pads);
    }

    pub fn is_io_address(&self, addr: u64) -> bool {
        self.descriptor.is_io_address(addr)
    }

    pub fn mem_region(&self, name: &str) -> Option<u64> {
        self.descriptor.mem_region(name)
    }

    pub fn cluster_ready(&self) -> bool {
        self.sequencer.state() == SequencerState::PoweredUp
    }
}
