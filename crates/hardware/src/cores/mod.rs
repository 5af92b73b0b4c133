//! Per-core integration descriptors.
//!
//! Everything the SoC builder needs to know about a supported core is
//! declarative: toolchain settings, memory map, bus parameters, interrupt
//! width. Each core contributes one immutable [`CpuDescriptor`] table.

pub mod i6500;
pub mod mipsfpga;

pub use self::i6500::I6500;
pub use self::mipsfpga::MIPSFPGA;

use serde::Serialize;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Endianness {
    Little,
    Big,
}

/// Declarative peripheral-bus parameters. Only the interface geometry is
/// recorded; the protocol itself lives in the vendor netlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BusKind {
    Axi {
        data_width: u32,
        address_width: u32,
        id_width: u32,
        ar_user_width: u32,
        aw_user_width: u32,
    },
    Ahb {
        data_width: u32,
        address_width: u32,
    },
}

impl BusKind {
    pub fn name(&self) -> &'static str {
        match self {
            BusKind::Axi { .. } => "AXI",
            BusKind::Ahb { .. } => "AHB",
        }
    }

    pub fn data_width(&self) -> u32 {
        match *self {
            BusKind::Axi { data_width, .. } | BusKind::Ahb { data_width, .. } => data_width,
        }
    }
}

/// An address-space region given as origin and length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemRegion {
    pub origin: u64,
    pub length: u64,
}

impl MemRegion {
    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.origin && addr < self.origin + self.length
    }
}

/// A named segment of the core's memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemSegment {
    pub name: &'static str,
    pub base: u64,
}

/// Cross-toolchain settings for the core.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GccSpec {
    pub triple: &'static str,
    pub march: &'static str,
    pub mabi: &'static str,
    pub extra_flags: &'static [&'static str],
    pub defines: &'static [&'static str],
}

impl GccSpec {
    /// Assembles the full compiler flag string.
    pub fn flags(&self) -> String {
        let mut flags = format!("-march={} -mabi={}", self.march, self.mabi);
        for flag in self.extra_flags {
            flags.push(' ');
            flags.push_str(flag);
        }
        for define in self.defines {
            flags.push_str(" -D");
            flags.push_str(define);
        }
        flags
    }
}

/// Platform pad names wired to the core's EJTAG port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JtagPads {
    pub tck: String,
    pub tms: String,
    pub tdi: String,
    pub tdo: String,
    pub ntrst: String,
}

/// Immutable integration data for one supported core.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CpuDescriptor {
    pub name: &'static str,
    pub human_name: &'static str,
    pub category: &'static str,
    pub family: &'static str,
    pub variants: &'static [&'static str],
    pub data_width: u32,
    pub endianness: Endianness,
    pub gcc: GccSpec,
    pub linker_output_format: &'static str,
    pub nop: &'static str,
    pub io_regions: &'static [MemRegion],
    pub mem_map: &'static [MemSegment],
    pub bus: BusKind,
    pub interrupt_lines: u32,
    pub kseg_cached_base: u64,
    pub kseg_uncached_base: u64,
}

impl CpuDescriptor {
    pub fn gcc_flags(&self) -> String {
        self.gcc.flags()
    }

    pub fn mem_region(&self, name: &str) -> Option<u64> {
        self.mem_map
            .iter()
            .find(|seg| seg.name == name)
            .map(|seg| seg.base)
    }

    pub fn is_io_address(&self, addr: u64) -> bool {
        self.io_regions.iter().any(|region| region.contains(addr))
    }

    pub fn supports_variant(&self, variant: &str) -> bool {
        self.variants.contains(&variant)
    }
}

/// Selects one of the supported cores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoreKind {
    I6500,
    MipsFpga,
}

impl CoreKind {
    pub const ALL: [CoreKind; 2] = [CoreKind::I6500, CoreKind::MipsFpga];

    pub fn descriptor(&self) -> &'static CpuDescriptor {
        match self {
            CoreKind::I6500 => &I6500,
            CoreKind::MipsFpga => &MIPSFPGA,
        }
    }
}

impl FromStr for CoreKind {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "i6500" => Ok(CoreKind::I6500),
            "mipsfpga" => Ok(CoreKind::MipsFpga),
            _ => Err(format!("unknown core '{}'", name)),
        }
    }
}
