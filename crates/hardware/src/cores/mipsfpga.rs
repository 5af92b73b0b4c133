use super::{BusKind, CpuDescriptor, Endianness, GccSpec, MemRegion, MemSegment};

/// microAptiv UP (MIPSfpga): 32-bit single-core, integrated over AHB.
pub const MIPSFPGA: CpuDescriptor = CpuDescriptor {
    name: "mipsfpga",
    human_name: "microAptiv UP",
    category: "softcore",
    family: "mips",
    variants: &["standard"],
    data_width: 32,
    endianness: Endianness::Little,
    gcc: GccSpec {
        triple: "mips64el-linux-gnuabi64",
        march: "mips32r2",
        mabi: "32",
        extra_flags: &["-msoft-float"],
        defines: &["__mipsfpga__", "UART_POLLING"],
    },
    linker_output_format: "elf32-tradlittlemips",
    nop: "nop",
    io_regions: &[MemRegion {
        origin: 0x1000_0000,
        length: 0x0c00_0000,
    }],
    // Based on vanilla sysmap.h
    mem_map: &[
        MemSegment {
            name: "main_ram",
            base: 0x0000_0000,
        },
        MemSegment {
            name: "csr",
            base: 0x1800_0000,
        },
        MemSegment {
            name: "sram",
            base: 0x1c00_0000,
        },
        MemSegment {
            name: "rom",
            base: 0x1fc0_0000,
        },
    ],
    bus: BusKind::Ahb {
        data_width: 32,
        address_width: 32,
    },
    interrupt_lines: 7,
    kseg_cached_base: 0x8000_0000,
    kseg_uncached_base: 0xa000_0000,
};
