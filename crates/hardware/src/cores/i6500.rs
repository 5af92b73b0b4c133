use super::{BusKind, CpuDescriptor, Endianness, GccSpec, MemRegion, MemSegment};

/// MIPS I6500: 64-bit multi-cluster core, integrated over AXI.
pub const I6500: CpuDescriptor = CpuDescriptor {
    name: "i6500",
    human_name: "MIPS I6500",
    category: "softcore",
    family: "mips",
    variants: &["standard"],
    data_width: 64,
    endianness: Endianness::Little,
    gcc: GccSpec {
        triple: "mips64el-linux-gnuabi64",
        march: "mips64r6",
        mabi: "64",
        extra_flags: &["-msoft-float", "-G 0", "-mno-abicalls", "-fno-pic"],
        defines: &["__i6500__", "UART_POLLING"],
    },
    linker_output_format: "elf64-tradlittlemips",
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
            base: 0x1000_0000,
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
    bus: BusKind::Axi {
        data_width: 64,
        address_width: 32,
        id_width: 11,
        ar_user_width: 8,
        aw_user_width: 8,
    },
    interrupt_lines: 7,
    kseg_cached_base: 0xffff_ffff_8000_0000,
    kseg_uncached_base: 0xffff_ffff_a000_0000,
};
