//! Descriptor table tests.
//!
//! The descriptors are declarative data; these tests pin the values the
//! enclosing SoC builder depends on (memory maps, toolchain settings, bus
//! geometry) against the vendor integration notes.

use coregate::cores::{BusKind, CoreKind, Endianness, I6500, MIPSFPGA};
use pretty_assertions::assert_eq;
use std::str::FromStr;

#[test]
fn test_core_names_parse() {
    assert_eq!(CoreKind::from_str("i6500").unwrap(), CoreKind::I6500);
    assert_eq!(CoreKind::from_str("mipsfpga").unwrap(), CoreKind::MipsFpga);
    assert!(CoreKind::from_str("vexriscv").is_err());
}

#[test]
fn test_all_lists_every_core() {
    assert_eq!(CoreKind::ALL.len(), 2);
    for kind in CoreKind::ALL {
        let descriptor = kind.descriptor();
        assert_eq!(CoreKind::from_str(descriptor.name).unwrap(), kind);
    }
}

#[test]
fn test_i6500_descriptor() {
    assert_eq!(I6500.human_name, "MIPS I6500");
    assert_eq!(I6500.data_width, 64);
    assert_eq!(I6500.endianness, Endianness::Little);
    assert_eq!(I6500.gcc.triple, "mips64el-linux-gnuabi64");
    assert_eq!(I6500.linker_output_format, "elf64-tradlittlemips");
    assert_eq!(I6500.nop, "nop");
    assert_eq!(I6500.variants, &["standard"]);
    assert_eq!(I6500.interrupt_lines, 7);

    match I6500.bus {
        BusKind::Axi {
            data_width,
            address_width,
            id_width,
            ar_user_width,
            aw_user_width,
        } => {
            assert_eq!(data_width, 64);
            assert_eq!(address_width, 32);
            assert_eq!(id_width, 11);
            assert_eq!(ar_user_width, 8);
            assert_eq!(aw_user_width, 8);
        }
        other => panic!("i6500 should integrate over AXI, got {:?}", other),
    }
}

#[test]
fn test_mipsfpga_descriptor() {
    assert_eq!(MIPSFPGA.human_name, "microAptiv UP");
    assert_eq!(MIPSFPGA.data_width, 32);
    assert_eq!(MIPSFPGA.linker_output_format, "elf32-tradlittlemips");

    match MIPSFPGA.bus {
        BusKind::Ahb {
            data_width,
            address_width,
        } => {
            assert_eq!(data_width, 32);
            assert_eq!(address_width, 32);
        }
        other => panic!("mipsfpga should integrate over AHB, got {:?}", other),
    }
}

#[test]
fn test_memory_maps() {
    assert_eq!(I6500.mem_region("main_ram"), Some(0x0000_0000));
    assert_eq!(I6500.mem_region("csr"), Some(0x1000_0000));
    assert_eq!(I6500.mem_region("sram"), Some(0x1c00_0000));
    assert_eq!(I6500.mem_region("rom"), Some(0x1fc0_0000));
    assert_eq!(I6500.mem_region("flash"), None);

    // The microAptiv map differs only in the CSR window.
    assert_eq!(MIPSFPGA.mem_region("csr"), Some(0x1800_0000));
    assert_eq!(MIPSFPGA.mem_region("rom"), Some(0x1fc0_0000));
}

#[test]
fn test_io_regions() {
    for descriptor in [&I6500, &MIPSFPGA] {
        assert_eq!(descriptor.io_regions.len(), 1);
        assert_eq!(descriptor.io_regions[0].origin, 0x1000_0000);
        assert_eq!(descriptor.io_regions[0].length, 0x0c00_0000);
        assert!(descriptor.is_io_address(0x1000_0000));
        assert!(!descriptor.is_io_address(0x1c00_0000));
    }
}

#[test]
fn test_gcc_flags_i6500() {
    assert_eq!(
        I6500.gcc_flags(),
        "-march=mips64r6 -mabi=64 -msoft-float -G 0 -mno-abicalls -fno-pic \
         -D__i6500__ -DUART_POLLING"
    );
}

#[test]
fn test_gcc_flags_mipsfpga() {
    assert_eq!(
        MIPSFPGA.gcc_flags(),
        "-march=mips32r2 -mabi=32 -msoft-float -D__mipsfpga__ -DUART_POLLING"
    );
}

#[test]
fn test_descriptor_serializes() {
    let json = serde_json::to_value(I6500).unwrap();
    assert_eq!(json["name"], "i6500");
    assert_eq!(json["bus"]["Axi"]["id_width"], 11);
    assert_eq!(json["mem_map"][3]["name"], "rom");
}
