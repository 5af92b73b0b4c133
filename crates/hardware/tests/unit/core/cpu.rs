use crate::common::boot_cpu;
use coregate::config::Config;
use coregate::core::Cpu;
use coregate::core::sequencer::SETTLE_TICKS;
use coregate::cores::{CoreKind, JtagPads};
use pretty_assertions::assert_eq;

#[test]
fn test_unknown_variant_is_rejected() {
    let mut config = Config::default();
    config.general.variant = "linux".to_string();

    let err = Cpu::new(CoreKind::I6500, &config).unwrap_err();
    assert!(err.contains("variant 'linux'"), "unexpected error: {}", err);
}

#[test]
fn test_standard_variant_is_accepted() {
    let cpu = boot_cpu();
    assert_eq!(cpu.variant, "standard");
    assert_eq!(cpu.descriptor.name, "i6500");
}

#[test]
fn test_soft_reset_feeds_the_sequencer() {
    let mut cpu = boot_cpu();
    for _ in 0..SETTLE_TICKS + 1 {
        cpu.tick(false);
    }
    assert!(cpu.cluster_ready());

    // The request is consumed by the next tick and restarts settling.
    cpu.request_reset();
    let outputs = cpu.tick(false);
    assert!(outputs.cluster_reset_asserted);
    assert!(!cpu.cluster_ready());

    // One-shot: the tick after runs a normal settling tick.
    let outputs = cpu.tick(false);
    assert!(outputs.cluster_reset_asserted);
    assert_eq!(cpu.stats.external_resets, 1);
}

#[test]
fn test_cluster_pins_are_active_low() {
    let mut cpu = boot_cpu();
    let pins = cpu.cluster_pins();
    assert!(!pins.si_cpc_reset_n);
    assert!(!pins.si_cluster_pwr_on_n);

    for _ in 0..SETTLE_TICKS + 1 {
        cpu.tick(false);
    }
    let pins = cpu.cluster_pins();
    assert!(pins.si_cpc_reset_n);
    assert!(pins.si_cluster_pwr_on_n);
}

#[test]
fn test_release_statistics() {
    let mut cpu = boot_cpu();
    for _ in 0..SETTLE_TICKS + 1 {
        cpu.tick(false);
    }
    assert_eq!(cpu.stats.ticks, (SETTLE_TICKS + 1) as u64);
    assert_eq!(cpu.stats.releases, 1);
    assert_eq!(cpu.stats.last_release_tick, Some((SETTLE_TICKS + 1) as u64));

    // Staying powered up does not recount the release.
    for _ in 0..50 {
        cpu.tick(false);
    }
    assert_eq!(cpu.stats.releases, 1);

    // A reset and a second settling period record a second release.
    cpu.tick(true);
    for _ in 0..SETTLE_TICKS + 1 {
        cpu.tick(false);
    }
    assert_eq!(cpu.stats.releases, 2);
}

#[test]
fn test_bios_map_i6500() {
    let cpu = boot_cpu();
    assert_eq!(cpu.bios_map(0x1fc0_0000, true), 0xffff_ffff_9fc0_0000);
    assert_eq!(cpu.bios_map(0x1fc0_0000, false), 0xffff_ffff_bfc0_0000);
}

#[test]
fn test_bios_map_mipsfpga() {
    let cpu = Cpu::new(CoreKind::MipsFpga, &Config::default()).unwrap();
    assert_eq!(cpu.bios_map(0x1fc0_0000, true), 0x9fc0_0000);
    assert_eq!(cpu.bios_map(0x1fc0_0000, false), 0xbfc0_0000);
}

#[test]
fn test_reset_address_from_config_and_override() {
    let mut config = Config::default();
    config.soc.reset_address = Some(0x1fc0_0000);

    let mut cpu = Cpu::new(CoreKind::I6500, &config).unwrap();
    assert_eq!(cpu.reset_address, Some(0x1fc0_0000));

    cpu.set_reset_address(0x0000_0000);
    assert_eq!(cpu.reset_address, Some(0x0000_0000));
}

#[test]
fn test_io_address_membership() {
    let cpu = boot_cpu();
    assert!(cpu.is_io_address(0x1000_0000));
    assert!(cpu.is_io_address(0x1bff_ffff));
    assert!(!cpu.is_io_address(0x1c00_0000));
    assert!(!cpu.is_io_address(0x0000_0000));
}

#[test]
fn test_jtag_pads_attach() {
    let mut cpu = boot_cpu();
    assert!(cpu.jtag.is_none());

    cpu.attach_jtag(JtagPads {
        tck: "jtag_tck".to_string(),
        tms: "jtag_tms".to_string(),
        tdi: "jtag_tdi".to_string(),
        tdo: "jtag_tdo".to_string(),
        ntrst: "jtag_ntrst".to_string(),
    });
    assert_eq!(cpu.jtag.as_ref().unwrap().tdo, "jtag_tdo");
}
