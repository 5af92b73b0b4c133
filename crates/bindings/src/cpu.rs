//! CPU model Python binding.
//!
//! Exposes one instantiated core to Python: create from core name plus
//! config dict, tick it, run until the cluster releases, and read back the
//! descriptor data a SoC builder needs (memory map, toolchain flags, bus
//! parameters).

use crate::conversion::py_dict_to_config;
use crate::stats::PyStats;
use coregate::config::Config;
use coregate::cores::{CoreKind, JtagPads};
use coregate::soc::System;
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Python-exposed CPU model: wraps the harnessed core for stepping and
/// descriptor queries from Python.
#[pyclass]
pub struct PyCpu {
    pub inner: System,
}

#[pymethods]
impl PyCpu {
    /// Creates a new CPU model instance.
    ///
    /// # Arguments
    /// * `core` - Core name, `"i6500"` or `"mipsfpga"`.
    /// * `config_dict` - Optional configuration dict; missing keys default.
    ///
    /// # Errors
    /// Raises `RuntimeError` for an unknown core name or a variant the core
    /// does not support, `TypeError` for a malformed config dict.
    #[new]
    #[pyo3(signature = (core, config_dict=None))]
    fn new(core: &str, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let kind: CoreKind = core.parse().map_err(PyRuntimeError::new_err)?;
        let config = match config_dict {
            Some(dict) => py_dict_to_config(dict)?,
            None => Config::default(),
        };
        let system = System::new(kind, &config).map_err(PyRuntimeError::new_err)?;
        Ok(PyCpu { inner: system })
    }

    /// Advances the model by one tick; `reset` asserts the external reset
    /// line for that tick. Returns the active-high control pair
    /// `(cluster_reset_asserted, cluster_power_asserted)`.
    #[pyo3(signature = (reset=false))]
    pub fn tick(&mut self, reset: bool) -> (bool, bool) {
        if reset {
            self.inner.request_reset();
        }
        let outputs = self.inner.tick();
        (
            outputs.cluster_reset_asserted,
            outputs.cluster_power_asserted,
        )
    }

    /// Runs until the cluster controls deassert or the optional tick limit
    /// is reached.
    ///
    /// Periodically checks for Python signals (e.g. Ctrl-C) so a long run
    /// stays interruptible.
    ///
    /// # Returns
    /// The tick on which the cluster released, or None if the limit was
    /// reached first.
    #[pyo3(signature = (limit=None))]
    pub fn run_until_released(&mut self, py: Python, limit: Option<u64>) -> PyResult<Option<u64>> {
        let start_ticks = self.inner.cpu.stats.ticks;
        loop {
            if let Some(max_ticks) = limit
                && self.inner.cpu.stats.ticks - start_ticks >= max_ticks
            {
                return Ok(None);
            }

            if self.inner.cpu.stats.ticks.is_multiple_of(10000) {
                py.check_signals()?;
            }

            if self.inner.tick().released() {
                return Ok(Some(self.inner.cpu.stats.ticks));
            }
        }
    }

    /// Requests a soft reset, consumed by the next tick.
    pub fn request_reset(&mut self) {
        self.inner.cpu.request_reset();
    }

    /// True once the cluster has powered up.
    pub fn cluster_ready(&self) -> bool {
        self.inner.cpu.cluster_ready()
    }

    /// Active-low physical pin pair `(si_cpc_reset_n, si_cluster_pwr_on_n)`.
    pub fn cluster_pins(&self) -> (bool, bool) {
        let pins = self.inner.cpu.cluster_pins();
        (pins.si_cpc_reset_n, pins.si_cluster_pwr_on_n)
    }

    /// Returns a snapshot of the current run statistics.
    pub fn get_stats(&self) -> PyStats {
        PyStats::from(self.inner.cpu.stats.clone())
    }

    /// Set the reset vector assigned by the enclosing SoC.
    pub fn set_reset_address(&mut self, reset_address: u64) {
        self.inner.cpu.set_reset_address(reset_address);
    }

    /// Reset vector, if one has been assigned.
    pub fn get_reset_address(&self) -> Option<u64> {
        self.inner.cpu.reset_address
    }

    /// Map a physical BIOS address into the core's cached (KSEG0) or
    /// uncached (KSEG1) boot segment.
    #[pyo3(signature = (addr, cached=true))]
    pub fn bios_map(&self, addr: u64, cached: bool) -> u64 {
        self.inner.cpu.bios_map(addr, cached)
    }

    /// Record the platform pads wired to the core's EJTAG port.
    pub fn attach_jtag(
        &mut self,
        tck: String,
        tms: String,
        tdi: String,
        tdo: String,
        ntrst: String,
    ) {
        self.inner.cpu.attach_jtag(JtagPads {
            tck,
            tms,
            tdi,
            tdo,
            ntrst,
        });
    }

    /// True if the address falls in one of the core's IO regions.
    pub fn is_io_address(&self, addr: u64) -> bool {
        self.inner.cpu.is_io_address(addr)
    }

    #[getter]
    pub fn name(&self) -> &'static str {
        self.inner.cpu.descriptor.name
    }

    #[getter]
    pub fn human_name(&self) -> &'static str {
        self.inner.cpu.descriptor.human_name
    }

    #[getter]
    pub fn variant(&self) -> String {
        self.inner.cpu.variant.clone()
    }

    #[getter]
    pub fn data_width(&self) -> u32 {
        self.inner.cpu.descriptor.data_width
    }

    #[getter]
    pub fn gcc_triple(&self) -> &'static str {
        self.inner.cpu.descriptor.gcc.triple
    }

    #[getter]
    pub fn gcc_flags(&self) -> String {
        self.inner.cpu.descriptor.gcc_flags()
    }

    #[getter]
    pub fn linker_output_format(&self) -> &'static str {
        self.inner.cpu.descriptor.linker_output_format
    }

    #[getter]
    pub fn nop(&self) -> &'static str {
        self.inner.cpu.descriptor.nop
    }

    /// Bus kind name ("AXI" or "AHB").
    #[getter]
    pub fn bus(&self) -> &'static str {
        self.inner.cpu.descriptor.bus.name()
    }

    /// Peripheral-bus data width in bits.
    #[getter]
    pub fn bus_data_width(&self) -> u32 {
        self.inner.cpu.descriptor.bus.data_width()
    }

    #[getter]
    pub fn interrupt_lines(&self) -> u32 {
        self.inner.cpu.descriptor.interrupt_lines
    }

    /// Memory map as a `{segment_name: base_address}` dict.
    pub fn mem_map<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let map = PyDict::new(py);
        for segment in self.inner.cpu.descriptor.mem_map {
            map.set_item(segment.name, segment.base)?;
        }
        Ok(map)
    }

    /// IO regions as `(origin, length)` pairs.
    pub fn io_regions(&self) -> Vec<(u64, u64)> {
        self.inner
            .cpu
            .descriptor
            .io_regions
            .iter()
            .map(|region| (region.origin, region.length))
            .collect()
    }
}
