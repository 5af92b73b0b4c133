//! Python bindings for the coregate softcore integration model.
//!
//! Built as the `_core` extension module. The SoC-builder ecosystem this
//! model plugs into is Python, so the core descriptors and the power-up
//! sequencer are exposed to it here.

pub mod conversion;
pub mod cpu;
pub mod stats;

use pyo3::prelude::*;

use crate::cpu::PyCpu;
use crate::stats::PyStats;

/// Registers the module contents. Split out so an embedding binary can
/// inject `_core` into an interpreter it owns.
pub fn register_core_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCpu>()?;
    m.add_class::<PyStats>()?;
    m.add("SETTLE_TICKS", coregate::core::sequencer::SETTLE_TICKS)?;
    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_core_module(m)
}
