//! Statistics snapshot exposed to Python.

use coregate::stats::SimStats;
use pyo3::prelude::*;

/// Immutable snapshot of a run's statistics.
#[pyclass]
pub struct PyStats {
    inner: SimStats,
}

#[pymethods]
impl PyStats {
    /// Total ticks evaluated.
    #[getter]
    fn ticks(&self) -> u64 {
        self.inner.ticks
    }

    /// Ticks on which the combined reset line was asserted.
    #[getter]
    fn external_resets(&self) -> u64 {
        self.inner.external_resets
    }

    /// Number of times the cluster controls deasserted.
    #[getter]
    fn releases(&self) -> u64 {
        self.inner.releases
    }

    /// Tick of the most recent release, or None.
    #[getter]
    fn last_release_tick(&self) -> Option<u64> {
        self.inner.last_release_tick
    }

    fn __repr__(&self) -> String {
        format!(
            "Stats(ticks={}, external_resets={}, releases={}, last_release_tick={:?})",
            self.inner.ticks,
            self.inner.external_resets,
            self.inner.releases,
            self.inner.last_release_tick,
        )
    }
}

impl From<SimStats> for PyStats {
    fn from(inner: SimStats) -> Self {
        Self { inner }
    }
}
