//! Python-to-config conversion.
//!
//! Configs arrive from Python as plain nested dicts. They are lowered to a
//! `serde_json::Value` tree and deserialized from there, so the Rust config
//! schema stays the single source of truth.

use coregate::config::Config;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString};
use serde_json::Value;

fn py_to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        return Ok(Value::Null);
    }
    if let Ok(b) = obj.downcast::<PyBool>() {
        return Ok(Value::Bool(b.is_true()));
    }
    if let Ok(i) = obj.downcast::<PyInt>() {
        if let Ok(unsigned) = i.extract::<u64>() {
            return Ok(Value::from(unsigned));
        }
        return Ok(Value::from(i.extract::<i64>()?));
    }
    if let Ok(f) = obj.downcast::<PyFloat>() {
        return Ok(Value::from(f.value()));
    }
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(Value::String(s.to_string()));
    }
    if let Ok(list) = obj.downcast::<PyList>() {
        let mut items = Vec::with_capacity(list.len());
        for item in list.iter() {
            items.push(py_to_value(&item)?);
        }
        return Ok(Value::Array(items));
    }
    if let Ok(dict) = obj.downcast::<PyDict>() {
        let mut map = serde_json::Map::new();
        for (key, value) in dict.iter() {
            map.insert(key.extract::<String>()?, py_to_value(&value)?);
        }
        return Ok(Value::Object(map));
    }
    Err(PyTypeError::new_err(format!(
        "unsupported config value: {}",
        obj.get_type().name()?
    )))
}

/// Converts a Python config dict into a [`Config`]. Missing sections and
/// fields fall back to their defaults.
pub fn py_dict_to_config(config_dict: &Bound<'_, PyAny>) -> PyResult<Config> {
    let value = py_to_value(config_dict)?;
    Config::from_value(value).map_err(PyTypeError::new_err)
}
