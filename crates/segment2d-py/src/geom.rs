//! Segment bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{cfg_from_py, point_from_py, point_to_py, segment_from_py, PyPoint, PySegment};
use pyo3::prelude::*;

#[pyfunction]
pub fn closest_point(segment: PySegment, point: PyPoint) -> PyPoint {
    point_to_py(segment_from_py(segment).closest_point(point_from_py(point)))
}

#[pyfunction]
#[pyo3(signature = (a, b, eps=None))]
pub fn intersects_at(a: PySegment, b: PySegment, eps: Option<f64>) -> PyResult<Option<PyPoint>> {
    let cfg = cfg_from_py(eps)?;
    Ok(segment_from_py(a)
        .intersects_at_cfg(&segment_from_py(b), cfg)
        .map(point_to_py))
}

#[pyfunction]
#[pyo3(signature = (a, b, eps=None))]
pub fn intersects_at_precise(
    a: PySegment,
    b: PySegment,
    eps: Option<f64>,
) -> PyResult<Option<PyPoint>> {
    let cfg = cfg_from_py(eps)?;
    Ok(segment_from_py(a)
        .intersects_at_precise_cfg(&segment_from_py(b), cfg)
        .map(point_to_py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(closest_point, m)?)?;
    m.add_function(wrap_pyfunction!(intersects_at, m)?)?;
    m.add_function(wrap_pyfunction!(intersects_at_precise, m)?)?;
    Ok(())
}
