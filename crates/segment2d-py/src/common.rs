use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use segment2d::{GeomCfg, Segment};

pub type PyPoint = (f64, f64);
pub type PySegment = (PyPoint, PyPoint);

pub fn point_from_py(p: PyPoint) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

pub fn point_to_py(p: Vector2<f64>) -> PyPoint {
    (p.x, p.y)
}

pub fn segment_from_py(s: PySegment) -> Segment {
    Segment::new(point_from_py(s.0), point_from_py(s.1))
}

pub fn cfg_from_py(eps: Option<f64>) -> PyResult<GeomCfg> {
    match eps {
        None => Ok(GeomCfg::default()),
        Some(e) if e.is_finite() && e >= 0.0 => Ok(GeomCfg { eps_zero: e }),
        Some(e) => Err(PyValueError::new_err(format!(
            "eps must be finite and non-negative, got {e}"
        ))),
    }
}
