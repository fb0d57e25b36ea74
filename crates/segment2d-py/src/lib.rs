//! PyO3 bindings for `segment2d`.
//!
//! Notes
//! - Keep bindings thin and predictable: points are `(x, y)` tuples, segments
//!   are `((x0, y0), (x1, y1))`.
//! - Overlap is returned as `(nan, nan)`, matching the Rust result vocabulary.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn segment2d_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    m.add("VERSION", segment2d::VERSION)?;
    Ok(())
}
