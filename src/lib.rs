pub mod error;
mod expressions;
pub mod similarity;
mod strsim;

use polars::prelude::*;
use pyo3::prelude::*;
use pyo3_polars::{PyDataFrame, PySeries};

use error::{Operand, SimilarityError};
use similarity::{SimilarityConfig, DEFAULT_IGNORE_SHORT, DOCUMENTED_IGNORE_SHORT};

#[cfg(target_os = "linux")]
use jemallocator::Jemalloc;

#[global_allocator]
#[cfg(target_os = "linux")]
static ALLOC: Jemalloc = Jemalloc;

fn config_from_args(
    strip: Option<Vec<String>>,
    keep_case: bool,
    ignore_short: i64,
    verbose: bool,
) -> SimilarityConfig {
    let config = SimilarityConfig::default()
        .with_keep_case(keep_case)
        .with_ignore_short(ignore_short)
        .with_verbose(verbose);
    match strip {
        Some(strip) => config.with_strip(strip),
        None => config,
    }
}

/// Similarity of two strings in [0, 1].
#[pyfunction]
#[pyo3(
    name = "similarity",
    signature = (s1, s2, strip = None, keep_case = false, ignore_short = DEFAULT_IGNORE_SHORT, verbose = false)
)]
fn py_similarity(
    s1: Option<String>,
    s2: Option<String>,
    strip: Option<Vec<String>>,
    keep_case: bool,
    ignore_short: i64,
    verbose: bool,
) -> PyResult<f64> {
    let s1 = s1.ok_or(SimilarityError::NullInput {
        operand: Operand::Left,
    })?;
    let s2 = s2.ok_or(SimilarityError::NullInput {
        operand: Operand::Right,
    })?;
    let config = config_from_args(strip, keep_case, ignore_short, verbose);
    Ok(similarity::similarity(&s1, &s2, &config))
}

/// Row-wise similarity of two string columns of a DataFrame.
#[pyfunction]
#[pyo3(
    name = "similarity_frame",
    signature = (pydf, col_a, col_b, strip = None, keep_case = false, ignore_short = DEFAULT_IGNORE_SHORT, verbose = false)
)]
fn py_similarity_frame(
    pydf: PyDataFrame,
    col_a: &str,
    col_b: &str,
    strip: Option<Vec<String>>,
    keep_case: bool,
    ignore_short: i64,
    verbose: bool,
) -> PyResult<PySeries> {
    let df: DataFrame = pydf.into();
    let config = config_from_args(strip, keep_case, ignore_short, verbose);
    let s = strsim::frame_apply(&df, col_a, col_b, &config)?;
    Ok(PySeries(s))
}

/// A Python module implemented in Rust.
#[pymodule]
#[pyo3(name = "_internal")]
fn string_similarity(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_similarity_frame, m)?)?;
    m.add("DEFAULT_IGNORE_SHORT", DEFAULT_IGNORE_SHORT)?;
    m.add("DOCUMENTED_IGNORE_SHORT", DOCUMENTED_IGNORE_SHORT)?;
    Ok(())
}
