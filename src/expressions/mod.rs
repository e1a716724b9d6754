#![allow(clippy::unused_unit)]
use polars::prelude::*;
use pyo3_polars::derive::{polars_expr, CallerContext};

use crate::similarity::SimilarityConfig;
use crate::strsim;

#[polars_expr(output_type=Float64)]
fn similarity(
    inputs: &[Series],
    context: CallerContext,
    kwargs: SimilarityConfig,
) -> PolarsResult<Series> {
    strsim::parallel_apply(inputs, context, &kwargs)
}
