use polars::prelude::*;
use pyo3_polars::derive::CallerContext;
use rayon::prelude::*;

use crate::error::{Result, SimilarityError};
use crate::similarity::{similarity, SimilarityConfig};

fn split_offsets(len: usize, n: usize) -> Vec<(usize, usize)> {
    if n == 1 {
        vec![(0, len)]
    } else {
        let chunk_size = len / n;

        (0..n)
            .map(|partition| {
                let offset = partition * chunk_size;
                let len = if partition == (n - 1) {
                    len - offset
                } else {
                    chunk_size
                };
                (partition * chunk_size, len)
            })
            .collect()
    }
}

/// Number of output rows for a pairing of `lhs` and `rhs`, where a single
/// row on either side is broadcast against the other.
fn output_len(lhs: usize, rhs: usize) -> Result<usize> {
    match (lhs, rhs) {
        (a, b) if a == b => Ok(a),
        (1, b) => Ok(b),
        (a, 1) => Ok(a),
        (a, b) => Err(SimilarityError::LengthMismatch { lhs: a, rhs: b }),
    }
}

fn slice_or_broadcast(ca: &StringChunked, offset: usize, len: usize) -> StringChunked {
    if ca.len() == 1 {
        ca.clone()
    } else {
        ca.slice(offset as i64, len)
    }
}

fn score_rows(
    lhs: &StringChunked,
    rhs: &StringChunked,
    config: &SimilarityConfig,
) -> Vec<Option<f64>> {
    let score = |a: Option<&str>, b: Option<&str>| match (a, b) {
        (Some(a), Some(b)) => Some(similarity(a, b, config)),
        _ => None,
    };

    match (lhs.len(), rhs.len()) {
        (a, b) if a == b => lhs
            .into_iter()
            .zip(rhs.into_iter())
            .map(|(a, b)| score(a, b))
            .collect(),
        (1, _) => {
            let a = lhs.get(0);
            rhs.into_iter().map(|b| score(a, b)).collect()
        }
        _ => {
            let b = rhs.get(0);
            lhs.into_iter().map(|a| score(a, b)).collect()
        }
    }
}

/// Score two string columns row by row. Rows with a null on either side are
/// null in the output.
pub(crate) fn apply(
    lhs: &StringChunked,
    rhs: &StringChunked,
    parallel: bool,
    config: &SimilarityConfig,
) -> Result<Float64Chunked> {
    let len = output_len(lhs.len(), rhs.len())?;
    let n = if parallel {
        rayon::current_num_threads()
    } else {
        1
    };
    let offsets = split_offsets(len, n);
    tracing::trace!(rows = len, partitions = offsets.len(), "scoring columns");

    let out = offsets
        .par_iter()
        .filter(|(_, len)| *len > 0)
        .map(|(offset, len)| {
            let lhs = slice_or_broadcast(lhs, *offset, *len);
            let rhs = slice_or_broadcast(rhs, *offset, *len);
            score_rows(&lhs, &rhs, config)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect::<Float64Chunked>();

    Ok(out.with_name(lhs.name().clone()))
}

pub(super) fn frame_apply(
    df: &DataFrame,
    col_a: &str,
    col_b: &str,
    config: &SimilarityConfig,
) -> Result<Series> {
    let string_a = df.column(col_a)?.str()?;
    let string_b = df.column(col_b)?.str()?;
    Ok(apply(string_a, string_b, true, config)?.into_series())
}

fn score_inputs(inputs: &[Series], parallel: bool, config: &SimilarityConfig) -> Result<Series> {
    if inputs.len() != 2 {
        return Err(SimilarityError::InputCount {
            expected: 2,
            got: inputs.len(),
        });
    }
    let lhs = inputs[0].str()?;
    let rhs = inputs[1].str()?;
    Ok(apply(lhs, rhs, parallel, config)?.into_series())
}

pub(super) fn parallel_apply(
    inputs: &[Series],
    context: CallerContext,
    config: &SimilarityConfig,
) -> PolarsResult<Series> {
    // polars is already running this expression in parallel
    let parallel = !context.parallel();
    Ok(score_inputs(inputs, parallel, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(name: &str, values: &[Option<&str>]) -> StringChunked {
        Series::new(name.into(), values).str().unwrap().clone()
    }

    fn assert_eq_float(a: f64, b: f64) {
        assert_eq!(format!("{:.6}", a), format!("{:.6}", b));
    }

    #[test]
    fn test_split_offsets() {
        assert_eq!(split_offsets(10, 1), vec![(0, 10)]);
        assert_eq!(split_offsets(10, 3), vec![(0, 3), (3, 3), (6, 4)]);
        assert_eq!(split_offsets(2, 4), vec![(0, 0), (0, 0), (0, 0), (0, 2)]);
    }

    #[test]
    fn test_output_len() {
        assert_eq!(output_len(4, 4).unwrap(), 4);
        assert_eq!(output_len(1, 4).unwrap(), 4);
        assert_eq!(output_len(4, 1).unwrap(), 4);
        assert_eq!(output_len(0, 0).unwrap(), 0);
        assert!(matches!(
            output_len(3, 4),
            Err(SimilarityError::LengthMismatch { lhs: 3, rhs: 4 })
        ));
    }

    #[test]
    fn test_apply_row_by_row() {
        let lhs = strings("a", &[Some("martha"), Some("form"), None, Some("Julie S Morin")]);
        let rhs = strings("b", &[Some("marhta"), Some("from"), Some("x"), Some("Julie T Morin")]);
        let config = SimilarityConfig::default();

        for parallel in [false, true] {
            let out = apply(&lhs, &rhs, parallel, &config).unwrap();
            assert_eq!(out.name().as_str(), "a");
            assert_eq!(out.len(), 4);
            assert_eq_float(out.get(0).unwrap(), 0.944);
            assert_eq!(out.get(1), Some(0.0));
            assert_eq!(out.get(2), None);
            assert_eq_float(out.get(3).unwrap(), 0.939);
        }
    }

    #[test]
    fn test_apply_broadcasts_single_row() {
        let lhs = strings("a", &[Some("Katherine")]);
        let rhs = strings("b", &[Some("Kahterine"), Some("Katherine"), None]);
        let config = SimilarityConfig::default();

        let out = apply(&lhs, &rhs, true, &config).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq_float(out.get(0).unwrap(), 0.963);
        assert_eq!(out.get(1), Some(1.0));
        assert_eq!(out.get(2), None);

        let out = apply(&rhs, &lhs, false, &config).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq_float(out.get(0).unwrap(), 0.963);
    }

    #[test]
    fn test_apply_single_rows_with_many_threads() {
        let lhs = strings("a", &[Some("martha")]);
        let rhs = strings("b", &[Some("marhta")]);
        let out = apply(&lhs, &rhs, true, &SimilarityConfig::default()).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_frame_apply() {
        let df = DataFrame::new(vec![
            Series::new("a".into(), &["1313-123 Westcourt Place N2L 1B3", "abcdefghij"]),
            Series::new("b".into(), &["Unit 1313 123 Westcourt Pl. N2L1B3", "klmnopqrst"]),
            Series::new("c".into(), &[1i32, 2]),
        ])
        .unwrap();
        let config = SimilarityConfig::default();

        let out = frame_apply(&df, "a", "b", &config).unwrap();
        let out = out.f64().unwrap();
        assert_eq_float(out.get(0).unwrap(), 0.895);
        assert_eq!(out.get(1), Some(0.0));

        assert!(matches!(
            frame_apply(&df, "a", "missing", &config),
            Err(SimilarityError::Polars(_))
        ));
        assert!(matches!(
            frame_apply(&df, "a", "c", &config),
            Err(SimilarityError::Polars(_))
        ));
    }

    #[test]
    fn test_score_inputs() {
        let a = Series::new("a".into(), &["martha", "form"]);
        let b = Series::new("b".into(), &["marhta", "from"]);
        let n = Series::new("n".into(), &[1i32, 2]);
        let config = SimilarityConfig::default();

        let out = score_inputs(&[a.clone(), b.clone()], true, &config).unwrap();
        let out = out.f64().unwrap();
        assert_eq_float(out.get(0).unwrap(), 0.944);
        assert_eq!(out.get(1), Some(0.0));

        assert!(matches!(
            score_inputs(&[a.clone()], false, &config),
            Err(SimilarityError::InputCount { expected: 2, got: 1 })
        ));
        assert!(matches!(
            score_inputs(&[a, n], false, &config),
            Err(SimilarityError::Polars(_))
        ));

        let err: PolarsError = score_inputs(&[b], false, &config).unwrap_err().into();
        assert!(matches!(err, PolarsError::ComputeError(_)));
    }

    #[test]
    fn test_apply_uses_config() {
        let lhs = strings("a", &[Some("dwayne")]);
        let rhs = strings("b", &[Some("duane")]);
        let config = SimilarityConfig::default().with_ignore_short(4);
        let out = apply(&lhs, &rhs, false, &config).unwrap();
        assert_eq_float(out.get(0).unwrap(), 0.822);
    }

    #[test]
    fn test_apply_rejects_mismatched_lengths() {
        let lhs = strings("a", &[Some("a"), Some("b")]);
        let rhs = strings("b", &[Some("a"), Some("b"), Some("c")]);
        let err = apply(&lhs, &rhs, false, &SimilarityConfig::default()).unwrap_err();
        assert!(matches!(err, SimilarityError::LengthMismatch { lhs: 2, rhs: 3 }));
    }

    #[test]
    fn test_apply_many_rows_in_parallel() {
        let left: Vec<Option<&str>> = (0..1000).map(|_| Some("123 Falconridge Cres")).collect();
        let right: Vec<Option<&str>> = (0..1000).map(|_| Some("123 Falconridge Crescent")).collect();
        let lhs = strings("a", &left);
        let rhs = strings("b", &right);
        let config = SimilarityConfig::default();

        let serial = apply(&lhs, &rhs, false, &config).unwrap();
        let parallel = apply(&lhs, &rhs, true, &config).unwrap();
        assert_eq!(parallel.len(), 1000);
        assert_eq!(
            serial.into_iter().collect::<Vec<_>>(),
            parallel.into_iter().collect::<Vec<_>>()
        );
    }
}
