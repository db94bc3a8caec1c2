//! Basic vector math over coordinate slices.
//!
//! Vectors are plain `&[f64]` of any dimension. Every operation returns a new
//! `Vec<f64>` and never touches its inputs, so point lists read from files can
//! be combined without first converting them into fixed-size types.
//!
//! `add`, `subtract` and `dot` work on the common prefix of their inputs: when
//! the lengths differ, the trailing components of the longer vector are
//! silently dropped. Callers that need a strict check should compare lengths
//! themselves.

use glam::DVec3;
use thiserror::Error;

/// Errors produced by vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    #[error("zero length vector")]
    ZeroLengthVector,

    #[error("dimension mismatch: expected at least {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Result type for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

/// Add two vectors over their common prefix.
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Subtract `b` from `a` over their common prefix.
pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Dot product over the common prefix. Empty input gives 0.0.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// 3-D cross product.
///
/// Both inputs need at least three components; anything past the third is
/// ignored.
pub fn cross(a: &[f64], b: &[f64]) -> VectorResult<Vec<f64>> {
    require_3d(a)?;
    require_3d(b)?;

    Ok(vec![
        a[1] * b[2] - b[1] * a[2],
        -(a[0] * b[2] - b[0] * a[2]),
        a[0] * b[1] - b[0] * a[1],
    ])
}

/// Euclidean length.
pub fn length(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}

/// Scale `a` to unit length.
///
/// A vector whose length is not positive can't be normalized; this is
/// reported as [`VectorError::ZeroLengthVector`] rather than producing NaNs.
pub fn normalize(a: &[f64]) -> VectorResult<Vec<f64>> {
    let len = length(a);
    if len <= 0.0 {
        log::warn!("Cannot normalize zero length vector {:?}", a);
        return Err(VectorError::ZeroLengthVector);
    }

    Ok(scale(a, 1.0 / len))
}

/// Multiply every component by `k`.
pub fn scale(a: &[f64], k: f64) -> Vec<f64> {
    a.iter().map(|x| x * k).collect()
}

/// Distance between two points, over their common prefix.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    length(&subtract(a, b))
}

/// Convert the first three components into a glam vector.
pub fn to_dvec3(a: &[f64]) -> VectorResult<DVec3> {
    require_3d(a)?;
    Ok(DVec3::new(a[0], a[1], a[2]))
}

#[inline]
pub fn from_dvec3(v: DVec3) -> Vec<f64> {
    v.to_array().to_vec()
}

fn require_3d(a: &[f64]) -> VectorResult<()> {
    if a.len() < 3 {
        return Err(VectorError::DimensionMismatch {
            expected: 3,
            found: a.len(),
        });
    }
    Ok(())
}
