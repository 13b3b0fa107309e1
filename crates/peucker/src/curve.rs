//! Call-shape adaptation: validation, canonicalization, and the public
//! entry points.
//!
//! Purpose
//! - Callers hold curves in two shapes: parallel per-axis vectors (x/y or
//!   x/y/z) or an N×D point matrix. Both are resolved once, at this
//!   boundary, into the canonical row-per-point `DMatrix` the engine
//!   consumes, and results are projected back into the caller's shape.
//!
//! Why a tagged union
//! - A single `CurveInput` variant per call shape keeps every shape check in
//!   one place; downstream code only ever sees the canonical matrix.
//!
//! Validation happens eagerly and in a fixed order (shape rules before the
//! tolerance rule, first failure wins) with no partial work on failure.

use std::fmt;

use nalgebra::DMatrix;

use crate::rdp;

/// Validation failures surfaced by the adaptation layer.
///
/// The engine itself is total; every error a caller can see originates here,
/// before any geometric computation.
#[derive(Clone, Debug, PartialEq)]
pub enum SimplifyError {
    /// No coordinate axes at all: an empty axis list or a 0-column matrix.
    NoAxes,
    /// Parallel axis vectors of unequal length.
    AxisLengthMismatch {
        axis: usize,
        expected: usize,
        found: usize,
    },
    /// Tolerance is negative (or NaN, which fails the `>= 0` test).
    NegativeEpsilon { epsilon: f64 },
}

impl fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAxes => write!(f, "curve needs at least one coordinate axis"),
            Self::AxisLengthMismatch {
                axis,
                expected,
                found,
            } => write!(
                f,
                "inputs have different lengths: axis {axis} has {found} points, expected {expected}"
            ),
            Self::NegativeEpsilon { epsilon } => {
                write!(f, "epsilon must be non-negative, got {epsilon}")
            }
        }
    }
}

impl std::error::Error for SimplifyError {}

/// One of the supported call shapes, resolved once at this boundary.
#[derive(Clone, Copy, Debug)]
pub enum CurveInput<'a> {
    /// D parallel coordinate vectors, each holding one axis of N points.
    Axes(&'a [&'a [f64]]),
    /// N×D matrix with one point per row.
    Matrix(&'a DMatrix<f64>),
}

/// Canonical curve: borrowed when the caller already holds a point matrix,
/// stacked into an owned one when the caller passed per-axis vectors.
enum Canonical<'a> {
    Borrowed(&'a DMatrix<f64>),
    Owned(DMatrix<f64>),
}

impl Canonical<'_> {
    fn points(&self) -> &DMatrix<f64> {
        match self {
            Canonical::Borrowed(m) => m,
            Canonical::Owned(m) => m,
        }
    }
}

impl<'a> CurveInput<'a> {
    /// Validate the shape rules and build the canonical matrix.
    fn canonicalize(self) -> Result<Canonical<'a>, SimplifyError> {
        match self {
            CurveInput::Axes(axes) => {
                let first = axes.first().ok_or(SimplifyError::NoAxes)?;
                let n = first.len();
                for (axis, coords) in axes.iter().enumerate().skip(1) {
                    if coords.len() != n {
                        return Err(SimplifyError::AxisLengthMismatch {
                            axis,
                            expected: n,
                            found: coords.len(),
                        });
                    }
                }
                Ok(Canonical::Owned(DMatrix::from_fn(n, axes.len(), |r, c| {
                    axes[c][r]
                })))
            }
            CurveInput::Matrix(points) => {
                if points.ncols() == 0 {
                    return Err(SimplifyError::NoAxes);
                }
                Ok(Canonical::Borrowed(points))
            }
        }
    }
}

fn validate_epsilon(epsilon: f64) -> Result<(), SimplifyError> {
    // Written with `!(.. >= ..)` so NaN is rejected too.
    if !(epsilon >= 0.0) {
        return Err(SimplifyError::NegativeEpsilon { epsilon });
    }
    Ok(())
}

/// Validate `input`, canonicalize it, and run the simplification engine.
///
/// All public entry points funnel through here, so the validation order is
/// identical for every call shape.
pub fn retained_indices(input: CurveInput<'_>, epsilon: f64) -> Result<Vec<usize>, SimplifyError> {
    let canonical = input.canonicalize()?;
    validate_epsilon(epsilon)?;
    Ok(rdp::retain_indices(canonical.points(), epsilon))
}

/// Retained indices for a 2D curve sampled at `(x[i], y[i])`.
pub fn index_xy(x: &[f64], y: &[f64], epsilon: f64) -> Result<Vec<usize>, SimplifyError> {
    retained_indices(CurveInput::Axes(&[x, y]), epsilon)
}

/// Retained indices for a 3D curve sampled at `(x[i], y[i], z[i])`.
pub fn index_xyz(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    epsilon: f64,
) -> Result<Vec<usize>, SimplifyError> {
    retained_indices(CurveInput::Axes(&[x, y, z]), epsilon)
}

/// Retained indices for a curve given as an N×D point matrix (one point per
/// row, D ≥ 1).
pub fn index_matrix(points: &DMatrix<f64>, epsilon: f64) -> Result<Vec<usize>, SimplifyError> {
    retained_indices(CurveInput::Matrix(points), epsilon)
}

fn gather(axis: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| axis[i]).collect()
}

/// Simplify a 2D curve, returning the retained coordinates per axis.
pub fn simplify_xy(
    x: &[f64],
    y: &[f64],
    epsilon: f64,
) -> Result<(Vec<f64>, Vec<f64>), SimplifyError> {
    let indices = index_xy(x, y, epsilon)?;
    Ok((gather(x, &indices), gather(y, &indices)))
}

/// Simplify a 3D curve, returning the retained coordinates per axis.
#[allow(clippy::type_complexity)]
pub fn simplify_xyz(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    epsilon: f64,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), SimplifyError> {
    let indices = index_xyz(x, y, z, epsilon)?;
    Ok((gather(x, &indices), gather(y, &indices), gather(z, &indices)))
}

/// Simplify a curve given as an N×D point matrix, returning the reduced
/// matrix of retained rows.
pub fn simplify_matrix(points: &DMatrix<f64>, epsilon: f64) -> Result<DMatrix<f64>, SimplifyError> {
    let indices = index_matrix(points, epsilon)?;
    Ok(points.select_rows(indices.iter()))
}
