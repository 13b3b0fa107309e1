//! Point-to-chord distance in D dimensions.
//!
//! Purpose
//! - Leaf geometry for the simplification engine: how far a point deviates
//!   from the infinite line through two chord endpoints.
//! - Generic over nalgebra row-vector storage so matrix rows (zero-copy
//!   views) and owned row vectors share one implementation.
//!
//! Why this formula
//! - The 2D cross-product and 3D cross-norm variants do not generalize past
//!   their dimension. Projecting `AP` onto `AB` and measuring the residual
//!   works for any D ≥ 1 and needs a single pass over the coordinates with
//!   no allocation.

use nalgebra::{Dim, Matrix, Storage, U1};

/// Squared perpendicular distance from `p` to the line through `a` and `b`.
///
/// Pre: all three rows have the same number of columns (debug-asserted).
/// Post: returns `|AP|² − (AP·AB)²/|AB|²`, clamped at 0 against rounding.
/// If `a == b` exactly (`AB·AB == 0`), falls back to `|AP|²`, the squared
/// distance to the degenerate chord's single point.
pub fn perpendicular_distance_sq<C, SP, SA, SB>(
    p: &Matrix<f64, U1, C, SP>,
    a: &Matrix<f64, U1, C, SA>,
    b: &Matrix<f64, U1, C, SB>,
) -> f64
where
    C: Dim,
    SP: Storage<f64, U1, C>,
    SA: Storage<f64, U1, C>,
    SB: Storage<f64, U1, C>,
{
    debug_assert_eq!(p.ncols(), a.ncols());
    debug_assert_eq!(p.ncols(), b.ncols());

    let mut ab_ab = 0.0;
    let mut ap_ab = 0.0;
    let mut ap_ap = 0.0;
    for j in 0..p.ncols() {
        let ab = b[(0, j)] - a[(0, j)];
        let ap = p[(0, j)] - a[(0, j)];
        ab_ab += ab * ab;
        ap_ab += ap * ab;
        ap_ap += ap * ap;
    }

    if ab_ab == 0.0 {
        return ap_ap;
    }
    let t = ap_ab / ab_ab;
    (ap_ap - t * ap_ab).max(0.0)
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
#[inline]
pub fn perpendicular_distance<C, SP, SA, SB>(
    p: &Matrix<f64, U1, C, SP>,
    a: &Matrix<f64, U1, C, SA>,
    b: &Matrix<f64, U1, C, SB>,
) -> f64
where
    C: Dim,
    SP: Storage<f64, U1, C>,
    SA: Storage<f64, U1, C>,
    SB: Storage<f64, U1, C>,
{
    perpendicular_distance_sq(p, a, b).sqrt()
}
