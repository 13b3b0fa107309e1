//! Ramer–Douglas–Peucker index selection.
//!
//! Purpose
//! - Given a validated N×D curve and a tolerance, decide which point indices
//!   survive simplification. Pure index selection; gathering coordinates at
//!   the result is the adaptation layer's job.
//!
//! Why a worklist
//! - The textbook formulation recurses on both halves of every split. Nearly
//!   collinear input with a tight tolerance drives that recursion N deep, so
//!   the split is restated as an explicit LIFO stack of segments. Pushing the
//!   right half before the left keeps the output sorted without a final sort.

use nalgebra::DMatrix;

use crate::geometry::perpendicular_distance_sq;

/// Indices of the points kept by RDP simplification of `points` (rows) with
/// tolerance `epsilon`.
///
/// Pre: `epsilon >= 0` — validated at the adaptation boundary, only
/// debug-asserted here.
/// Post: strictly increasing indices, containing `0` and `N−1` whenever
/// `N >= 1`; all of `0..N` when `N <= 2`.
///
/// Interior points survive exactly when their perpendicular distance to the
/// enclosing chord is strictly greater than `epsilon`; with `epsilon == 0`
/// only exactly collinear points collapse. Ties in the farthest-point scan
/// break toward the smallest index, making the result deterministic.
///
/// Non-finite coordinates are not rejected: a NaN coordinate makes the
/// distance NaN, which loses the strict `>` race, so NaN interior points are
/// dropped; ±∞ wins it and is kept.
pub fn retain_indices(points: &DMatrix<f64>, epsilon: f64) -> Vec<usize> {
    debug_assert!(epsilon >= 0.0, "epsilon must be validated upstream");

    let n = points.nrows();
    if n <= 2 {
        return (0..n).collect();
    }

    // The engine compares squared distances, so square the tolerance once.
    let eps_sq = epsilon * epsilon;

    let mut keep = Vec::with_capacity(n);
    keep.push(0);
    let mut worklist = vec![(0usize, n - 1)];
    while let Some((first, last)) = worklist.pop() {
        let (max_sq, split) = farthest_from_chord(points, first, last);
        if max_sq > eps_sq {
            worklist.push((split, last));
            worklist.push((first, split));
        } else {
            // `first` was appended when the segment to the left collapsed
            // (or is the seeded 0), so only `last` is new here.
            keep.push(last);
        }
    }
    keep
}

/// Interior point of `(first, last)` farthest from the chord through the
/// segment's endpoints, as `(squared_distance, index)`.
///
/// Returns `(0.0, first)` when the segment has no interior. The ascending
/// scan with a strict `>` keeps the smallest index on exact ties.
fn farthest_from_chord(points: &DMatrix<f64>, first: usize, last: usize) -> (f64, usize) {
    let a = points.row(first);
    let b = points.row(last);
    let mut max_sq = 0.0;
    let mut split = first;
    for i in first + 1..last {
        let d_sq = perpendicular_distance_sq(&points.row(i), &a, &b);
        if d_sq > max_sq {
            max_sq = d_sq;
            split = i;
        }
    }
    (max_sq, split)
}
