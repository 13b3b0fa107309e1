//! Cross-cutting properties of the full pipeline (validation → engine →
//! projection), exercised through the public entry points.

use nalgebra::DMatrix;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{index_matrix, index_xy, retain_indices, simplify_xy, simplify_xyz};

fn curve_2d(max_len: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 1..max_len)
}

fn to_axes(points: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    points.iter().copied().unzip()
}

proptest! {
    #[test]
    fn endpoints_always_kept(points in curve_2d(60), epsilon in 0.0..10.0f64) {
        let (x, y) = to_axes(&points);
        let kept = index_xy(&x, &y, epsilon).unwrap();
        prop_assert_eq!(*kept.first().unwrap(), 0);
        prop_assert_eq!(*kept.last().unwrap(), points.len() - 1);
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn larger_tolerance_keeps_a_subset(
        points in curve_2d(60),
        eps_a in 0.0..5.0f64,
        eps_b in 0.0..5.0f64,
    ) {
        let (lo, hi) = if eps_a <= eps_b { (eps_a, eps_b) } else { (eps_b, eps_a) };
        let (x, y) = to_axes(&points);
        let loose = index_xy(&x, &y, hi).unwrap();
        let tight = index_xy(&x, &y, lo).unwrap();
        // The split index never depends on epsilon, so raising it can only
        // collapse more segments.
        prop_assert!(loose.iter().all(|i| tight.contains(i)));
    }

    #[test]
    fn repeated_calls_are_bitwise_identical(points in curve_2d(40), epsilon in 0.0..2.0f64) {
        let (x, y) = to_axes(&points);
        let first = simplify_xy(&x, &y, epsilon).unwrap();
        let second = simplify_xy(&x, &y, epsilon).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn small_curves_are_identity(points in curve_2d(3), epsilon in 0.0..10.0f64) {
        // 1 or 2 points: nothing to simplify at any tolerance.
        let (x, y) = to_axes(&points);
        let (xs, ys) = simplify_xy(&x, &y, epsilon).unwrap();
        prop_assert_eq!(xs, x);
        prop_assert_eq!(ys, y);
    }
}

#[test]
fn random_points_on_a_3d_line_collapse_to_endpoints() {
    let mut rng = StdRng::seed_from_u64(17);
    let n = 10;
    let mut x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..10.0)).collect();
    x.sort_by(|p, q| p.total_cmp(q));
    let (a, b) = (rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
    let (c, d) = (rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
    let y: Vec<f64> = x.iter().map(|&v| a * v + b).collect();
    let z: Vec<f64> = x.iter().map(|&v| c * v + d).collect();

    let (xs, ys, zs) = simplify_xyz(&x, &y, &z, 0.1).unwrap();
    assert_eq!(xs, vec![x[0], x[n - 1]]);
    assert_eq!(ys, vec![y[0], y[n - 1]]);
    assert_eq!(zs, vec![z[0], z[n - 1]]);
}

#[test]
fn epsilon_zero_keeps_random_curves_whole() {
    let mut rng = StdRng::seed_from_u64(99);
    let n = 10;
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let y: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let z: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let (xs, ys, zs) = simplify_xyz(&x, &y, &z, 0.0).unwrap();
    assert_eq!(xs, x);
    assert_eq!(ys, y);
    assert_eq!(zs, z);
}

#[test]
fn varying_only_the_last_axis_reduces_like_the_planar_case() {
    // Constant x/y, z marching along a line: the curve is a straight line in
    // 3-space, so only the endpoints survive, same as its 2D projection.
    let n = 6;
    let line = DMatrix::from_fn(n, 3, |r, c| match c {
        0 => 1.0,
        1 => 2.0,
        _ => r as f64,
    });
    assert_eq!(index_matrix(&line, 0.5).unwrap(), vec![0, n - 1]);
}

#[test]
fn engine_accepts_higher_dimensions() {
    // 5D: a bent path where only point 2 deviates from the chord.
    let mut points = DMatrix::zeros(5, 5);
    for r in 0..5 {
        for c in 0..5 {
            points[(r, c)] = r as f64;
        }
    }
    points[(2, 4)] += 3.0;
    assert_eq!(retain_indices(&points, 1.5), vec![0, 2, 4]);
}

#[test]
fn dense_damped_cosine_reduces_sharply() {
    // The original package's README example: 10k samples of
    // exp(-x)·cos(2πx) on [0, 5] shrink to a handful of points.
    let n = 10_000;
    let x: Vec<f64> = (0..n).map(|i| 5.0 * i as f64 / (n - 1) as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&v| (-v).exp() * (2.0 * std::f64::consts::PI * v).cos())
        .collect();
    let kept = index_xy(&x, &y, 0.06).unwrap();
    assert!(kept.len() < 50, "kept {} of {} points", kept.len(), n);
    assert_eq!(*kept.first().unwrap(), 0);
    assert_eq!(*kept.last().unwrap(), n - 1);
}
