//! Curve simplification with the Ramer–Douglas–Peucker algorithm in D
//! dimensions.
//!
//! A sampled curve is an ordered sequence of points; simplification discards
//! the points that lie within a tolerance `epsilon` of the chord through
//! their neighbors while always keeping both endpoints. The crate exposes
//! two families of entry points over two call shapes:
//!
//! - `index_*` return the retained indices into the original curve;
//! - `simplify_*` gather the retained coordinates back into the caller's
//!   shape (per-axis vectors or a reduced point matrix).
//!
//! Layering: [`geometry`] (point-to-chord distance) ← [`rdp`] (index
//! selection over the canonical N×D matrix) ← [`curve`] (call-shape
//! validation and projection). Callers with exotic shapes can drop down to
//! [`rdp::retain_indices`] directly once they hold a `DMatrix`.
//!
//! Every call is synchronous, allocates only its own worklist and result,
//! and never mutates its inputs.

pub mod curve;
pub mod geometry;
pub mod rdp;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use curve::{
    index_matrix, index_xy, index_xyz, retained_indices, simplify_matrix, simplify_xy,
    simplify_xyz, CurveInput, SimplifyError,
};
pub use geometry::{perpendicular_distance, perpendicular_distance_sq};
pub use rdp::retain_indices;

#[cfg(test)]
mod tests;
