//! Divide-and-conquer hull engine.
//!
//! Pipeline
//! - `driver`: validates x-sorted input, splits at the midpoint down to
//!   base cases of 2 or 3 points, merges bottom-up.
//! - `merge`: captures seeds, normalizes both hulls, finds the two tangents
//!   and stitches the boundaries.
//! - `tangent`: alternating walk for the upper and lower tangent.
//! - `normalize`: canonical clockwise order from the leftmost point.
//!
//! Each recursive call owns its sublist and returns a fresh hull; nothing is
//! shared between sibling calls.

mod driver;
mod merge;
mod normalize;
mod tangent;
mod types;

pub use driver::{compute_hull, compute_hull_with, convex_hull, divide_points_in_half};
pub use merge::merge_two_hulls;
pub use normalize::sort_hull;
pub use tangent::{find_lower_tangent, find_upper_tangent};
pub use types::{HullCfg, Tangent, TangentKind};
