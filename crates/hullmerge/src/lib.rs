//! Divide-and-conquer convex hulls in the plane.
//!
//! Layout
//! - `geom`: point type, slope/orientation predicates, polygon edges.
//! - `hull`: normalizer, tangent finder, merger and the recursive driver.
//! - `observe`: optional side channel for visualization and logging.
//! - `rand`: seeded point clouds for tests, benches and the CLI.
//!
//! Hull convention
//! - A hull is a `Vec<Point>` listed clockwise, starting at the
//!   lexicographically smallest point (leftmost, lowest on ties). Seen from
//!   that anchor the remaining points appear in decreasing slope order.
//! - Hulls are strict: collinear boundary points are dropped.

mod cfg;
pub mod error;
pub mod geom;
pub mod hull;
pub mod observe;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, Result};
pub use geom::{lex_cmp, orient, polygon_edges, slope, turn, Point, Segment};
pub use hull::{
    compute_hull, compute_hull_with, convex_hull, divide_points_in_half, find_lower_tangent,
    find_upper_tangent, merge_two_hulls, sort_hull, HullCfg, Tangent, TangentKind,
};
pub use observe::{HullEvent, HullObserver, NoopObserver, Paced, Recorder, TracingObserver};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{polygon_edges, Point, Segment};
    pub use crate::hull::{compute_hull, compute_hull_with, convex_hull, HullCfg};
    pub use crate::observe::{HullObserver, NoopObserver, Recorder, TracingObserver};
    pub use crate::rand::{draw_points, PointCloud, ReplayToken};
    pub use crate::{HullError, Result};
}
