//! Configuration and result types for the hull engine.
//!
//! - `HullCfg`: orientation tolerance and input checks.
//! - `Tangent`, `TangentKind`: bridge between two hulls found during a merge.

use crate::cfg::ORIENT_EPS;
use crate::geom::{Point, Segment};

/// Hull engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Triples with `|orient(a, b, c)| <= eps_orient * |b - a| * |c - a|`
    /// count as collinear. Relative, so independent of coordinate scale.
    pub eps_orient: f64,
    /// Reject input that is not sorted by x.
    pub check_sorted: bool,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_orient: ORIENT_EPS,
            check_sorted: true,
        }
    }
}

/// Which side of the merged hull a tangent bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TangentKind {
    Upper,
    Lower,
}

/// Tangent line from a point of the left hull to a point of the right hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tangent {
    pub kind: TangentKind,
    pub left: Point,
    pub right: Point,
}

impl Tangent {
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.left, self.right)
    }
}
