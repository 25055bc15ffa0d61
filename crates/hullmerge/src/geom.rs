//! Geometry primitives: points, slopes, orientation and polygon edges.
//!
//! Vertical policy
//! - `slope` never divides by zero: equal x gives a signed infinity
//!   (`+∞` upwards, `−∞` downwards) and identical points are rejected.
//! - Slope comparisons inside the hull engine go through `orient`, which
//!   agrees with the slope order whenever both slopes are finite and stays
//!   well defined for vertical pairs.
//! - `turn` classifies a triple with a collinearity band relative to the
//!   lengths involved, so the same tolerance works at every coordinate scale.

use std::cmp::Ordering;

use nalgebra::{Matrix2, Point2};

use crate::error::{HullError, Result};

/// A point in the plane. Equality is by coordinate value.
pub type Point = Point2<f64>;

/// Directed boundary segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

/// Slope of the line through `a` and `b`.
///
/// Pre: `a != b`.
/// Post: `(b.y - a.y) / (b.x - a.x)` for distinct x; `±∞` for vertical pairs.
pub fn slope(a: &Point, b: &Point) -> Result<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx != 0.0 {
        return Ok(dy / dx);
    }
    if dy > 0.0 {
        Ok(f64::INFINITY)
    } else if dy < 0.0 {
        Ok(f64::NEG_INFINITY)
    } else {
        Err(HullError::DegenerateGeometry(format!(
            "slope between identical points ({}, {})",
            a.x, a.y
        )))
    }
}

/// Twice the signed area of triangle `(a, b, c)`.
/// Positive for a counter-clockwise turn `a → b → c`, negative for clockwise.
#[inline]
pub fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
    // determinant of [b-a  c-a]
    Matrix2::from_columns(&[b - a, c - a]).determinant()
}

/// Turn direction of `a → b → c`, with a scale-relative collinearity band.
///
/// `Greater` is counter-clockwise, `Less` clockwise. `Equal` when
/// `|orient| <= eps * |b - a| * |c - a|`, i.e. the sine of the angle at `a`
/// is at most `eps`.
#[inline]
pub fn turn(a: &Point, b: &Point, c: &Point, eps: f64) -> Ordering {
    let o = orient(a, b, c);
    let tol = eps * (b - a).norm() * (c - a).norm();
    if o > tol {
        Ordering::Greater
    } else if o < -tol {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Total order by x, then y. NaN coordinates compare as equal.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Boundary segments of a hull, closing segment last.
pub fn polygon_edges(hull: &[Point]) -> Vec<Segment> {
    if hull.len() < 2 {
        return Vec::new();
    }
    let mut edges = Vec::with_capacity(hull.len());
    for k in 0..hull.len() {
        edges.push(Segment::new(hull[k], hull[(k + 1) % hull.len()]));
    }
    edges
}
