use std::cmp::Ordering;
use std::time::Instant;

use crate::error::{HullError, Result};
use crate::geom::{lex_cmp, turn, Point};
use crate::observe::{HullObserver, NoopObserver};

use super::merge::merge_two_hulls;
use super::normalize::sort_hull;
use super::types::HullCfg;

/// Convex hull of points sorted by increasing x, default configuration.
///
/// Inputs of size 0 or 1 come back unchanged. The result is in clockwise
/// hull order, not x order, so feeding it back in needs [`convex_hull`].
pub fn compute_hull(points: &[Point]) -> Result<Vec<Point>> {
    compute_hull_with(points, &HullCfg::default(), &mut NoopObserver)
}

/// Convex hull of x-sorted points, reporting progress to `observer`.
///
/// Exact duplicates are dropped and equal-x runs are ordered by y before
/// the recursion; both keep the x-sorted contract intact.
pub fn compute_hull_with(
    points: &[Point],
    cfg: &HullCfg,
    observer: &mut dyn HullObserver,
) -> Result<Vec<Point>> {
    if points.len() <= 1 {
        return Ok(points.to_vec());
    }
    if cfg.check_sorted {
        if let Some(k) = points.windows(2).position(|w| w[1].x < w[0].x) {
            return Err(HullError::InvalidArgument(format!(
                "input not sorted by x at index {}",
                k + 1
            )));
        }
    }
    let start = Instant::now();
    observer.on_progress(&format!("computing hull of {} points", points.len()));

    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    let hull = solve(pts, cfg, observer)?;

    observer.on_progress(&format!(
        "hull has {} points, elapsed {:.3} ms",
        hull.len(),
        start.elapsed().as_secs_f64() * 1e3
    ));
    Ok(hull)
}

/// Convex hull of points in any order: sorts by x, then [`compute_hull`].
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>> {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    compute_hull(&pts)
}

/// Split at the midpoint; the lower half keeps the first `len / 2` points.
pub fn divide_points_in_half(mut points: Vec<Point>) -> (Vec<Point>, Vec<Point>) {
    let upper = points.split_off(points.len() / 2);
    (points, upper)
}

fn solve(points: Vec<Point>, cfg: &HullCfg, observer: &mut dyn HullObserver) -> Result<Vec<Point>> {
    match points.len() {
        0..=2 => Ok(points),
        3 => triangle(points, cfg),
        _ => {
            let (lower, upper) = divide_points_in_half(points);
            let left = solve(lower, cfg, observer)?;
            let right = solve(upper, cfg, observer)?;
            merge_two_hulls(left, right, cfg, observer)
        }
    }
}

/// Three lexicographically sorted points. Collinear triples keep the ends.
fn triangle(points: Vec<Point>, cfg: &HullCfg) -> Result<Vec<Point>> {
    let (a, b, c) = (points[0], points[1], points[2]);
    if turn(&a, &b, &c, cfg.eps_orient) == Ordering::Equal {
        return Ok(vec![a, c]);
    }
    sort_hull(points)
}
