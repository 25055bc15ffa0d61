//! Upper and lower tangents between two x-separated hulls.
//!
//! Walk
//! - Start at the seeds (rightmost point of the left hull, leftmost point of
//!   the right hull). Advance the right endpoint as long as the next point
//!   improves the tangent, then do the same for the left endpoint; repeat
//!   until the left side no longer moves.
//! - Upper: right endpoint steps clockwise, left endpoint counter-clockwise,
//!   and a candidate improves the line when it lies strictly left of
//!   `left → right` (the slope rises on the right, falls on the left).
//! - Lower: directions and the side test are mirrored.
//!
//! Tie policy
//! - A triple counts as collinear when the sine of its turn angle is at most
//!   `eps_orient` (see [`turn`]). A collinear candidate
//!   wins only if it is farther from the opposite endpoint, so tangents end
//!   at extreme points and every replacement strictly improves the line.
//! - A step budget bounds the walk; running out means the input was not in
//!   convex position and fails with `DegenerateGeometry`.

use crate::cfg::{STEP_FACTOR, STEP_SLACK};
use crate::error::{HullError, Result};
use std::cmp::Ordering;

use crate::geom::{turn, Point};

use super::types::{HullCfg, Tangent, TangentKind};

/// Upper tangent of two canonical hulls, seeded at the hulls' facing points.
pub fn find_upper_tangent(
    left: &[Point],
    right: &[Point],
    seed_left: Point,
    seed_right: Point,
    cfg: &HullCfg,
) -> Result<Tangent> {
    find_tangent_points(TangentKind::Upper, left, right, seed_left, seed_right, cfg)
}

/// Lower tangent; mirror image of [`find_upper_tangent`].
pub fn find_lower_tangent(
    left: &[Point],
    right: &[Point],
    seed_left: Point,
    seed_right: Point,
    cfg: &HullCfg,
) -> Result<Tangent> {
    find_tangent_points(TangentKind::Lower, left, right, seed_left, seed_right, cfg)
}

fn find_tangent_points(
    kind: TangentKind,
    left: &[Point],
    right: &[Point],
    seed_left: Point,
    seed_right: Point,
    cfg: &HullCfg,
) -> Result<Tangent> {
    let il = index_of(left, &seed_left, "left")?;
    let ir = index_of(right, &seed_right, "right")?;
    let (l, r) = find_tangent(kind, left, right, il, ir, cfg)?;
    Ok(Tangent {
        kind,
        left: left[l],
        right: right[r],
    })
}

/// Position of `p` in `hull`, by value.
pub(crate) fn index_of(hull: &[Point], p: &Point, side: &str) -> Result<usize> {
    hull.iter().position(|q| q == p).ok_or_else(|| {
        HullError::InvalidArgument(format!(
            "seed ({}, {}) is not a point of the {side} hull",
            p.x, p.y
        ))
    })
}

/// Index form of the tangent walk. Returns `(left_index, right_index)`.
pub(crate) fn find_tangent(
    kind: TangentKind,
    left: &[Point],
    right: &[Point],
    seed_left: usize,
    seed_right: usize,
    cfg: &HullCfg,
) -> Result<(usize, usize)> {
    if left.is_empty() || right.is_empty() {
        return Err(HullError::InvalidArgument(
            "tangent search needs two non-empty hulls".into(),
        ));
    }
    if seed_left >= left.len() || seed_right >= right.len() {
        return Err(HullError::InvalidArgument(
            "tangent seed index out of range".into(),
        ));
    }
    let walk = Walk {
        kind,
        left,
        right,
        eps: cfg.eps_orient,
    };
    let budget = STEP_FACTOR * (left.len() + right.len()) + STEP_SLACK;
    let mut steps = 0usize;
    let (mut l, mut r) = (seed_left, seed_right);
    loop {
        loop {
            let cand = walk.next_right(r);
            if cand == r || !walk.right_improves(l, r, cand) {
                break;
            }
            r = cand;
            steps += 1;
            walk.check_budget(steps, budget)?;
        }
        let mut left_moved = false;
        loop {
            let cand = walk.next_left(l);
            if cand == l || !walk.left_improves(l, r, cand) {
                break;
            }
            l = cand;
            left_moved = true;
            steps += 1;
            walk.check_budget(steps, budget)?;
        }
        // The right side was already stuck against the old left endpoint.
        if !left_moved {
            return Ok((l, r));
        }
    }
}

struct Walk<'a> {
    kind: TangentKind,
    left: &'a [Point],
    right: &'a [Point],
    eps: f64,
}

impl Walk<'_> {
    #[inline]
    fn next_right(&self, r: usize) -> usize {
        match self.kind {
            TangentKind::Upper => cw(r, self.right.len()),
            TangentKind::Lower => ccw(r, self.right.len()),
        }
    }
    #[inline]
    fn next_left(&self, l: usize) -> usize {
        match self.kind {
            TangentKind::Upper => ccw(l, self.left.len()),
            TangentKind::Lower => cw(l, self.left.len()),
        }
    }
    /// Turn of `left → right → cand` that puts `cand` on the outer side.
    #[inline]
    fn outer(&self) -> Ordering {
        match self.kind {
            TangentKind::Upper => Ordering::Greater,
            TangentKind::Lower => Ordering::Less,
        }
    }
    fn right_improves(&self, l: usize, r: usize, cand: usize) -> bool {
        let (pl, pr, pc) = (&self.left[l], &self.right[r], &self.right[cand]);
        let t = turn(pl, pr, pc, self.eps);
        t == self.outer() || (t == Ordering::Equal && farther(pl, pr, pc))
    }
    fn left_improves(&self, l: usize, r: usize, cand: usize) -> bool {
        let (pl, pr, pc) = (&self.left[l], &self.right[r], &self.left[cand]);
        // Same orientation as `pl → pr → pc`, band measured at `pr`.
        let t = turn(pr, pc, pl, self.eps);
        t == self.outer() || (t == Ordering::Equal && farther(pr, pl, pc))
    }
    fn check_budget(&self, steps: usize, budget: usize) -> Result<()> {
        if steps > budget {
            return Err(HullError::DegenerateGeometry(format!(
                "{:?} tangent walk exceeded {budget} steps; hulls not in convex position",
                self.kind
            )));
        }
        Ok(())
    }
}

/// `cand` lies past `end` on the ray from `origin` through `end`.
#[inline]
fn farther(origin: &Point, end: &Point, cand: &Point) -> bool {
    let d = end - origin;
    (cand - origin).dot(&d) > d.norm_squared()
}

#[inline]
fn cw(i: usize, n: usize) -> usize {
    (i + 1) % n
}

#[inline]
fn ccw(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    fn square_halves() -> (Vec<Point>, Vec<Point>) {
        (
            vec![point![0.0, 0.0], point![0.0, 1.0]],
            vec![point![1.0, 0.0], point![1.0, 1.0]],
        )
    }

    #[test]
    fn square_halves_tangents() {
        let (l, r) = square_halves();
        let cfg = HullCfg::default();
        let up = find_upper_tangent(&l, &r, l[1], r[0], &cfg).unwrap();
        assert_eq!((up.left, up.right), (point![0.0, 1.0], point![1.0, 1.0]));
        let lo = find_lower_tangent(&l, &r, l[1], r[0], &cfg).unwrap();
        assert_eq!((lo.left, lo.right), (point![0.0, 0.0], point![1.0, 0.0]));
        assert_eq!(lo.kind, TangentKind::Lower);
    }

    #[test]
    fn tangents_skip_hidden_vertices() {
        // Left: triangle with a low apex on the right; right: tall triangle.
        let left = vec![point![0.0, 0.0], point![0.0, 4.0], point![2.0, 1.0]];
        let right = vec![point![3.0, 2.0], point![5.0, 6.0], point![5.0, -3.0]];
        let cfg = HullCfg::default();
        let up = find_upper_tangent(&left, &right, left[2], right[0], &cfg).unwrap();
        assert_eq!((up.left, up.right), (point![0.0, 4.0], point![5.0, 6.0]));
        let lo = find_lower_tangent(&left, &right, left[2], right[0], &cfg).unwrap();
        assert_eq!((lo.left, lo.right), (point![0.0, 0.0], point![5.0, -3.0]));
    }

    #[test]
    fn collinear_tangent_reaches_extremes() {
        let left = vec![point![0.0, 0.0], point![1.0, 0.0]];
        let right = vec![point![2.0, 0.0], point![3.0, 0.0]];
        let cfg = HullCfg::default();
        for t in [
            find_upper_tangent(&left, &right, left[1], right[0], &cfg).unwrap(),
            find_lower_tangent(&left, &right, left[1], right[0], &cfg).unwrap(),
        ] {
            assert_eq!((t.left, t.right), (point![0.0, 0.0], point![3.0, 0.0]));
        }
    }

    #[test]
    fn shared_x_at_the_split() {
        let left = vec![point![0.0, 0.0], point![1.0, 0.0]];
        let right = vec![point![1.0, 5.0], point![2.0, 0.0]];
        let cfg = HullCfg::default();
        let up = find_upper_tangent(&left, &right, left[1], right[0], &cfg).unwrap();
        assert_eq!((up.left, up.right), (point![0.0, 0.0], point![1.0, 5.0]));
        let lo = find_lower_tangent(&left, &right, left[1], right[0], &cfg).unwrap();
        assert_eq!((lo.left, lo.right), (point![0.0, 0.0], point![2.0, 0.0]));
    }

    #[test]
    fn right_list_wound_around_the_left_point_runs_out_of_steps() {
        // Each next "clockwise" point turns further counter-clockwise around
        // the left point, so the upper walk never settles.
        let left = vec![point![0.0, 0.0]];
        let right = vec![
            point![1.0, 0.0],
            point![0.0, 1.0],
            point![-1.0, 0.0],
            point![0.0, -1.0],
        ];
        let err = find_upper_tangent(&left, &right, left[0], right[0], &HullCfg::default());
        assert!(matches!(err, Err(HullError::DegenerateGeometry(_))));
    }

    #[test]
    fn loose_tolerance_treats_shallow_bends_as_collinear() {
        let left = vec![point![0.0, 0.0], point![1.0, 0.0]];
        let right = vec![point![2.0, 0.001], point![3.0, 0.0]];
        let up = find_upper_tangent(&left, &right, left[1], right[0], &HullCfg::default()).unwrap();
        assert_eq!((up.left, up.right), (point![0.0, 0.0], point![2.0, 0.001]));

        let loose = HullCfg {
            eps_orient: 0.01,
            ..HullCfg::default()
        };
        let up = find_upper_tangent(&left, &right, left[1], right[0], &loose).unwrap();
        assert_eq!((up.left, up.right), (point![0.0, 0.0], point![3.0, 0.0]));
    }

    #[test]
    fn tiny_coordinates_keep_real_turns() {
        let s = 1e-7;
        let left = vec![point![0.0, 0.0], point![0.0, s]];
        let right = vec![point![s, 0.0], point![s, s]];
        let cfg = HullCfg::default();
        let up = find_upper_tangent(&left, &right, left[1], right[0], &cfg).unwrap();
        assert_eq!((up.left, up.right), (point![0.0, s], point![s, s]));
        let lo = find_lower_tangent(&left, &right, left[1], right[0], &cfg).unwrap();
        assert_eq!((lo.left, lo.right), (point![0.0, 0.0], point![s, 0.0]));
    }

    #[test]
    fn missing_seed_is_invalid() {
        let (l, r) = square_halves();
        let err = find_upper_tangent(&l, &r, point![9.0, 9.0], r[0], &HullCfg::default());
        assert!(matches!(err, Err(HullError::InvalidArgument(_))));
        let err = find_lower_tangent(&[], &r, l[0], r[0], &HullCfg::default());
        assert!(matches!(err, Err(HullError::InvalidArgument(_))));
    }
}
