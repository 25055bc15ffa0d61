use crate::error::{HullError, Result};
use crate::geom::{lex_cmp, Point};
use crate::observe::HullObserver;

use super::normalize::sort_hull;
use super::tangent::{find_tangent, index_of};
use super::types::{HullCfg, Tangent, TangentKind};

/// Merge two x-separated hulls into one canonical hull.
///
/// Pre: every point of `left` is lexicographically smaller than every point
/// of `right` (x-separated, ties on x ordered by y).
/// Post: clockwise hull from the overall leftmost point; points cut off by
/// the tangents are gone.
pub fn merge_two_hulls(
    left: Vec<Point>,
    right: Vec<Point>,
    cfg: &HullCfg,
    observer: &mut dyn HullObserver,
) -> Result<Vec<Point>> {
    if left.is_empty() || right.is_empty() {
        return Err(HullError::InvalidArgument(
            "cannot merge an empty hull".into(),
        ));
    }
    // Seeds by value; normalization reorders both lists.
    let seed_left = extreme(&left, true);
    let seed_right = extreme(&right, false);

    let left = sort_hull(left)?;
    let right = sort_hull(right)?;
    let il = index_of(&left, &seed_left, "left")?;
    let ir = index_of(&right, &seed_right, "right")?;

    let (ul, ur) = find_tangent(TangentKind::Upper, &left, &right, il, ir, cfg)?;
    observer.on_tangent_found(Tangent {
        kind: TangentKind::Upper,
        left: left[ul],
        right: right[ur],
    });
    let (ll, lr) = find_tangent(TangentKind::Lower, &left, &right, il, ir, cfg)?;
    observer.on_tangent_found(Tangent {
        kind: TangentKind::Lower,
        left: left[ll],
        right: right[lr],
    });

    let merged = stitch(&left, &right, (ul, ur), (ll, lr));
    observer.on_hull_merged(&merged);
    Ok(merged)
}

/// Lexicographic max (`max = true`) or min of a non-empty list.
fn extreme(points: &[Point], max: bool) -> Point {
    let it = points.iter().copied();
    let pick = if max {
        it.max_by(|a, b| lex_cmp(a, b))
    } else {
        it.min_by(|a, b| lex_cmp(a, b))
    };
    pick.unwrap_or(points[0])
}

/// Walk left `0..=ul`, jump to right `ur..=lr` clockwise, jump back to left
/// at `ll` and run clockwise until the anchor.
fn stitch(
    left: &[Point],
    right: &[Point],
    (ul, ur): (usize, usize),
    (ll, lr): (usize, usize),
) -> Vec<Point> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend_from_slice(&left[..=ul]);

    let mut j = ur;
    loop {
        out.push(right[j]);
        if j == lr {
            break;
        }
        j = (j + 1) % right.len();
    }

    // ll == 0 closes at the anchor; ll == ul was already emitted.
    if ll != 0 {
        let from = if ll == ul { ll + 1 } else { ll };
        if from < left.len() {
            out.extend_from_slice(&left[from..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::{HullEvent, NoopObserver, Recorder};
    use nalgebra::point;

    #[test]
    fn square_from_two_edges() {
        let left = vec![point![0.0, 1.0], point![0.0, 0.0]];
        let right = vec![point![1.0, 0.0], point![1.0, 1.0]];
        let h = merge_two_hulls(left, right, &HullCfg::default(), &mut NoopObserver).unwrap();
        assert_eq!(
            h,
            vec![
                point![0.0, 0.0],
                point![0.0, 1.0],
                point![1.0, 1.0],
                point![1.0, 0.0]
            ]
        );
    }

    #[test]
    fn interior_points_are_cut_off() {
        let left = vec![point![0.0, 0.0], point![0.0, 1.0]];
        let right = vec![point![0.5, 0.5], point![1.0, 1.0], point![1.0, 0.0]];
        let mut rec = Recorder::default();
        let h = merge_two_hulls(left, right, &HullCfg::default(), &mut rec).unwrap();
        assert_eq!(h.len(), 4);
        assert!(!h.contains(&point![0.5, 0.5]));
        assert_eq!(rec.tangents().count(), 2);
        assert!(matches!(rec.events.last(), Some(HullEvent::HullMerged(m)) if *m == h));
    }

    #[test]
    fn left_hull_with_lower_chain_is_kept() {
        // Left pentagon contributes both chains around its anchor.
        let left = vec![
            point![0.0, 0.0],
            point![1.0, 3.0],
            point![3.0, 2.0],
            point![3.0, -2.0],
            point![1.0, -3.0],
        ];
        let right = vec![point![4.0, 0.5], point![6.0, 0.0]];
        let h = merge_two_hulls(left, right, &HullCfg::default(), &mut NoopObserver).unwrap();
        assert_eq!(
            h,
            vec![
                point![0.0, 0.0],
                point![1.0, 3.0],
                point![3.0, 2.0],
                point![6.0, 0.0],
                point![3.0, -2.0],
                point![1.0, -3.0],
            ]
        );
    }

    #[test]
    fn collinear_halves_keep_only_extremes() {
        let left = vec![point![0.0, 0.0], point![1.0, 0.0]];
        let right = vec![point![2.0, 0.0], point![3.0, 0.0]];
        let h = merge_two_hulls(left, right, &HullCfg::default(), &mut NoopObserver).unwrap();
        assert_eq!(h, vec![point![0.0, 0.0], point![3.0, 0.0]]);
    }

    #[test]
    fn empty_side_is_rejected() {
        let err = merge_two_hulls(
            Vec::new(),
            vec![point![1.0, 0.0]],
            &HullCfg::default(),
            &mut NoopObserver,
        );
        assert!(matches!(err, Err(HullError::InvalidArgument(_))));
    }
}
