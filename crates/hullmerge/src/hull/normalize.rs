use crate::error::{HullError, Result};
use crate::geom::{lex_cmp, slope, Point};

/// Put the points of a convex hull into canonical order.
///
/// The anchor is the lexicographically smallest point; the rest follow by
/// decreasing slope from the anchor (clockwise). Equal slopes, which only
/// occur for collinear input, fall back to distance from the anchor.
///
/// Pre: distinct points in convex position. The input is consumed.
pub fn sort_hull(mut points: Vec<Point>) -> Result<Vec<Point>> {
    if points.is_empty() {
        return Err(HullError::InvalidArgument(
            "cannot normalize an empty hull".into(),
        ));
    }
    let anchor_idx = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| lex_cmp(a, b))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let anchor = points.swap_remove(anchor_idx);

    let mut keyed = Vec::with_capacity(points.len());
    for p in points {
        keyed.push((slope(&anchor, &p)?, p));
    }
    keyed.sort_by(|(sa, a), (sb, b)| sb.total_cmp(sa).then_with(|| lex_cmp(a, b)));

    let mut out = Vec::with_capacity(keyed.len() + 1);
    out.push(anchor);
    out.extend(keyed.into_iter().map(|(_, p)| p));
    Ok(out)
}
