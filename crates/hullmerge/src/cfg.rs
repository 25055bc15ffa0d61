//! Tolerance defaults for hull construction (internal).
//!
//! Policy
//! - Defaults are fixed constants; `HullCfg` exposes the orientation
//!   tolerance for callers that work at unusual coordinate scales.

/// Triples whose turn angle has a sine at or below this count as collinear.
pub(crate) const ORIENT_EPS: f64 = 1e-12;
/// Tangent walks may replace endpoints at most `STEP_FACTOR * (|L| + |R|) + STEP_SLACK` times.
pub(crate) const STEP_FACTOR: usize = 4;
pub(crate) const STEP_SLACK: usize = 8;
