//! Observer side channel for visualization and logging.
//!
//! The hull engine reports each tangent and each merged hull, plus progress
//! text at the start and end of a run. Observers never influence the
//! result; `NoopObserver` and any other observer yield identical hulls.

use std::time::Duration;

use crate::geom::Point;
use crate::hull::{Tangent, TangentKind};

/// Fire-and-forget hooks. All methods default to no-ops.
pub trait HullObserver {
    fn on_tangent_found(&mut self, _tangent: Tangent) {}
    fn on_hull_merged(&mut self, _hull: &[Point]) {}
    fn on_progress(&mut self, _message: &str) {}
}

impl<O: HullObserver + ?Sized> HullObserver for &mut O {
    fn on_tangent_found(&mut self, tangent: Tangent) {
        (**self).on_tangent_found(tangent)
    }
    fn on_hull_merged(&mut self, hull: &[Point]) {
        (**self).on_hull_merged(hull)
    }
    fn on_progress(&mut self, message: &str) {
        (**self).on_progress(message)
    }
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl HullObserver for NoopObserver {}

/// Emits `tracing` events: tangents and merges at debug, progress at info.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl HullObserver for TracingObserver {
    fn on_tangent_found(&mut self, t: Tangent) {
        tracing::debug!(
            kind = ?t.kind,
            left_x = t.left.x,
            left_y = t.left.y,
            right_x = t.right.x,
            right_y = t.right.y,
            "tangent"
        );
    }
    fn on_hull_merged(&mut self, hull: &[Point]) {
        tracing::debug!(points = hull.len(), "hull_merged");
    }
    fn on_progress(&mut self, message: &str) {
        tracing::info!(detail = message, "progress");
    }
}

/// One recorded observer call.
#[derive(Clone, Debug, PartialEq)]
pub enum HullEvent {
    TangentFound(Tangent),
    HullMerged(Vec<Point>),
    Progress(String),
}

/// Collects every event in call order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<HullEvent>,
}

impl Recorder {
    /// Recorded tangents in discovery order.
    pub fn tangents(&self) -> impl Iterator<Item = &Tangent> + '_ {
        self.events.iter().filter_map(|e| match e {
            HullEvent::TangentFound(t) => Some(t),
            _ => None,
        })
    }
    /// Recorded tangents of one kind.
    pub fn tangents_of(&self, kind: TangentKind) -> impl Iterator<Item = &Tangent> + '_ {
        self.tangents().filter(move |t| t.kind == kind)
    }
    /// Intermediate hulls, innermost merges first.
    pub fn merged_hulls(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.events.iter().filter_map(|e| match e {
            HullEvent::HullMerged(h) => Some(h.as_slice()),
            _ => None,
        })
    }
}

impl HullObserver for Recorder {
    fn on_tangent_found(&mut self, tangent: Tangent) {
        self.events.push(HullEvent::TangentFound(tangent));
    }
    fn on_hull_merged(&mut self, hull: &[Point]) {
        self.events.push(HullEvent::HullMerged(hull.to_vec()));
    }
    fn on_progress(&mut self, message: &str) {
        self.events.push(HullEvent::Progress(message.to_string()));
    }
}

/// Forwards to `inner` and sleeps `delay` after each tangent and merge,
/// for step-by-step animation. Progress messages are not delayed.
#[derive(Clone, Debug)]
pub struct Paced<O> {
    pub inner: O,
    pub delay: Duration,
}

impl<O> Paced<O> {
    pub fn new(inner: O, delay: Duration) -> Self {
        Self { inner, delay }
    }
    fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl<O: HullObserver> HullObserver for Paced<O> {
    fn on_tangent_found(&mut self, tangent: Tangent) {
        self.inner.on_tangent_found(tangent);
        self.pause();
    }
    fn on_hull_merged(&mut self, hull: &[Point]) {
        self.inner.on_hull_merged(hull);
        self.pause();
    }
    fn on_progress(&mut self, message: &str) {
        self.inner.on_progress(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn recorder_filters_by_kind() {
        let mut rec = Recorder::default();
        let t = |kind| Tangent {
            kind,
            left: point![0.0, 0.0],
            right: point![1.0, 0.0],
        };
        rec.on_tangent_found(t(TangentKind::Upper));
        rec.on_progress("halfway");
        rec.on_tangent_found(t(TangentKind::Lower));
        assert_eq!(rec.tangents().count(), 2);
        assert_eq!(rec.tangents_of(TangentKind::Lower).count(), 1);
        assert_eq!(rec.events[1], HullEvent::Progress("halfway".into()));
    }

    #[test]
    fn paced_forwards_through_a_borrow() {
        let mut rec = Recorder::default();
        {
            let mut paced = Paced::new(&mut rec, Duration::from_millis(0));
            paced.on_hull_merged(&[point![0.0, 0.0], point![1.0, 1.0]]);
            paced.on_progress("done");
        }
        assert_eq!(rec.merged_hulls().count(), 1);
        assert_eq!(rec.events.len(), 2);
    }
}
