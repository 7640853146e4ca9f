//! Per-contact stroke tracking.
//!
//! Every physical contact owns one in-progress [`Line`], keyed by its
//! [`ContactId`]. Ending a contact freezes its line into the finished list;
//! cancelling it discards the line.

use crate::line::Line;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque identity of one physical contact, stable from begin to end/cancel.
///
/// Wraps the platform touch id (winit reports these as `u64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactId(pub u64);

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Which contacts a cancellation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelScope {
    /// The platform cancelled every active contact.
    All,
    /// Only the listed contacts were cancelled.
    Contacts(Vec<ContactId>),
}

/// Tracks in-progress and finished strokes.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    /// Lines being drawn, one per active contact.
    active: HashMap<ContactId, Line>,
    /// Completed lines in the order they were finished.
    finished: Vec<Line>,
}

impl TouchTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a line for every contact in the batch.
    ///
    /// A contact that is already active has its line replaced.
    /// Returns the number of contacts started.
    pub fn begin(&mut self, contacts: &[(ContactId, Point)]) -> usize {
        for &(id, point) in contacts {
            if self.active.insert(id, Line::at(point)).is_some() {
                log::trace!("Contact {:?} began while active, restarting its line", id);
            }
        }
        contacts.len()
    }

    /// Move the end of each known contact's line. Unknown contacts are skipped.
    ///
    /// Returns the number of contacts that were active.
    pub fn moved(&mut self, contacts: &[(ContactId, Point)]) -> usize {
        let mut applied = 0;
        for &(id, point) in contacts {
            match self.active.get_mut(&id) {
                Some(line) => {
                    line.end = point;
                    applied += 1;
                }
                None => log::trace!("Ignoring move for inactive contact {:?}", id),
            }
        }
        applied
    }

    /// Finish each known contact's line at `point` and move it to the
    /// finished list. Unknown contacts are skipped.
    ///
    /// Returns the number of lines finished.
    pub fn end(&mut self, contacts: &[(ContactId, Point)]) -> usize {
        let mut applied = 0;
        for &(id, point) in contacts {
            match self.active.remove(&id) {
                Some(mut line) => {
                    line.end = point;
                    self.finished.push(line);
                    applied += 1;
                }
                None => log::trace!("Ignoring end for inactive contact {:?}", id),
            }
        }
        applied
    }

    /// Drop active lines without finishing them.
    ///
    /// Returns the number of lines discarded.
    pub fn cancel(&mut self, scope: &CancelScope) -> usize {
        match scope {
            CancelScope::All => {
                let count = self.active.len();
                self.active.clear();
                count
            }
            CancelScope::Contacts(ids) => ids
                .iter()
                .filter(|&&id| self.active.remove(&id).is_some())
                .count(),
        }
    }

    /// Drop every active line (finished lines are kept).
    pub fn clear_active(&mut self) {
        self.active.clear();
    }

    /// Drop all active and finished lines.
    pub fn clear(&mut self) {
        self.active.clear();
        self.finished.clear();
    }

    /// Remove a finished line, keeping the order of the rest.
    pub fn remove_finished(&mut self, index: usize) -> Option<Line> {
        (index < self.finished.len()).then(|| self.finished.remove(index))
    }

    /// Lines currently being drawn.
    pub fn active_lines(&self) -> impl Iterator<Item = (&ContactId, &Line)> {
        self.active.iter()
    }

    /// The in-progress line for a contact.
    pub fn active_line(&self, id: ContactId) -> Option<&Line> {
        self.active.get(&id)
    }

    pub fn is_active(&self, id: ContactId) -> bool {
        self.active.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Completed lines in insertion order.
    pub fn finished_lines(&self) -> &[Line] {
        &self.finished
    }

    /// Index of the first finished line near `point`.
    pub fn index_of_line_at_point(&self, point: Point) -> Option<usize> {
        self.finished.iter().position(|line| line.is_near(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ContactId = ContactId(1);
    const B: ContactId = ContactId(2);

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_begin_move_end() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(0.0, 0.0))]);
        tracker.moved(&[(A, p(10.0, 0.0))]);
        tracker.end(&[(A, p(10.0, 0.0))]);

        assert_eq!(tracker.finished_lines(), &[Line::new(p(0.0, 0.0), p(10.0, 0.0))]);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_begin_then_end_at_same_point() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(4.0, 4.0))]);
        assert_eq!(tracker.end(&[(A, p(4.0, 4.0))]), 1);

        assert_eq!(tracker.finished_lines(), &[Line::at(p(4.0, 4.0))]);
        assert!(!tracker.is_active(A));
    }

    #[test]
    fn test_move_only_updates_end() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(1.0, 2.0))]);
        tracker.moved(&[(A, p(5.0, 5.0))]);
        tracker.moved(&[(A, p(7.0, 9.0))]);

        let line = tracker.active_line(A).unwrap();
        assert_eq!(line.begin, p(1.0, 2.0));
        assert_eq!(line.end, p(7.0, 9.0));
    }

    #[test]
    fn test_unknown_contact_is_ignored() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(0.0, 0.0))]);
        tracker.end(&[(A, p(3.0, 0.0))]);
        let finished_before = tracker.finished_lines().to_vec();

        assert_eq!(tracker.moved(&[(B, p(9.0, 9.0))]), 0);
        assert_eq!(tracker.end(&[(B, p(9.0, 9.0))]), 0);

        assert_eq!(tracker.finished_lines(), finished_before.as_slice());
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_begin_twice_replaces_line() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(0.0, 0.0))]);
        tracker.moved(&[(A, p(20.0, 0.0))]);
        tracker.begin(&[(A, p(50.0, 50.0))]);

        assert_eq!(tracker.active_count(), 1);
        assert_eq!(tracker.active_line(A), Some(&Line::at(p(50.0, 50.0))));
    }

    #[test]
    fn test_cancel_leaves_no_trace() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(0.0, 0.0))]);
        tracker.moved(&[(A, p(30.0, 30.0))]);
        assert_eq!(tracker.cancel(&CancelScope::Contacts(vec![A])), 1);

        assert!(tracker.finished_lines().is_empty());
        assert!(!tracker.is_active(A));
    }

    #[test]
    fn test_cancel_subset_keeps_others() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(0.0, 0.0)), (B, p(5.0, 5.0))]);
        tracker.cancel(&CancelScope::Contacts(vec![A, ContactId(99)]));

        assert!(!tracker.is_active(A));
        assert!(tracker.is_active(B));
    }

    #[test]
    fn test_cancel_all() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(0.0, 0.0)), (B, p(5.0, 5.0))]);
        assert_eq!(tracker.cancel(&CancelScope::All), 2);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_simultaneous_contacts_order_independent() {
        let mut forward = TouchTracker::new();
        forward.begin(&[(A, p(0.0, 0.0)), (B, p(5.0, 5.0))]);
        let mut reverse = TouchTracker::new();
        reverse.begin(&[(B, p(5.0, 5.0)), (A, p(0.0, 0.0))]);

        assert_eq!(forward.active_count(), 2);
        for id in [A, B] {
            assert_eq!(forward.active_line(id), reverse.active_line(id));
        }
    }

    #[test]
    fn test_index_of_line_at_point() {
        let mut tracker = TouchTracker::new();
        assert_eq!(tracker.index_of_line_at_point(p(0.0, 0.0)), None);

        tracker.begin(&[(A, p(0.0, 0.0))]);
        tracker.end(&[(A, p(100.0, 0.0))]);
        assert_eq!(tracker.index_of_line_at_point(p(50.0, 5.0)), Some(0));
        assert_eq!(tracker.index_of_line_at_point(p(50.0, 25.0)), None);
    }

    #[test]
    fn test_index_prefers_earliest_line() {
        let mut tracker = TouchTracker::new();
        tracker.begin(&[(A, p(0.0, 10.0))]);
        tracker.end(&[(A, p(100.0, 10.0))]);
        tracker.begin(&[(B, p(0.0, 0.0))]);
        tracker.end(&[(B, p(100.0, 0.0))]);

        // Closer to the second line, but the first is also in range.
        assert_eq!(tracker.index_of_line_at_point(p(50.0, 1.0)), Some(0));
        assert_eq!(tracker.index_of_line_at_point(p(50.0, -15.0)), Some(1));
    }

    #[test]
    fn test_remove_finished_preserves_order() {
        let mut tracker = TouchTracker::new();
        for (i, x) in [0.0, 10.0, 20.0].into_iter().enumerate() {
            let id = ContactId(i as u64);
            tracker.begin(&[(id, p(x, 0.0))]);
            tracker.end(&[(id, p(x, 5.0))]);
        }

        assert_eq!(tracker.remove_finished(1), Some(Line::new(p(10.0, 0.0), p(10.0, 5.0))));
        assert_eq!(tracker.remove_finished(5), None);
        let xs: Vec<f64> = tracker.finished_lines().iter().map(|l| l.begin.x).collect();
        assert_eq!(xs, vec![0.0, 20.0]);
    }
}
