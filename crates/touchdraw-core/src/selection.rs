//! Single-line selection driven by tap and long-press gestures.
//!
//! Gestures arrive already classified (double-tap has already suppressed the
//! matching single-tap by the time anything reaches this module). Selection is
//! an index into the tracker's finished lines and is cleared before any change
//! that could invalidate it.

use crate::input::LongPressPhase;
use crate::line::Line;
use crate::render::DrawSurface;
use crate::tracker::TouchTracker;
use kurbo::{Point, Rect};

/// Side length of the rect the delete action is anchored to.
pub const DELETE_ANCHOR_SIZE: f64 = 2.0;

/// Rect the delete action is anchored to for a tap at `point`.
pub fn delete_anchor(point: Point) -> Rect {
    Rect::from_origin_size(point, (DELETE_ANCHOR_SIZE, DELETE_ANCHOR_SIZE))
}

/// Currently selected finished line, if any.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected line in the tracker's finished lines.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Drop the selection and hide the delete action.
    pub fn clear(&mut self, surface: &mut impl DrawSurface) {
        if let Some(index) = self.selected.take() {
            log::debug!("Deselected line {}", index);
        }
        surface.hide_delete_action();
    }

    /// Replace the selection; `None` clears it (hiding the delete action).
    fn set(&mut self, index: Option<usize>, surface: &mut impl DrawSurface) {
        match index {
            Some(index) => {
                log::debug!("Selected line {}", index);
                self.selected = Some(index);
            }
            None => self.clear(surface),
        }
    }

    /// Select the first line near `point` and offer to delete it.
    pub fn tap(
        &mut self,
        point: Point,
        tracker: &TouchTracker,
        surface: &mut impl DrawSurface,
    ) -> Option<usize> {
        let hit = tracker.index_of_line_at_point(point);
        if hit.is_none() {
            log::trace!("Tap at ({}, {}) hit no line", point.x, point.y);
        }
        self.set(hit, surface);
        if hit.is_some() {
            surface.show_delete_action(delete_anchor(point));
        }
        hit
    }

    /// Select on press, deselect on release. A press that lands on a line also
    /// abandons any strokes in progress.
    pub fn long_press(
        &mut self,
        phase: LongPressPhase,
        point: Point,
        tracker: &mut TouchTracker,
        surface: &mut impl DrawSurface,
    ) {
        match phase {
            LongPressPhase::Began => {
                let hit = tracker.index_of_line_at_point(point);
                self.set(hit, surface);
                if hit.is_some() {
                    tracker.clear_active();
                }
            }
            // Dragging a selected line is not supported.
            LongPressPhase::Changed => {}
            LongPressPhase::Ended => self.clear(surface),
        }
    }

    /// Clear the selection and every line.
    pub fn reset(&mut self, tracker: &mut TouchTracker, surface: &mut impl DrawSurface) {
        self.clear(surface);
        tracker.clear();
        log::debug!("Cleared all lines");
    }

    /// Remove the selected line, if any, and clear the selection.
    pub fn delete_selected(
        &mut self,
        tracker: &mut TouchTracker,
        surface: &mut impl DrawSurface,
    ) -> Option<Line> {
        let Some(index) = self.selected else {
            log::trace!("Delete requested with nothing selected");
            return None;
        };
        let removed = tracker.remove_finished(index);
        self.clear(surface);
        if removed.is_some() {
            log::debug!("Deleted line {}", index);
        }
        removed
    }
}
