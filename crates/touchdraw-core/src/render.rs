//! Boundary with the view that draws lines and presents the delete action.

use crate::line::Line;
use kurbo::{Line as KurboLine, Rect};
use peniko::Color;

/// Requests the canvas makes of the hosting view.
///
/// The view owns all drawing and menu presentation; the canvas only tells it
/// when something changed.
pub trait DrawSurface {
    /// Schedule a repaint. The view then draws [`crate::Canvas::stroke_commands`].
    fn request_redraw(&mut self);

    /// Show a contextual "Delete" action anchored at `anchor`.
    fn show_delete_action(&mut self, anchor: Rect);

    /// Hide the contextual action if it is showing.
    fn hide_delete_action(&mut self);
}

/// Which state a line is painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Finished,
    Active,
    Selected,
}

/// One stroke for the view to paint, in paint order.
#[derive(Debug, Clone, Copy)]
pub struct StrokeCommand {
    pub line: KurboLine,
    pub color: Color,
    pub width: f64,
    pub state: LineState,
}

impl StrokeCommand {
    pub fn new(line: &Line, color: Color, width: f64, state: LineState) -> Self {
        Self {
            line: line.as_kurbo(),
            color,
            width,
            state,
        }
    }
}

/// Outbound request recorded by [`RecordingSurface`].
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SurfaceRequest {
    Redraw,
    ShowDelete(Rect),
    HideDelete,
}

/// Surface that records every request, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub requests: Vec<SurfaceRequest>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn redraw_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| **r == SurfaceRequest::Redraw)
            .count()
    }

    pub fn last_menu_request(&self) -> Option<SurfaceRequest> {
        self.requests
            .iter()
            .rev()
            .find(|r| **r != SurfaceRequest::Redraw)
            .copied()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn request_redraw(&mut self) {
        self.requests.push(SurfaceRequest::Redraw);
    }

    fn show_delete_action(&mut self, anchor: Rect) {
        self.requests.push(SurfaceRequest::ShowDelete(anchor));
    }

    fn hide_delete_action(&mut self) {
        self.requests.push(SurfaceRequest::HideDelete);
    }
}
