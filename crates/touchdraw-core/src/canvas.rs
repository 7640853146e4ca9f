//! The drawing canvas: owns every line and routes input to it.

use crate::input::{InputEvent, LongPressPhase};
use crate::line::Line;
use crate::render::{DrawSurface, LineState, StrokeCommand};
use crate::selection::Selection;
use crate::style::{SerializableColor, StyleConfig, StyleResult};
use crate::tracker::{CancelScope, ContactId, TouchTracker};
use kurbo::Point;
use peniko::Color;

/// A freehand line-drawing surface.
///
/// Every operation mutates state synchronously and finishes with exactly one
/// [`DrawSurface::request_redraw`].
#[derive(Debug)]
pub struct Canvas<S: DrawSurface> {
    tracker: TouchTracker,
    selection: Selection,
    style: StyleConfig,
    surface: S,
}

impl<S: DrawSurface> Canvas<S> {
    /// Create an empty canvas drawing onto `surface`.
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, StyleConfig::default())
    }

    pub fn with_style(surface: S, style: StyleConfig) -> Self {
        Self {
            tracker: TouchTracker::new(),
            selection: Selection::new(),
            style,
            surface,
        }
    }

    /// Route one platform callback.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ContactsBegan(contacts) => self.contacts_began(&contacts),
            InputEvent::ContactsMoved(contacts) => self.contacts_moved(&contacts),
            InputEvent::ContactsEnded(contacts) => self.contacts_ended(&contacts),
            InputEvent::ContactsCancelled(scope) => self.contacts_cancelled(&scope),
            InputEvent::DoubleTap(point) => self.double_tap(point),
            InputEvent::SingleTap(point) => self.single_tap(point),
            InputEvent::LongPress { phase, point } => self.long_press(phase, point),
        }
    }

    pub fn contacts_began(&mut self, contacts: &[(ContactId, Point)]) {
        self.tracker.begin(contacts);
        self.surface.request_redraw();
    }

    pub fn contacts_moved(&mut self, contacts: &[(ContactId, Point)]) {
        self.tracker.moved(contacts);
        self.surface.request_redraw();
    }

    pub fn contacts_ended(&mut self, contacts: &[(ContactId, Point)]) {
        let finished = self.tracker.end(contacts);
        if finished > 0 {
            log::debug!(
                "Finished {} line(s), {} total",
                finished,
                self.tracker.finished_lines().len()
            );
        }
        self.surface.request_redraw();
    }

    pub fn contacts_cancelled(&mut self, scope: &CancelScope) {
        let dropped = self.tracker.cancel(scope);
        log::debug!("Cancelled {} contact(s)", dropped);
        self.surface.request_redraw();
    }

    /// Clear every line and the selection. The tap position is ignored.
    pub fn double_tap(&mut self, _point: Point) {
        self.selection.reset(&mut self.tracker, &mut self.surface);
        self.surface.request_redraw();
    }

    /// Select the line under `point` (or nothing).
    pub fn single_tap(&mut self, point: Point) {
        self.selection.tap(point, &self.tracker, &mut self.surface);
        self.surface.request_redraw();
    }

    pub fn long_press(&mut self, phase: LongPressPhase, point: Point) {
        self.selection
            .long_press(phase, point, &mut self.tracker, &mut self.surface);
        self.surface.request_redraw();
    }

    /// Delete the selected line, invoked from the delete action.
    pub fn delete_selected(&mut self) -> Option<Line> {
        let removed = self
            .selection
            .delete_selected(&mut self.tracker, &mut self.surface);
        self.surface.request_redraw();
        removed
    }

    // --- Style ---

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn set_style(&mut self, style: StyleConfig) -> StyleResult<()> {
        StyleConfig::validate_stroke_width(style.stroke_width)?;
        log::debug!("Style replaced");
        self.style = style;
        self.surface.request_redraw();
        Ok(())
    }

    pub fn set_finished_color(&mut self, color: impl Into<SerializableColor>) {
        self.style.finished_color = color.into();
        self.surface.request_redraw();
    }

    pub fn set_active_color(&mut self, color: impl Into<SerializableColor>) {
        self.style.active_color = color.into();
        self.surface.request_redraw();
    }

    pub fn set_selected_color(&mut self, color: impl Into<SerializableColor>) {
        self.style.selected_color = color.into();
        self.surface.request_redraw();
    }

    /// Set the stroke width. Non-positive or non-finite widths are rejected
    /// and leave the style unchanged.
    pub fn set_stroke_width(&mut self, width: f64) -> StyleResult<()> {
        self.style.stroke_width = StyleConfig::validate_stroke_width(width)?;
        log::debug!("Stroke width set to {}", width);
        self.surface.request_redraw();
        Ok(())
    }

    // --- Queries ---

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    pub fn finished_lines(&self) -> &[Line] {
        self.tracker.finished_lines()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    pub fn selected_line(&self) -> Option<&Line> {
        self.selected_index()
            .and_then(|index| self.tracker.finished_lines().get(index))
    }

    pub fn index_of_line_at_point(&self, point: Point) -> Option<usize> {
        self.tracker.index_of_line_at_point(point)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Strokes to paint, back to front: finished lines, then lines in
    /// progress, then the selected line again on top.
    pub fn stroke_commands(&self) -> Vec<StrokeCommand> {
        let width = self.style.stroke_width;
        let finished: Color = self.style.finished_color.into();
        let active: Color = self.style.active_color.into();

        let mut commands: Vec<StrokeCommand> = self
            .tracker
            .finished_lines()
            .iter()
            .map(|line| StrokeCommand::new(line, finished, width, LineState::Finished))
            .collect();
        commands.extend(
            self.tracker
                .active_lines()
                .map(|(_, line)| StrokeCommand::new(line, active, width, LineState::Active)),
        );
        if let Some(line) = self.selected_line() {
            commands.push(StrokeCommand::new(
                line,
                self.style.selected_color.into(),
                width,
                LineState::Selected,
            ));
        }
        commands
    }
}
