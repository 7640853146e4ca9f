//! Input events delivered to the canvas by the platform layer.

use crate::tracker::{CancelScope, ContactId};
use kurbo::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{Touch, TouchPhase};

/// Phase of a recognized long-press gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongPressPhase {
    Began,
    Changed,
    Ended,
}

/// One callback's worth of input.
///
/// Contact variants carry every contact that changed in the same platform
/// callback; they are applied together before a single redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ContactsBegan(Vec<(ContactId, Point)>),
    ContactsMoved(Vec<(ContactId, Point)>),
    ContactsEnded(Vec<(ContactId, Point)>),
    ContactsCancelled(CancelScope),
    /// Already disambiguated from single taps by the gesture layer.
    DoubleTap(Point),
    SingleTap(Point),
    LongPress { phase: LongPressPhase, point: Point },
}

impl InputEvent {
    /// Convert a winit touch into a single-contact event.
    pub fn from_touch(touch: &Touch) -> Self {
        Self::from_touch_parts(touch.phase, touch.id, touch.location)
    }

    /// Same as [`InputEvent::from_touch`], from the touch's raw fields.
    pub fn from_touch_parts(phase: TouchPhase, id: u64, location: PhysicalPosition<f64>) -> Self {
        let contact = vec![(ContactId(id), Point::new(location.x, location.y))];
        match phase {
            TouchPhase::Started => Self::ContactsBegan(contact),
            TouchPhase::Moved => Self::ContactsMoved(contact),
            TouchPhase::Ended => Self::ContactsEnded(contact),
            TouchPhase::Cancelled => Self::ContactsCancelled(CancelScope::Contacts(vec![ContactId(id)])),
        }
    }

    /// Whether this event comes from raw contacts rather than a gesture.
    pub fn is_contact(&self) -> bool {
        matches!(
            self,
            Self::ContactsBegan(_)
                | Self::ContactsMoved(_)
                | Self::ContactsEnded(_)
                | Self::ContactsCancelled(_)
        )
    }
}
