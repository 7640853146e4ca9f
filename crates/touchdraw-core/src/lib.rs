//! TouchDraw Core Library
//!
//! Multi-touch line tracking, hit-testing and selection for a freehand
//! line-drawing surface. Rendering and gesture recognition live in the host;
//! the canvas reports to it through [`DrawSurface`].

pub mod canvas;
pub mod input;
pub mod line;
pub mod render;
pub mod selection;
pub mod style;
pub mod tracker;

pub use canvas::Canvas;
pub use input::{InputEvent, LongPressPhase};
pub use line::{distance_from_point_to_segment, Line, HIT_RADIUS};
pub use render::{DrawSurface, LineState, StrokeCommand};
pub use selection::{delete_anchor, Selection, DELETE_ANCHOR_SIZE};
pub use style::{SerializableColor, StyleConfig, StyleError, StyleResult, DEFAULT_STROKE_WIDTH};
pub use tracker::{CancelScope, ContactId, TouchTracker};
