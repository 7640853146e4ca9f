//! Line segment value type and proximity hit-testing.

use kurbo::{BezPath, Line as KurboLine, Point, Rect};
use serde::{Deserialize, Serialize};

/// Distance (in drawing units) below which a point counts as touching a line.
pub const HIT_RADIUS: f64 = 20.0;

/// Parametric step between hit-test samples.
const SAMPLE_STEP: f64 = 0.05;

/// Number of samples taken along a segment: `t = 0.0, 0.05, .., 0.95`.
const SAMPLE_COUNT: usize = 20;

/// A straight stroke from `begin` to `end`.
///
/// Lines are plain values: every assignment copies, and two lines with the
/// same endpoints are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Where the contact first touched down.
    pub begin: Point,
    /// Latest (or final) contact position.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    /// A zero-length line at `point`, as created when a contact begins.
    pub fn at(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.begin.distance(self.end)
    }

    /// Axis-aligned bounds of the two endpoints.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.begin, self.end)
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.begin, self.end)
    }

    /// Path suitable for stroking.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.begin);
        path.line_to(self.end);
        path
    }

    /// Whether `point` lies within [`HIT_RADIUS`] of this line.
    pub fn is_near(&self, point: Point) -> bool {
        distance_from_point_to_segment(point, self) < HIT_RADIUS
    }
}

impl From<Line> for KurboLine {
    fn from(line: Line) -> Self {
        line.as_kurbo()
    }
}

/// Approximate distance from `point` to `line`.
///
/// The segment is sampled at `t = 0.0, 0.05, .., 0.95` and the smallest
/// distance to a sample wins. `t = 1.0` is never sampled, so points just past
/// `end` can read slightly farther than they really are.
pub fn distance_from_point_to_segment(point: Point, line: &Line) -> f64 {
    (0..SAMPLE_COUNT)
        .map(|i| {
            let t = i as f64 * SAMPLE_STEP;
            point.distance(line.begin.lerp(line.end, t))
        })
        .fold(f64::INFINITY, f64::min)
}
