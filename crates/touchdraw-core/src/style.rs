//! Stroke colors and thickness.

use kurbo::{Cap, Stroke};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default stroke width for all lines.
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;

/// Style configuration errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Invalid style JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Stroke width must be finite and positive, got {0}")]
    InvalidStrokeWidth(f64),
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub fn green() -> Self {
        Self::new(0, 255, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

fn default_finished_color() -> SerializableColor {
    SerializableColor::black()
}

fn default_active_color() -> SerializableColor {
    SerializableColor::red()
}

fn default_selected_color() -> SerializableColor {
    SerializableColor::green()
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

/// How lines are painted in each of their states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Color of completed lines.
    #[serde(default = "default_finished_color")]
    pub finished_color: SerializableColor,
    /// Color of lines still being drawn.
    #[serde(default = "default_active_color")]
    pub active_color: SerializableColor,
    /// Color of the selected line.
    #[serde(default = "default_selected_color")]
    pub selected_color: SerializableColor,
    /// Stroke width shared by every line.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            finished_color: default_finished_color(),
            active_color: default_active_color(),
            selected_color: default_selected_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl StyleConfig {
    /// Check that the stroke width can actually be drawn.
    pub fn validate_stroke_width(width: f64) -> StyleResult<f64> {
        if width.is_finite() && width > 0.0 {
            Ok(width)
        } else {
            Err(StyleError::InvalidStrokeWidth(width))
        }
    }

    /// Round-capped stroke at the configured width.
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width).with_caps(Cap::Round)
    }

    /// Serialize the style to JSON.
    pub fn to_json(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize and validate a style. Missing fields take their defaults.
    pub fn from_json(json: &str) -> StyleResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        Self::validate_stroke_width(style.stroke_width)?;
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.finished_color, SerializableColor::black());
        assert_eq!(style.active_color, SerializableColor::red());
        assert_eq!(style.selected_color, SerializableColor::green());
        assert!((style.stroke_width - DEFAULT_STROKE_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_color_conversion() {
        let color = SerializableColor::new(12, 34, 56, 200);
        let peniko_color: Color = color.into();
        assert_eq!(SerializableColor::from(peniko_color), color);
    }

    #[test]
    fn test_json_round_trip() {
        let style = StyleConfig {
            selected_color: SerializableColor::new(0, 0, 255, 255),
            stroke_width: 4.5,
            ..StyleConfig::default()
        };
        let json = style.to_json().unwrap();
        assert_eq!(StyleConfig::from_json(&json).unwrap(), style);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let style = StyleConfig::from_json(r#"{ "stroke_width": 3.0 }"#).unwrap();
        assert!((style.stroke_width - 3.0).abs() < f64::EPSILON);
        assert_eq!(style.finished_color, SerializableColor::black());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            StyleConfig::from_json("not json"),
            Err(StyleError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_stroke_width() {
        assert!(matches!(
            StyleConfig::from_json(r#"{ "stroke_width": -1.0 }"#),
            Err(StyleError::InvalidStrokeWidth(_))
        ));
        assert!(StyleConfig::validate_stroke_width(0.0).is_err());
        assert!(StyleConfig::validate_stroke_width(f64::NAN).is_err());
        assert!(StyleConfig::validate_stroke_width(2.0).is_ok());
    }

    #[test]
    fn test_stroke_has_round_caps() {
        let stroke = StyleConfig::default().stroke();
        assert!((stroke.width - DEFAULT_STROKE_WIDTH).abs() < f64::EPSILON);
        assert_eq!(stroke.start_cap, Cap::Round);
        assert_eq!(stroke.end_cap, Cap::Round);
    }
}
