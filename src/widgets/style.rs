//! Rest-state appearance of a button and the clamping rules for style input.

use super::font::Font;
use super::widget::{Color, Insets};

pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;
pub const DEFAULT_BLUR_INTENSITY: f32 = 1.0;
pub const DEFAULT_FONT_SIZE: f32 = 19.0;

/// Clamp a style value into `[min, max]`. Non-finite input falls back to
/// `fallback`. Any correction is logged.
pub(crate) fn sanitize(name: &str, value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("{} must be finite, got {}; using {}", name, value, fallback);
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{} {} out of range, clamped to {}", name, value, clamped);
    }
    clamped
}

/// Keep every channel finite and within `[0, 1]`
pub(crate) fn sanitize_color(name: &str, color: Color) -> Color {
    let channel = |v: f32| sanitize(name, v, 0.0, 1.0, 0.0);
    Color::rgba(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    )
}

/// Negative or non-finite sides become zero
pub(crate) fn sanitize_insets(insets: Insets) -> Insets {
    let side = |name: &str, v: f32| sanitize(name, v, 0.0, f32::MAX, 0.0);
    Insets {
        top: side("top inset", insets.top),
        right: side("right inset", insets.right),
        bottom: side("bottom inset", insets.bottom),
        left: side("left inset", insets.left),
    }
}

pub(crate) fn sanitize_font(font: Font) -> Font {
    let size = sanitize("font size", font.size, 0.0, f32::MAX, DEFAULT_FONT_SIZE);
    font.with_size(size)
}

/// The button's unpressed appearance
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Background tint
    pub background_color: Color,
    /// Requested corner radius. The painted radius never exceeds half the
    /// shorter side; see [`ButtonStyle::corner_radius_for`].
    pub corner_radius: f32,
    /// Paint a blurred backdrop under the tint instead of a solid fill
    pub is_translucent: bool,
    /// Blur strength in `[0, 1]`, used only while translucent
    pub blur_intensity: f32,
    pub text_color: Color,
    pub text_font: Font,
    /// Replaces the font's point size when greater than zero
    pub text_point_size: f32,
}

impl ButtonStyle {
    /// The font text is measured and drawn with
    pub fn effective_font(&self) -> Font {
        if self.text_point_size > 0.0 {
            self.text_font.clone().with_size(self.text_point_size)
        } else {
            self.text_font.clone()
        }
    }

    /// Corner radius for a button of the given size
    pub fn corner_radius_for(&self, width: f32, height: f32) -> f32 {
        let max_radius = (width.min(height) / 2.0).max(0.0);
        self.corner_radius.min(max_radius)
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background_color: Color::SYSTEM_BLUE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            is_translucent: false,
            blur_intensity: DEFAULT_BLUR_INTENSITY,
            text_color: Color::WHITE,
            text_font: Font::default(),
            text_point_size: 0.0,
        }
    }
}
