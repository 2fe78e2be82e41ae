use std::time::Duration;

use crate::animation::TimingFunction;

use crate::text::AttributedText;
use crate::widgets::style::ButtonStyle;
use crate::widgets::state_layer::PressStyle;
use crate::widgets::{Color, Font, Insets, Rect};

pub const DEFAULT_TEXT: &str = "Button";
pub const DEFAULT_INSETS: Insets = Insets::all(15.0);
pub const DEFAULT_FRAME: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 288.0,
    height: 50.0,
};

/// Initial configuration for a [`RoundedButton`](super::RoundedButton).
///
/// Values are sanitized when the button is built, the same way the
/// button's setters sanitize them.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    pub text: String,
    /// Takes precedence over `text` when set
    pub attributed_text: Option<AttributedText>,
    pub frame: Rect,
    pub content_insets: Insets,
    pub style: ButtonStyle,
    pub press: PressStyle,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            attributed_text: None,
            frame: DEFAULT_FRAME,
            content_insets: DEFAULT_INSETS,
            style: ButtonStyle::default(),
            press: PressStyle::default(),
        }
    }
}

impl ButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attributed_text(mut self, text: AttributedText) -> Self {
        self.attributed_text = Some(text);
        self
    }

    pub fn frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    pub fn content_insets(mut self, insets: impl Into<Insets>) -> Self {
        self.content_insets = insets.into();
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.style.background_color = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.style.corner_radius = radius;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.style.text_color = color;
        self
    }

    pub fn text_font(mut self, font: Font) -> Self {
        self.style.text_font = font;
        self
    }

    pub fn text_point_size(mut self, size: f32) -> Self {
        self.style.text_point_size = size;
        self
    }

    /// Blur the backdrop with the given intensity
    pub fn translucent(mut self, blur_intensity: f32) -> Self {
        self.style.is_translucent = true;
        self.style.blur_intensity = blur_intensity;
        self
    }

    pub fn tapped_tint_color(mut self, color: Color) -> Self {
        self.press.tapped_tint_color = Some(color);
        self
    }

    pub fn tapped_tint_color_brightness_offset(mut self, offset: f32) -> Self {
        self.press.tapped_tint_color_brightness_offset = offset;
        self
    }

    pub fn tapped_text_alpha(mut self, alpha: f32) -> Self {
        self.press.tapped_text_alpha = alpha;
        self
    }

    pub fn tapped_button_scale(mut self, scale: f32) -> Self {
        self.press.tapped_button_scale = scale;
        self
    }

    pub fn tap_animation_duration(mut self, duration: Duration) -> Self {
        self.press.tap_animation_duration = duration;
        self
    }

    pub fn tap_animation_timing(mut self, timing: TimingFunction) -> Self {
        self.press.tap_animation_timing = timing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ButtonConfig::default();
        assert_eq!(config.text, "Button");
        assert!(config.attributed_text.is_none());
        assert_eq!(config.frame, Rect::new(0.0, 0.0, 288.0, 50.0));
        assert_eq!(config.content_insets, Insets::all(15.0));
        assert_eq!(config.style.corner_radius, 10.0);
        assert_eq!(config.press.tapped_button_scale, 0.97);
        assert_eq!(config.press.tap_animation_duration, Duration::from_millis(400));
    }

    #[test]
    fn test_builder_chain() {
        let config = ButtonConfig::new()
            .text("Go")
            .corner_radius(4.0)
            .content_insets([8.0, 12.0])
            .translucent(0.4)
            .tapped_tint_color(Color::BLACK);
        assert_eq!(config.text, "Go");
        assert_eq!(config.style.corner_radius, 4.0);
        assert_eq!(config.content_insets, Insets::symmetric(12.0, 8.0));
        assert!(config.style.is_translucent);
        assert_eq!(config.style.blur_intensity, 0.4);
        assert_eq!(config.press.tapped_tint_color, Some(Color::BLACK));
    }
}
