//! Pressed-state overrides and the visuals the press cross-fade runs between.

use std::time::Duration;

use crate::animation::{Animatable, TimingFunction, Transition};

use super::style::ButtonStyle;
use super::widget::Color;

pub const DEFAULT_TAPPED_TEXT_ALPHA: f32 = 0.5;
pub const DEFAULT_BRIGHTNESS_OFFSET: f32 = -0.1;
pub const DEFAULT_TAPPED_SCALE: f32 = 0.97;
pub const DEFAULT_TAP_DURATION: Duration = Duration::from_millis(400);

/// How the pressed background is derived from the rest background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackgroundOverride {
    /// Use an explicit color
    Exact(Color),
    /// Shift the rest tint's HSB brightness by this amount
    BrightnessOffset(f32),
}

/// Resolve a background override to an actual color.
pub fn resolve_background(base: Color, override_: &BackgroundOverride) -> Color {
    match override_ {
        BackgroundOverride::Exact(color) => *color,
        BackgroundOverride::BrightnessOffset(offset) => base.with_brightness_offset(*offset),
    }
}

/// Everything that changes while the button is held.
#[derive(Clone, Debug, PartialEq)]
pub struct PressStyle {
    /// Explicit pressed tint. While set, the brightness offset is kept but
    /// not used.
    pub tapped_tint_color: Option<Color>,
    pub tapped_tint_color_brightness_offset: f32,
    pub tapped_text_alpha: f32,
    pub tapped_button_scale: f32,
    pub tap_animation_duration: Duration,
    /// Curve used in both directions
    pub tap_animation_timing: TimingFunction,
}

impl PressStyle {
    pub fn background_override(&self) -> BackgroundOverride {
        match self.tapped_tint_color {
            Some(color) => BackgroundOverride::Exact(color),
            None => BackgroundOverride::BrightnessOffset(self.tapped_tint_color_brightness_offset),
        }
    }

    /// The cross-fade transition for the current duration and curve
    pub fn transition(&self) -> Transition {
        Transition::new(self.tap_animation_duration, self.tap_animation_timing.clone())
    }
}

impl Default for PressStyle {
    fn default() -> Self {
        Self {
            tapped_tint_color: None,
            tapped_tint_color_brightness_offset: DEFAULT_BRIGHTNESS_OFFSET,
            tapped_text_alpha: DEFAULT_TAPPED_TEXT_ALPHA,
            tapped_button_scale: DEFAULT_TAPPED_SCALE,
            tap_animation_duration: DEFAULT_TAP_DURATION,
            tap_animation_timing: TimingFunction::default(),
        }
    }
}

/// A point on the press cross-fade
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressVisuals {
    pub background: Color,
    pub content_alpha: f32,
    pub content_scale: f32,
}

impl PressVisuals {
    pub fn rest(style: &ButtonStyle) -> Self {
        Self {
            background: style.background_color,
            content_alpha: 1.0,
            content_scale: 1.0,
        }
    }

    pub fn pressed(style: &ButtonStyle, press: &PressStyle) -> Self {
        Self {
            background: resolve_background(style.background_color, &press.background_override()),
            content_alpha: press.tapped_text_alpha,
            content_scale: press.tapped_button_scale,
        }
    }

    /// Visuals at `progress` between rest (0) and pressed (1). Both ends are
    /// rebuilt from the current styles, so style edits show up mid-animation.
    pub fn at(style: &ButtonStyle, press: &PressStyle, progress: f32) -> Self {
        if progress <= 0.0 {
            return Self::rest(style);
        }
        let pressed = Self::pressed(style, press);
        if progress >= 1.0 {
            return pressed;
        }
        Self::lerp(&Self::rest(style), &pressed, progress)
    }
}

impl Animatable for PressVisuals {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            background: Color::lerp(&from.background, &to.background, t),
            content_alpha: f32::lerp(&from.content_alpha, &to.content_alpha, t),
            content_scale: f32::lerp(&from.content_scale, &to.content_scale, t),
        }
    }
}
