use crate::transform::Transform;
use crate::widgets::Color;

use super::InteractionState;

/// How the background should be painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Solid(Color),
    /// A blurred backdrop of `blur_intensity` in `[0, 1]`, tinted with `tint`
    Translucent { tint: Color, blur_intensity: f32 },
}

impl Background {
    pub fn tint(&self) -> Color {
        match self {
            Background::Solid(color) => *color,
            Background::Translucent { tint, .. } => *tint,
        }
    }

    pub fn is_translucent(&self) -> bool {
        matches!(self, Background::Translucent { .. })
    }
}

/// Snapshot of everything a renderer needs to draw the button this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub background: Background,
    /// Already clamped to half the shorter side of the frame
    pub corner_radius: f32,
    pub content_alpha: f32,
    pub content_scale: f32,
    /// Scale about the button center, in the button's coordinate space
    pub content_transform: Transform,
    pub text_color: Color,
    pub state: InteractionState,
}
