use crate::layout::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Build a color from hue, saturation and brightness, all in `[0, 1]`.
    pub fn from_hsba(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let h = (hue.rem_euclid(1.0) * 6.0) % 6.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = brightness.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgba(r, g, b, alpha)
    }

    /// Decompose into `(hue, saturation, brightness, alpha)`, all in `[0, 1]`.
    ///
    /// Achromatic colors report a hue of 0.
    pub fn to_hsba(&self) -> (f32, f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta <= 0.0 {
            0.0
        } else if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == self.g {
            ((self.b - self.r) / delta + 2.0) / 6.0
        } else {
            ((self.r - self.g) / delta + 4.0) / 6.0
        };

        (hue, saturation, max, self.a)
    }

    /// The HSB brightness channel
    pub fn brightness(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Shift the HSB brightness by a signed offset, clamped to `[0, 1]`.
    /// Hue, saturation and alpha are preserved.
    pub fn with_brightness_offset(&self, offset: f32) -> Self {
        let (h, s, v, a) = self.to_hsba();
        Self::from_hsba(h, s, (v + offset).clamp(0.0, 1.0), a)
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    /// The platform's default tint blue
    pub const SYSTEM_BLUE: Color = Color::from_hex(0x007AFF);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn with_size(&self, size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..*self
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by per-side insets. Width and height never go negative.
    pub fn inset_by(&self, insets: Insets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal()).max(0.0),
            height: (self.height - insets.vertical()).max(0.0),
        }
    }

    /// Smallest rect containing both rects
    pub fn union(&self, other: &Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.max_x().max(other.max_x()) - x,
            height: self.max_y().max(other.max_y()) - y,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Four-sided padding between a button's bounds and its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// The insets collapsed to a size: `(left + right, top + bottom)`
    pub fn collapsed(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// Override the top inset value.
    pub fn top(mut self, v: f32) -> Self {
        self.top = v;
        self
    }

    /// Override the bottom inset value.
    pub fn bottom(mut self, v: f32) -> Self {
        self.bottom = v;
        self
    }

    /// Override the left inset value.
    pub fn left(mut self, v: f32) -> Self {
        self.left = v;
        self
    }

    /// Override the right inset value.
    pub fn right(mut self, v: f32) -> Self {
        self.right = v;
        self
    }
}

impl From<f32> for Insets {
    fn from(v: f32) -> Self {
        Insets::all(v)
    }
}

/// `[vertical, horizontal]` shorthand.
impl From<[f32; 2]> for Insets {
    fn from(v: [f32; 2]) -> Self {
        Insets::symmetric(v[1], v[0])
    }
}

/// `[top, right, bottom, left]` shorthand.
impl From<[f32; 4]> for Insets {
    fn from(v: [f32; 4]) -> Self {
        Insets {
            top: v[0],
            right: v[1],
            bottom: v[2],
            left: v[3],
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::all(0.0)
    }
}

/// Raw single-pointer events forwarded by the host's gesture layer.
///
/// Coordinates are in the same space as the receiving button's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer went down
    PointerDown { x: f32, y: f32 },
    /// Pointer moved while down
    PointerMove { x: f32, y: f32 },
    /// Pointer lifted
    PointerUp { x: f32, y: f32 },
    /// The host revoked the gesture (e.g. a scroll view took it over)
    PointerCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(f32, f32)> {
        match self {
            Event::PointerDown { x, y } => Some((*x, *y)),
            Event::PointerMove { x, y } => Some((*x, *y)),
            Event::PointerUp { x, y } => Some((*x, *y)),
            Event::PointerCancel => None,
        }
    }
}
