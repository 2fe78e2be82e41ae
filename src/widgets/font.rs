//! Font descriptors for button text.
//!
//! A [`Font`] bundles family, weight and point size. The button's
//! `text_point_size` override replaces only the size.

use cosmic_text::{Attrs, Family, Weight};

/// Font family.
///
/// # Examples
///
/// ```
/// use rounded_button::widgets::{Font, FontFamily};
///
/// let mono = Font::system(17.0).with_family(FontFamily::Monospace);
/// let inter = Font::system(17.0).with_family(FontFamily::Name("Inter".into()));
/// assert_ne!(mono, inter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Sans-serif font (default system sans-serif)
    #[default]
    SansSerif,
    /// Serif font (default system serif)
    Serif,
    /// Monospace font (default system monospace)
    Monospace,
    /// Custom font by name
    Name(String),
}

impl FontFamily {
    /// Convert to cosmic-text Family type for shaping.
    pub fn to_cosmic(&self) -> Family<'_> {
        match self {
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Monospace => Family::Monospace,
            FontFamily::Name(name) => Family::Name(name),
        }
    }
}

/// Font weight on a 100-900 scale, matching CSS font-weight values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (300)
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400) - default
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500)
    pub const MEDIUM: Self = Self(500);
    /// Semi-bold weight (600)
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700)
    pub const BOLD: Self = Self(700);

    /// Convert to cosmic-text Weight type for shaping.
    pub fn to_cosmic(self) -> Weight {
        Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A concrete font: family, weight and point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f32,
}

impl Font {
    /// Regular system sans-serif at `size` points
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::SansSerif,
            weight: FontWeight::NORMAL,
            size,
        }
    }

    /// Bold system sans-serif at `size` points
    pub fn bold_system(size: f32) -> Self {
        Self::system(size).with_weight(FontWeight::BOLD)
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Line height used for measurement: 1.2 times the point size
    pub fn line_height(&self) -> f32 {
        self.size * 1.2
    }

    /// cosmic-text attributes for shaping with this font
    pub fn attrs(&self) -> Attrs<'_> {
        Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
    }
}

impl Default for Font {
    /// Bold system font at 19 points
    fn default() -> Self {
        Self::bold_system(19.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_family_default() {
        assert_eq!(FontFamily::default(), FontFamily::SansSerif);
    }

    #[test]
    fn font_weight_default_is_normal() {
        assert_eq!(FontWeight::default(), FontWeight::NORMAL);
        assert_eq!(FontWeight::BOLD.0, 700);
    }

    #[test]
    fn font_default_is_bold_19() {
        let font = Font::default();
        assert_eq!(font.size, 19.0);
        assert_eq!(font.weight, FontWeight::BOLD);
        assert_eq!(font.family, FontFamily::SansSerif);
    }

    #[test]
    fn font_builders() {
        let font = Font::system(12.0)
            .with_size(20.0)
            .with_weight(FontWeight::SEMI_BOLD)
            .with_family(FontFamily::Serif);
        assert_eq!(font.size, 20.0);
        assert_eq!(font.weight, FontWeight(600));
        assert_eq!(font.family, FontFamily::Serif);
        assert!((font.line_height() - 24.0).abs() < 1e-4);
    }
}
