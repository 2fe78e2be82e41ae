use std::cell::Cell;

use crate::layout::{ContentView, Size};
use crate::text::{measure_text, AttributedText};

use super::font::Font;
use super::widget::{Color, Rect};

/// What a label displays
#[derive(Debug, Clone, PartialEq)]
pub enum LabelText {
    Plain(String),
    Attributed(AttributedText),
}

impl LabelText {
    /// The plain string value, with attributes stripped
    pub fn as_str(&self) -> &str {
        match self {
            LabelText::Plain(text) => text,
            LabelText::Attributed(text) => text.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// Single-line text view used as a button's auto-created content.
///
/// Measurement goes through the thread's
/// [`TextMeasurer`](crate::text::TextMeasurer) and is cached until the text
/// or font changes.
pub struct Label {
    text: LabelText,
    font: Font,
    color: Color,
    frame: Rect,
    cached_size: Cell<Option<Size>>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: LabelText::Plain(text.into()),
            font: Font::default(),
            color: Color::WHITE,
            frame: Rect::default(),
            cached_size: Cell::new(None),
        }
    }

    pub fn text(&self) -> &LabelText {
        &self.text
    }

    pub fn set_text(&mut self, text: LabelText) {
        if self.text != text {
            self.text = text;
            self.invalidate();
        }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            self.invalidate();
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Drop the cached measurement
    pub fn invalidate(&mut self) {
        self.cached_size.set(None);
    }

    fn measure(&self) -> Size {
        match &self.text {
            LabelText::Plain(text) if text.is_empty() => Size::zero(),
            LabelText::Plain(text) => measure_text(text, &self.font, None),
            LabelText::Attributed(text) => {
                // Runs sit on one line: widths add up, the tallest run sets the height
                text.segments()
                    .iter()
                    .filter(|segment| !segment.text.is_empty())
                    .map(|segment| {
                        let font = segment
                            .attributes
                            .and_then(|attrs| attrs.font.as_ref())
                            .unwrap_or(&self.font);
                        measure_text(segment.text, font, None)
                    })
                    .fold(Size::zero(), |acc, size| {
                        Size::new(acc.width + size.width, acc.height.max(size.height))
                    })
            }
        }
    }
}

impl ContentView for Label {
    /// Labels are single-line, so the offered size does not change the result.
    fn size_that_fits(&self, _size: Size) -> Size {
        if let Some(size) = self.cached_size.get() {
            return size;
        }
        let size = self.measure();
        self.cached_size.set(Some(size));
        size
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{set_text_measurer, MonospaceMeasurer, TextAttributes};

    fn setup() {
        set_text_measurer(MonospaceMeasurer::new(0.5));
    }

    #[test]
    fn test_plain_label_measures_text() {
        setup();
        let mut label = Label::new("Button");
        label.set_font(Font::system(20.0));
        let size = label.size_that_fits(Size::unbounded());
        assert_eq!(size.width, 60.0);
        assert!((size.height - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_label_is_zero_sized() {
        setup();
        let label = Label::new("");
        assert_eq!(label.size_that_fits(Size::unbounded()), Size::zero());
    }

    #[test]
    fn test_font_change_invalidates_cache() {
        setup();
        let mut label = Label::new("abcd");
        label.set_font(Font::system(10.0));
        assert_eq!(label.size_that_fits(Size::unbounded()).width, 20.0);

        label.set_font(Font::system(20.0));
        assert_eq!(label.size_that_fits(Size::unbounded()).width, 40.0);
    }

    #[test]
    fn test_cache_survives_until_invalidated() {
        setup();
        let mut label = Label::new("abcd");
        label.set_font(Font::system(10.0));
        assert_eq!(label.size_that_fits(Size::unbounded()).width, 20.0);

        // A new measurer is not consulted while the cache is warm
        set_text_measurer(MonospaceMeasurer::new(1.0));
        assert_eq!(label.size_that_fits(Size::unbounded()).width, 20.0);

        label.invalidate();
        assert_eq!(label.size_that_fits(Size::unbounded()).width, 40.0);
    }

    #[test]
    fn test_attributed_label_sums_runs() {
        setup();
        let mut label = Label::new("");
        label.set_font(Font::system(10.0));
        let text = AttributedText::new("abcdef")
            .with_attributes(2..4, TextAttributes::new().font(Font::system(20.0)));
        label.set_text(LabelText::Attributed(text));

        // "ab" + "ef" at 5 per char, "cd" at 10 per char
        let size = label.size_that_fits(Size::unbounded());
        assert_eq!(size.width, 40.0);
        assert!((size.height - Font::system(20.0).line_height()).abs() < 1e-4);
        assert_eq!(label.text().as_str(), "abcdef");
    }
}
