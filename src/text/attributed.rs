use std::ops::Range;

use crate::widgets::style::{sanitize_color, sanitize_font};
use crate::widgets::{Color, Font};

/// Style overrides for a run of attributed text. `None` falls back to the
/// label's own font or color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextAttributes {
    pub font: Option<Font>,
    pub color: Option<Color>,
}

impl TextAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Attributes applied to a byte range of the string
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRun {
    pub range: Range<usize>,
    pub attributes: TextAttributes,
}

/// A contiguous slice of attributed text sharing one set of attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSegment<'a> {
    pub text: &'a str,
    /// `None` for text not covered by any run
    pub attributes: Option<&'a TextAttributes>,
}

/// A string with styled runs.
///
/// Runs never overlap and always sit on char boundaries; a run that would
/// break either rule is dropped with a warning.
///
/// ```
/// use rounded_button::text::{AttributedText, TextAttributes};
/// use rounded_button::widgets::Font;
///
/// let text = AttributedText::new("Buy now")
///     .with_attributes(4..7, TextAttributes::new().font(Font::bold_system(21.0)));
/// assert_eq!(text.as_str(), "Buy now");
/// assert_eq!(text.segments().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedText {
    text: String,
    runs: Vec<AttributeRun>,
}

impl AttributedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, range: Range<usize>, attributes: TextAttributes) -> Self {
        self.add_attributes(range, attributes);
        self
    }

    /// Apply attributes to a byte range. Returns false if the run was rejected.
    ///
    /// Run fonts and colors are sanitized the same way as the button's own.
    pub fn add_attributes(&mut self, range: Range<usize>, attributes: TextAttributes) -> bool {
        let end = range.end.min(self.text.len());
        if range.start >= end
            || !self.text.is_char_boundary(range.start)
            || !self.text.is_char_boundary(end)
        {
            log::warn!(
                "ignoring attribute run {:?} on text of {} bytes",
                range,
                self.text.len()
            );
            return false;
        }

        let range = range.start..end;
        if self
            .runs
            .iter()
            .any(|run| run.range.start < range.end && range.start < run.range.end)
        {
            log::warn!("ignoring attribute run {:?}: overlaps an existing run", range);
            return false;
        }

        let index = self
            .runs
            .partition_point(|run| run.range.start < range.start);
        let attributes = TextAttributes {
            font: attributes.font.map(sanitize_font),
            color: attributes.color.map(|color| sanitize_color("run color", color)),
        };
        self.runs.insert(index, AttributeRun { range, attributes });
        true
    }

    /// The plain string value
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Split the string into consecutive segments covering all of it
    pub fn segments(&self) -> Vec<TextSegment<'_>> {
        let mut segments = Vec::with_capacity(self.runs.len() * 2 + 1);
        let mut cursor = 0;

        for run in &self.runs {
            if run.range.start > cursor {
                segments.push(TextSegment {
                    text: &self.text[cursor..run.range.start],
                    attributes: None,
                });
            }
            segments.push(TextSegment {
                text: &self.text[run.range.clone()],
                attributes: Some(&run.attributes),
            });
            cursor = run.range.end;
        }

        if cursor < self.text.len() {
            segments.push(TextSegment {
                text: &self.text[cursor..],
                attributes: None,
            });
        }

        segments
    }
}

impl From<&str> for AttributedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AttributedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
