use std::cell::RefCell;

use cosmic_text::{Buffer, FontSystem, Metrics, Shaping};

use crate::layout::Size;
use crate::widgets::Font;

/// Measures single runs of text in a given font.
pub trait TextMeasurer {
    /// Size of `text` laid out in `font`. `max_width` wraps lines when set.
    fn measure(&mut self, text: &str, font: &Font, max_width: Option<f32>) -> Size;
}

/// Measures with real font metrics through cosmic-text.
pub struct CosmicTextMeasurer {
    font_system: FontSystem,
}

impl CosmicTextMeasurer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }

    /// Measure with an existing font system, e.g. one with bundled fonts loaded.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self { font_system }
    }
}

impl Default for CosmicTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&mut self, text: &str, font: &Font, max_width: Option<f32>) -> Size {
        // cosmic-text rejects a zero line height
        if font.size <= 0.0 {
            return Size::zero();
        }
        let metrics = Metrics::new(font.size, font.line_height());
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        buffer.set_size(&mut self.font_system, max_width, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            &font.attrs(),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, true);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        // Ensure minimum height for empty text
        if height == 0.0 {
            height = font.line_height();
        }

        Size::new(width, height)
    }
}

/// Approximate measurer where every character advances by a fixed fraction
/// of the point size. Needs no fonts, which suits headless hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of one character, as a multiple of the point size
    pub advance_ratio: f32,
}

impl MonospaceMeasurer {
    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&mut self, text: &str, font: &Font, max_width: Option<f32>) -> Size {
        let advance = font.size * self.advance_ratio;
        let mut width = 0.0f32;
        let mut lines = 0usize;

        for line in text.split('\n') {
            let line_width = line.chars().count() as f32 * advance;
            match max_width {
                Some(max) if max > 0.0 && advance > 0.0 && line_width > max => {
                    let per_line = (max / advance).floor().max(1.0);
                    let chars = line.chars().count() as f32;
                    width = width.max(per_line * advance);
                    lines += (chars / per_line).ceil() as usize;
                }
                _ => {
                    width = width.max(line_width);
                    lines += 1;
                }
            }
        }

        Size::new(width, lines as f32 * font.line_height())
    }
}

thread_local! {
    static TEXT_MEASURER: RefCell<Option<Box<dyn TextMeasurer>>> = const { RefCell::new(None) };
}

/// Replace the measurer used on the current thread.
///
/// The default is a [`CosmicTextMeasurer`], created on first use.
pub fn set_text_measurer(measurer: impl TextMeasurer + 'static) {
    TEXT_MEASURER.with_borrow_mut(|slot| *slot = Some(Box::new(measurer)));
}

/// Measure text dimensions with the current thread's measurer
pub fn measure_text(text: &str, font: &Font, max_width: Option<f32>) -> Size {
    TEXT_MEASURER.with_borrow_mut(|slot| {
        slot.get_or_insert_with(|| {
            log::debug!("creating cosmic-text font system for measurement");
            Box::new(CosmicTextMeasurer::new())
        })
        .measure(text, font, max_width)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_single_line() {
        let mut measurer = MonospaceMeasurer::new(0.5);
        let size = measurer.measure("Button", &Font::system(20.0), None);
        assert_eq!(size.width, 60.0);
        assert!((size.height - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_monospace_counts_chars_not_bytes() {
        let mut measurer = MonospaceMeasurer::new(1.0);
        let size = measurer.measure("héllo", &Font::system(10.0), None);
        assert_eq!(size.width, 50.0);
    }

    #[test]
    fn test_monospace_wraps_at_max_width() {
        let mut measurer = MonospaceMeasurer::new(1.0);
        let font = Font::system(10.0);
        let size = measurer.measure("abcdefghij", &font, Some(40.0));
        assert_eq!(size.width, 40.0);
        assert!((size.height - 3.0 * font.line_height()).abs() < 1e-4);
    }

    #[test]
    fn test_monospace_explicit_newlines() {
        let mut measurer = MonospaceMeasurer::new(1.0);
        let font = Font::system(10.0);
        let size = measurer.measure("ab\nabcd", &font, None);
        assert_eq!(size.width, 40.0);
        assert!((size.height - 2.0 * font.line_height()).abs() < 1e-4);
    }

    #[test]
    fn test_thread_measurer_can_be_replaced() {
        set_text_measurer(MonospaceMeasurer::new(1.0));
        let size = measure_text("abc", &Font::system(10.0), None);
        assert_eq!(size.width, 30.0);
    }
}
