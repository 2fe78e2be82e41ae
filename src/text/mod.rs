//! Text measurement and attributed strings.

mod attributed;
mod measurer;

pub use attributed::{AttributeRun, AttributedText, TextAttributes, TextSegment};
pub use measurer::{
    measure_text, set_text_measurer, CosmicTextMeasurer, MonospaceMeasurer, TextMeasurer,
};
