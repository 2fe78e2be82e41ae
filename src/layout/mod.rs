//! Content containers and the button sizing engine.
//!
//! A button lays out exactly one [`ContentContainer`]. The container is
//! sized in one of two regimes, picked from its subview count:
//!
//! - **single child**: the child is asked for its natural size inside the
//!   offered size minus insets, and the insets are added back.
//! - **composite**: zero or several children keep their own frames; the
//!   union of those frames plus insets is the natural size.

mod content;
mod engine;
mod size;

pub use content::{ContainerHandle, ContentContainer, ContentView, ViewHandle};
pub use engine::{arrange, minimum_width, size_that_fits, ContentRegime};
pub use size::Size;
