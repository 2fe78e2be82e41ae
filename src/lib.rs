//! A headless rounded push button.
//!
//! The crate decides what a button looks like at any instant and when its
//! tap fires. Drawing is left to the host, which feeds pointer events and
//! frame deltas in and reads a [`Presentation`](widgets::Presentation) out.
//!
//! ```
//! use std::time::Duration;
//! use rounded_button::prelude::*;
//!
//! let mut button = RoundedButton::with_text("Continue");
//! button.set_tap_animation_duration(Duration::ZERO);
//! button.event(&Event::PointerDown { x: 10.0, y: 10.0 });
//! button.event(&Event::PointerUp { x: 10.0, y: 10.0 });
//! assert_eq!(button.interaction_state(), InteractionState::Idle);
//! ```

pub mod animation;
pub mod invalidation;
pub mod layout;
pub mod text;
pub mod transform;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{FrameClock, TimingFunction, Transition};
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{ContainerHandle, ContentContainer, ContentView, Size, ViewHandle};
    pub use crate::text::{set_text_measurer, AttributedText, TextAttributes, TextMeasurer};
    pub use crate::transform::Transform;
    pub use crate::widgets::{
        Background, ButtonConfig, Color, Content, Event, EventResponse, Font, FontFamily,
        FontWeight, Insets, InteractionState, Presentation, Rect, RoundedButton,
    };
}
