pub mod button;
pub mod font;
pub mod label;
pub mod state_layer;
pub mod style;
pub mod widget;

pub use button::{
    Background, ButtonConfig, Content, InteractionMachine, InteractionState, Presentation,
    RoundedButton, TappedHandler,
};
pub use font::{Font, FontFamily, FontWeight};
pub use label::{Label, LabelText};
pub use state_layer::{resolve_background, BackgroundOverride, PressStyle, PressVisuals};
pub use style::ButtonStyle;
pub use widget::{Color, Event, EventResponse, Insets, Rect};
