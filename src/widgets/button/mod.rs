//! The rounded push button.
//!
//! A [`RoundedButton`] owns a content container (auto-created around a
//! [`Label`], or supplied by the host), sizes itself around that content
//! plus insets, and runs a reversible press cross-fade. It does not draw:
//! the host reads [`RoundedButton::presentation`] and paints from it.

mod config;
mod interaction;
mod presentation;

pub use config::{ButtonConfig, DEFAULT_FRAME, DEFAULT_INSETS, DEFAULT_TEXT};
pub use interaction::{InteractionMachine, InteractionState, Step};
pub use presentation::{Background, Presentation};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::TimingFunction;
use crate::invalidation::ChangeFlags;
use crate::layout::{self, ContainerHandle, ContentContainer, ContentRegime, Size, ViewHandle};
use crate::text::AttributedText;
use crate::transform::Transform;

use super::label::{Label, LabelText};
use super::state_layer::{
    PressStyle, PressVisuals, DEFAULT_BRIGHTNESS_OFFSET, DEFAULT_TAPPED_SCALE,
    DEFAULT_TAPPED_TEXT_ALPHA,
};
use super::style::{
    sanitize, sanitize_color, sanitize_font, sanitize_insets, ButtonStyle,
    DEFAULT_BLUR_INTENSITY, DEFAULT_CORNER_RADIUS,
};
use super::{Color, Event, EventResponse, Font, Insets, Rect};

/// Called once per completed tap, after the button is back at rest.
pub type TappedHandler = Box<dyn FnMut()>;

/// What the button currently shows. The last write wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    AttributedText(AttributedText),
    /// A host-supplied content container
    View,
}

pub struct RoundedButton {
    frame: Rect,
    style: ButtonStyle,
    press: PressStyle,
    content_insets: Insets,
    content: Content,
    label: Rc<RefCell<Label>>,
    /// The auto-created container holding `label`
    own_container: ContainerHandle,
    /// The container currently displayed: `own_container` or the host's
    container: ContainerHandle,
    machine: InteractionMachine,
    tapped_handler: Option<TappedHandler>,
    dirty: ChangeFlags,
}

impl RoundedButton {
    /// A button titled "Button" with the default frame
    pub fn new() -> Self {
        Self::with_config(ButtonConfig::default())
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_config(ButtonConfig::default().text(text))
    }

    pub fn with_frame(frame: Rect) -> Self {
        Self::with_config(ButtonConfig::default().frame(frame))
    }

    /// A button displaying a host-supplied container instead of text
    pub fn with_content_view(container: ContainerHandle) -> Self {
        let mut button = Self::new();
        button.set_content_view(container);
        button
    }

    pub fn with_config(config: ButtonConfig) -> Self {
        let own_container = ContentContainer::shared();
        let mut button = Self {
            frame: DEFAULT_FRAME,
            style: ButtonStyle::default(),
            press: PressStyle::default(),
            content_insets: DEFAULT_INSETS,
            content: Content::Text(String::new()),
            label: Rc::new(RefCell::new(Label::new(""))),
            own_container: own_container.clone(),
            container: own_container,
            machine: InteractionMachine::new(PressStyle::default().transition()),
            tapped_handler: None,
            dirty: ChangeFlags::empty(),
        };

        let ButtonConfig {
            text,
            attributed_text,
            frame,
            content_insets,
            style,
            press,
        } = config;

        button.set_frame(frame);
        button.set_content_insets(content_insets);

        button.set_background_color(style.background_color);
        button.set_corner_radius(style.corner_radius);
        button.set_blur_intensity(style.blur_intensity);
        button.set_translucent(style.is_translucent);
        button.set_text_color(style.text_color);
        button.set_text_font(style.text_font);
        button.set_text_point_size(style.text_point_size);

        button.set_tapped_tint_color(press.tapped_tint_color);
        button.set_tapped_tint_color_brightness_offset(press.tapped_tint_color_brightness_offset);
        button.set_tapped_text_alpha(press.tapped_text_alpha);
        button.set_tapped_button_scale(press.tapped_button_scale);
        button.set_tap_animation_duration(press.tap_animation_duration);
        button.set_tap_animation_timing(press.tap_animation_timing);

        button.set_text(text);
        if let Some(attributed) = attributed_text {
            button.set_attributed_text(attributed);
        }
        button.layout_subviews();

        button.dirty = ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        button
    }

    // -- Content --

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Plain value of the displayed text. Attributed text is returned with
    /// its attributes stripped. `None` while a host container is displayed.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::AttributedText(text) => Some(text.as_str()),
            Content::View => None,
        }
    }

    /// Display plain text, replacing any attributed text or host container
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.set_content(Content::Text(text.into()));
    }

    pub fn attributed_text(&self) -> Option<&AttributedText> {
        match &self.content {
            Content::AttributedText(text) => Some(text),
            _ => None,
        }
    }

    /// Display attributed text, replacing any plain text or host container
    pub fn set_attributed_text(&mut self, text: AttributedText) {
        self.set_content(Content::AttributedText(text));
    }

    /// The container currently displayed
    pub fn content_view(&self) -> ContainerHandle {
        self.container.clone()
    }

    /// Display a host container. Its sizing regime follows its subview count.
    ///
    /// Passing back the built-in container (from an earlier
    /// [`content_view`](Self::content_view)) displays it again; its text
    /// content is kept if it is already showing.
    pub fn set_content_view(&mut self, container: ContainerHandle) {
        let is_own = Rc::ptr_eq(&container, &self.own_container);
        if is_own && Rc::ptr_eq(&self.container, &self.own_container) {
            log::trace!("built-in container already displayed");
            return;
        }
        self.release_host_container();
        self.content = Content::View;
        self.label.borrow_mut().set_text(LabelText::Plain(String::new()));
        self.sync_label_attachment();
        self.container = container;
        self.layout_subviews();
        self.dirty |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    /// The built-in label. It shows nothing while a host container is displayed.
    pub fn label(&self) -> Rc<RefCell<Label>> {
        self.label.clone()
    }

    fn set_content(&mut self, content: Content) {
        if self.content == content {
            return;
        }
        let text = match &content {
            Content::Text(text) => LabelText::Plain(text.clone()),
            Content::AttributedText(text) => LabelText::Attributed(text.clone()),
            Content::View => return,
        };
        self.content = content;
        self.label.borrow_mut().set_text(text);
        self.sync_label_attachment();

        if !Rc::ptr_eq(&self.container, &self.own_container) {
            self.release_host_container();
            self.container = self.own_container.clone();
        }
        self.layout_subviews();
        self.dirty |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    /// The label is a subview only while it has something to show, so empty
    /// text sizes the button to its insets.
    fn sync_label_attachment(&mut self) {
        let label_view: ViewHandle = self.label.clone();
        let has_text = !self.label.borrow().text().is_empty();
        let mut own = self.own_container.borrow_mut();
        let attached = own.contains_subview(&label_view);
        if has_text && !attached {
            own.add_subview(label_view);
        } else if !has_text && attached {
            own.remove_subview(&label_view);
        }
    }

    /// Hand a host container back untouched by the press visuals
    fn release_host_container(&mut self) {
        if Rc::ptr_eq(&self.container, &self.own_container) {
            return;
        }
        let mut host = self.container.borrow_mut();
        host.set_alpha(1.0);
        host.set_transform(Transform::IDENTITY);
    }

    // -- Geometry --

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the button. Negative or non-finite sizes become zero.
    pub fn set_frame(&mut self, frame: Rect) {
        let frame = Rect::new(
            sanitize("frame x", frame.x, f32::MIN, f32::MAX, 0.0),
            sanitize("frame y", frame.y, f32::MIN, f32::MAX, 0.0),
            sanitize("frame width", frame.width, 0.0, f32::MAX, 0.0),
            sanitize("frame height", frame.height, 0.0, f32::MAX, 0.0),
        );
        if frame == self.frame {
            return;
        }
        let resized = frame.size() != self.frame.size();
        self.frame = frame;
        if resized {
            self.dirty |= ChangeFlags::NEEDS_LAYOUT;
        }
        self.dirty |= ChangeFlags::NEEDS_PAINT;
        self.apply_presentation();
    }

    /// The button's own coordinate space: its frame moved to the origin
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.frame.size())
    }

    pub fn content_insets(&self) -> Insets {
        self.content_insets
    }

    pub fn set_content_insets(&mut self, insets: impl Into<Insets>) {
        let insets = sanitize_insets(insets.into());
        if insets != self.content_insets {
            self.content_insets = insets;
            self.dirty |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        }
    }

    // -- Style --

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn press_style(&self) -> &PressStyle {
        &self.press
    }

    pub fn background_color(&self) -> Color {
        self.style.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.style.background_color = sanitize_color("background color", color);
        self.paint_changed();
    }

    /// The requested radius, before clamping to the frame
    pub fn corner_radius(&self) -> f32 {
        self.style.corner_radius
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius =
            sanitize("corner radius", radius, 0.0, f32::MAX, DEFAULT_CORNER_RADIUS);
        self.paint_changed();
    }

    /// The radius that is actually painted
    pub fn effective_corner_radius(&self) -> f32 {
        self.style
            .corner_radius_for(self.frame.width, self.frame.height)
    }

    pub fn is_translucent(&self) -> bool {
        self.style.is_translucent
    }

    /// Toggle the blurred backdrop. The blur intensity is kept while off.
    pub fn set_translucent(&mut self, translucent: bool) {
        self.style.is_translucent = translucent;
        self.paint_changed();
    }

    pub fn blur_intensity(&self) -> f32 {
        self.style.blur_intensity
    }

    pub fn set_blur_intensity(&mut self, intensity: f32) {
        self.style.blur_intensity =
            sanitize("blur intensity", intensity, 0.0, 1.0, DEFAULT_BLUR_INTENSITY);
        self.paint_changed();
    }

    pub fn text_color(&self) -> Color {
        self.style.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = sanitize_color("text color", color);
        self.label.borrow_mut().set_color(self.style.text_color);
        self.paint_changed();
    }

    pub fn text_font(&self) -> &Font {
        &self.style.text_font
    }

    pub fn set_text_font(&mut self, font: Font) {
        self.style.text_font = sanitize_font(font);
        self.font_changed();
    }

    /// Point size override; 0 means the font's own size is used
    pub fn text_point_size(&self) -> f32 {
        self.style.text_point_size
    }

    pub fn set_text_point_size(&mut self, size: f32) {
        self.style.text_point_size = sanitize("text point size", size, 0.0, f32::MAX, 0.0);
        self.font_changed();
    }

    // -- Press style --

    pub fn tapped_tint_color(&self) -> Option<Color> {
        self.press.tapped_tint_color
    }

    /// Explicit pressed tint. `None` falls back to the brightness offset.
    pub fn set_tapped_tint_color(&mut self, color: Option<Color>) {
        self.press.tapped_tint_color = color.map(|c| sanitize_color("tapped tint color", c));
        self.paint_changed();
    }

    pub fn tapped_tint_color_brightness_offset(&self) -> f32 {
        self.press.tapped_tint_color_brightness_offset
    }

    pub fn set_tapped_tint_color_brightness_offset(&mut self, offset: f32) {
        self.press.tapped_tint_color_brightness_offset = sanitize(
            "tapped tint brightness offset",
            offset,
            -1.0,
            1.0,
            DEFAULT_BRIGHTNESS_OFFSET,
        );
        self.paint_changed();
    }

    pub fn tapped_text_alpha(&self) -> f32 {
        self.press.tapped_text_alpha
    }

    pub fn set_tapped_text_alpha(&mut self, alpha: f32) {
        self.press.tapped_text_alpha =
            sanitize("tapped text alpha", alpha, 0.0, 1.0, DEFAULT_TAPPED_TEXT_ALPHA);
        self.paint_changed();
    }

    pub fn tapped_button_scale(&self) -> f32 {
        self.press.tapped_button_scale
    }

    pub fn set_tapped_button_scale(&mut self, scale: f32) {
        self.press.tapped_button_scale =
            sanitize("tapped button scale", scale, 0.0, f32::MAX, DEFAULT_TAPPED_SCALE);
        self.paint_changed();
    }

    pub fn tap_animation_duration(&self) -> Duration {
        self.press.tap_animation_duration
    }

    /// Zero makes every press transition instant. A running cross-fade
    /// continues on the new duration.
    pub fn set_tap_animation_duration(&mut self, duration: Duration) {
        self.press.tap_animation_duration = duration;
        self.machine.set_transition(self.press.transition());
    }

    pub fn tap_animation_timing(&self) -> &TimingFunction {
        &self.press.tap_animation_timing
    }

    /// Curve for the press cross-fade in both directions
    pub fn set_tap_animation_timing(&mut self, timing: TimingFunction) {
        self.press.tap_animation_timing = timing;
        self.machine.set_transition(self.press.transition());
    }

    // -- Sizing --

    /// Natural size when offered `size`. Pure; never touches the frame.
    pub fn size_that_fits(&self, size: Size) -> Size {
        layout::size_that_fits(&self.container.borrow(), self.content_insets, size)
    }

    /// Resize to the natural size for the current frame, keeping the origin,
    /// then lay out the content.
    pub fn size_to_fit(&mut self) {
        let size = self.size_that_fits(self.frame.size());
        log::debug!("size_to_fit {:?} -> {:?}", self.frame.size(), size);
        self.set_frame(self.frame.with_size(size));

        {
            let container = self.container.borrow();
            if container.regime() == ContentRegime::SingleChild {
                if let Some(child) = container.single_child() {
                    child.borrow_mut().size_to_fit();
                }
            }
        }
        self.layout_subviews();
    }

    /// Place the content container at the inset bounds and center a single
    /// child in it. The button's frame is left alone.
    pub fn layout_subviews(&mut self) {
        layout::arrange(
            &mut self.container.borrow_mut(),
            self.content_insets,
            self.frame.size(),
        );
        self.dirty.remove(ChangeFlags::NEEDS_LAYOUT);
        self.dirty |= ChangeFlags::NEEDS_PAINT;
        self.apply_presentation();
    }

    /// Smallest width that holds the content plus horizontal insets
    pub fn minimum_width(&self) -> f32 {
        layout::minimum_width(&self.container.borrow(), self.content_insets)
    }

    // -- Interaction --

    pub fn interaction_state(&self) -> InteractionState {
        self.machine.state()
    }

    /// Press progress: 0 at rest, 1 fully pressed
    pub fn press_progress(&self) -> f32 {
        self.machine.progress()
    }

    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    pub fn set_tapped_handler(&mut self, handler: impl FnMut() + 'static) {
        self.tapped_handler = Some(Box::new(handler));
    }

    pub fn clear_tapped_handler(&mut self) {
        self.tapped_handler = None;
    }

    /// Feed a pointer event in the frame's coordinate space.
    ///
    /// With a zero tap duration a release inside calls the tapped handler
    /// before this returns.
    pub fn event(&mut self, event: &Event) -> EventResponse {
        let step = self.machine.handle_event(event, self.frame);
        if step.response == EventResponse::Handled {
            self.paint_changed();
        }
        if step.tapped {
            self.fire_tapped();
        }
        step.response
    }

    /// Advance the press cross-fade by `dt`. Returns true while more frames
    /// are needed.
    pub fn advance_animations(&mut self, dt: Duration) -> bool {
        let step = self.machine.advance(dt);
        if step.changed {
            self.paint_changed();
        }
        if step.tapped {
            self.fire_tapped();
        }
        step.animating
    }

    fn fire_tapped(&mut self) {
        log::debug!("button tapped");
        self.apply_presentation();
        if let Some(handler) = self.tapped_handler.as_mut() {
            handler();
        }
    }

    // -- Presentation --

    /// The visuals in effect right now, including any in-flight cross-fade
    pub fn presentation(&self) -> Presentation {
        let visuals = self.visuals();
        let background = if self.style.is_translucent {
            Background::Translucent {
                tint: visuals.background,
                blur_intensity: self.style.blur_intensity,
            }
        } else {
            Background::Solid(visuals.background)
        };
        Presentation {
            background,
            corner_radius: self.effective_corner_radius(),
            content_alpha: visuals.content_alpha,
            content_scale: visuals.content_scale,
            content_transform: self.content_transform(visuals.content_scale),
            text_color: self.style.text_color,
            state: self.machine.state(),
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.dirty.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    pub fn needs_paint(&self) -> bool {
        self.dirty.contains(ChangeFlags::NEEDS_PAINT)
    }

    /// Return the pending change flags and clear them
    pub fn take_dirty(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.dirty)
    }

    fn visuals(&self) -> PressVisuals {
        PressVisuals::at(&self.style, &self.press, self.machine.progress())
    }

    fn content_transform(&self, scale: f32) -> Transform {
        if scale == 1.0 {
            return Transform::IDENTITY;
        }
        let (cx, cy) = self.bounds().center();
        Transform::scale(scale).about_point(cx, cy)
    }

    /// Push the current content alpha and scale into the container
    fn apply_presentation(&self) {
        let visuals = self.visuals();
        let mut container = self.container.borrow_mut();
        container.set_alpha(visuals.content_alpha);
        container.set_transform(self.content_transform(visuals.content_scale));
    }

    fn paint_changed(&mut self) {
        self.dirty |= ChangeFlags::NEEDS_PAINT;
        self.apply_presentation();
    }

    fn font_changed(&mut self) {
        self.label.borrow_mut().set_font(self.style.effective_font());
        self.dirty |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }
}

impl Default for RoundedButton {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundedButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundedButton")
            .field("frame", &self.frame)
            .field("content", &self.content)
            .field("state", &self.machine.state())
            .field("progress", &self.machine.progress())
            .finish()
    }
}
