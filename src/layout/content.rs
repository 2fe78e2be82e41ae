use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::transform::Transform;
use crate::widgets::Rect;

use super::engine;
use super::{ContentRegime, Size};

/// A view that can live inside a button's content container.
///
/// Implemented by the built-in [`Label`](crate::widgets::Label) and by any
/// host view the button should size around.
pub trait ContentView {
    /// The view's natural size when offered `size`. Must not mutate the view.
    fn size_that_fits(&self, size: Size) -> Size;

    /// Frame in the parent container's coordinate space
    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    /// Resize to the natural size for the current frame, keeping the origin.
    fn size_to_fit(&mut self) {
        let frame = self.frame();
        let size = self.size_that_fits(frame.size());
        self.set_frame(frame.with_size(size));
    }
}

/// Shared handle to a content view. The UI is single-threaded, so views are
/// shared through `Rc<RefCell<_>>` between the host and the button.
pub type ViewHandle = Rc<RefCell<dyn ContentView>>;

/// Shared handle to a content container.
pub type ContainerHandle = Rc<RefCell<ContentContainer>>;

/// The region hosting a button's visible content.
///
/// Besides its subviews the container carries the presentation values the
/// button drives while pressed: content alpha and a scale transform about
/// the button center.
pub struct ContentContainer {
    frame: Rect,
    subviews: Vec<ViewHandle>,
    alpha: f32,
    transform: Transform,
}

impl ContentContainer {
    pub fn new() -> Self {
        Self {
            frame: Rect::default(),
            subviews: Vec::new(),
            alpha: 1.0,
            transform: Transform::IDENTITY,
        }
    }

    /// Create a container wrapped in a shareable handle
    pub fn shared() -> ContainerHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn with_subview(mut self, view: ViewHandle) -> Self {
        self.add_subview(view);
        self
    }

    pub fn add_subview(&mut self, view: ViewHandle) {
        self.subviews.push(view);
    }

    /// Remove a subview by identity. Returns true if it was present.
    pub fn remove_subview(&mut self, view: &ViewHandle) -> bool {
        let before = self.subviews.len();
        self.subviews.retain(|v| !Rc::ptr_eq(v, view));
        self.subviews.len() != before
    }

    pub fn subviews(&self) -> &[ViewHandle] {
        &self.subviews
    }

    pub fn contains_subview(&self, view: &ViewHandle) -> bool {
        self.subviews.iter().any(|v| Rc::ptr_eq(v, view))
    }

    pub fn is_empty(&self) -> bool {
        self.subviews.is_empty()
    }

    /// Which sizing regime applies to the current subviews
    pub fn regime(&self) -> ContentRegime {
        if self.subviews.len() == 1 {
            ContentRegime::SingleChild
        } else {
            ContentRegime::Composite
        }
    }

    /// The only subview, if the container is in the single-child regime
    pub fn single_child(&self) -> Option<&ViewHandle> {
        match self.subviews.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Union of all subview frames, in this container's coordinate space.
    /// `None` when there are no subviews.
    pub fn subviews_bounding_box(&self) -> Option<Rect> {
        self.subviews
            .iter()
            .map(|view| view.borrow().frame())
            .reduce(|acc, frame| acc.union(&frame))
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
}

impl Default for ContentContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContentContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentContainer")
            .field("frame", &self.frame)
            .field("subviews", &self.subviews.len())
            .field("alpha", &self.alpha)
            .finish()
    }
}

/// Containers nest: a container's natural size is its content with no insets.
impl ContentView for ContentContainer {
    fn size_that_fits(&self, size: Size) -> Size {
        engine::content_size_that_fits(self, size)
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}
