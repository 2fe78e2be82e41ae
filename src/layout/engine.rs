use crate::widgets::{Insets, Rect};

use super::{ContentContainer, Size};

/// How a content container is sized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRegime {
    /// Exactly one subview, asked for its own natural size
    SingleChild,
    /// Zero or several subviews with independent frames
    Composite,
}

/// Natural size of the container's content inside `available`, without insets.
pub(crate) fn content_size_that_fits(container: &ContentContainer, available: Size) -> Size {
    match container.single_child() {
        Some(child) => child.borrow().size_that_fits(available),
        None => container
            .subviews_bounding_box()
            .map(|bounds| bounds.size())
            .unwrap_or_default(),
    }
}

/// Natural size of a button holding `container` with `insets`, when offered
/// `target`.
///
/// The child only sees the space left after the insets. This never mutates
/// the container or its subviews.
pub fn size_that_fits(container: &ContentContainer, insets: Insets, target: Size) -> Size {
    content_size_that_fits(container, target.shrunk_by(insets)).grown_by(insets)
}

/// The narrowest width that still holds the content plus horizontal insets.
pub fn minimum_width(container: &ContentContainer, insets: Insets) -> f32 {
    size_that_fits(container, insets, Size::unbounded()).width
}

/// Place the container inside `bounds` minus `insets`.
///
/// A single child is fitted into the content area and centered in it.
/// Composite children keep their frames; arranging them is the host's job.
pub fn arrange(container: &mut ContentContainer, insets: Insets, bounds: Size) {
    let content_frame = Rect::from_size(bounds).inset_by(insets);
    container.set_frame(content_frame);

    if let Some(child) = container.single_child() {
        let mut child = child.borrow_mut();
        let fitted = child
            .size_that_fits(content_frame.size())
            .min(content_frame.size());
        let frame = Rect::new(
            (content_frame.width - fitted.width) / 2.0,
            (content_frame.height - fitted.height) / 2.0,
            fitted.width,
            fitted.height,
        );
        log::trace!("arranged single child at {:?}", frame);
        child.set_frame(frame);
    }
}
