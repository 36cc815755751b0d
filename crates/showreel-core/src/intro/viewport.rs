//! The page surface the intro controller drives

/// How a programmatic scroll should move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Scrollable containers that carry the suppression styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRoot {
    /// The document root element
    Document,
    Body,
}

impl ScrollRoot {
    pub const ALL: [ScrollRoot; 2] = [ScrollRoot::Document, ScrollRoot::Body];
}

/// Host page as seen by the intro controller.
///
/// Implementations own the native scroll position, section geometry and the
/// overflow styling. The controller is the only writer of the suppression
/// flag.
pub trait Viewport {
    /// Current vertical scroll offset of the page
    fn scroll_offset(&self) -> f64;

    /// Scroll the page to `top`
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Document-relative top of the element with `id`, `None` when it is not
    /// laid out (yet)
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Hide overflow and pin the height of `root` (or undo it)
    fn set_scroll_suppressed(&mut self, root: ScrollRoot, suppressed: bool);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        (**self).scroll_to(top, behavior)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        (**self).element_top(id)
    }

    fn set_scroll_suppressed(&mut self, root: ScrollRoot, suppressed: bool) {
        (**self).set_scroll_suppressed(root, suppressed)
    }
}
