//! Pointer capture seam between the carousel and its host element

/// Host-assigned pointer identifier
pub type PointerId = i64;

/// Element that can capture a pointer for the duration of a drag
pub trait PointerTarget {
    fn capture_pointer(&mut self, pointer_id: PointerId);

    /// Release a captured pointer. Failures are reported but the carousel
    /// ignores them.
    fn release_pointer(&mut self, pointer_id: PointerId) -> crate::Result<()>;
}

/// Host without capture support
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCapture;

impl PointerTarget for NoCapture {
    fn capture_pointer(&mut self, _pointer_id: PointerId) {}

    fn release_pointer(&mut self, _pointer_id: PointerId) -> crate::Result<()> {
        Ok(())
    }
}

/// An in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    pub pointer_id: PointerId,
    pub start_x: f64,
    /// Total horizontal displacement since pointer-down
    pub dx: f64,
}

impl DragSession {
    pub fn new(pointer_id: PointerId, start_x: f64) -> Self {
        Self {
            pointer_id,
            start_x,
            dx: 0.0,
        }
    }

    pub fn track(&mut self, x: f64) -> f64 {
        self.dx = x - self.start_x;
        self.dx
    }
}
