//! Draggable autoplaying carousel
//!
//! One [`Carousel`] per mounted instance. Autoplay is a deadline the host
//! polls with [`Carousel::tick`]; drags follow the pointer 1:1 and commit on
//! release only past the threshold.

pub mod engine;
pub mod pointer;

pub use engine::{wrap_index, Carousel, DragRelease};
pub use pointer::{NoCapture, PointerId, PointerTarget};
