//! Smooth scrolling for the page viewport and carousel tracks
//!
//! Positions are in device pixels (`f64`); the renderer converts them to
//! terminal cells when drawing.
//!
//! # Architecture
//!
//! ## Atoms
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Progress and interpolation helpers over explicit instants
//! - `config` - Configuration types (re-exported from showreel-core)
//!
//! ## Molecules
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use showreel_tui::scroll::{ScrollAnimator, ScrollConfig};
//!
//! let mut animator = ScrollAnimator::new(ScrollConfig::default());
//! animator.scroll_to(1104.0, max_offset, Instant::now());
//!
//! // Once per frame
//! let offset = animator.update(max_offset, Instant::now());
//! ```

// Atoms
pub mod config;
pub mod easing;
pub mod timing;

// Molecules
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
