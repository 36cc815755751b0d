//! Intro progress and scroll lock
//!
//! Turns wheel, touch and keyboard input into a bounded progress value,
//! keeps native page scrolling locked until the intro completes, and replays
//! navigation requested while locked once the page is scrollable again.
//!
//! # Layers
//!
//! ## Atoms
//! - `input` - event to delta conversion
//! - `visuals` - easing and staged style interpolation
//! - `viewport` - the page surface trait
//!
//! ## Molecules
//! - `animator` - convergence loop over current/target progress
//! - `lock` - gesture flags, routing and scroll suppression
//! - `navigation` - bounded retry loop for deferred scrolls
//!
//! ## Organism
//! - `controller` - wires the above to a scheduler and a viewport
//!
//! # Usage
//!
//! ```ignore
//! use showreel_core::intro::{InputEvent, IntroController};
//!
//! let mut intro = IntroController::new(page, &config);
//!
//! // Forward input; cancel the native action when intercepted
//! if intro.handle_input(InputEvent::Wheel { delta_y: 120.0 }).is_intercepted() {
//!     event.prevent_default();
//! }
//!
//! // Once per display frame
//! for event in intro.frame(Instant::now()) { /* ... */ }
//! let style = intro.visuals();
//! ```

pub mod input;
pub mod viewport;
pub mod visuals;

pub mod animator;
pub mod lock;
pub mod navigation;

pub mod controller;

pub use animator::{ProgressAnimator, StepOutcome};
pub use controller::{IntroController, IntroEvent, NavigationRequest};
pub use input::{InputEvent, InputNormalizer, NavKey};
pub use lock::{GestureState, InputDisposition, LockState};
pub use navigation::NavigationDeferrer;
pub use viewport::{ScrollBehavior, ScrollRoot, Viewport};
pub use visuals::{ease_in_out_cubic, IntroVisuals};
