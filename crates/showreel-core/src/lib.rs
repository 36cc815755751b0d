pub mod carousel;
pub mod config;
pub mod error;
pub mod intro;
pub mod schedule;

pub use carousel::Carousel;
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use intro::IntroController;
