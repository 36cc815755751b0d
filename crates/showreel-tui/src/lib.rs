pub mod app;
pub mod content;
pub mod event;
pub mod input;
pub mod page;
pub mod scroll;
pub mod slides;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use page::PageViewport;
pub use theme::Theme;
