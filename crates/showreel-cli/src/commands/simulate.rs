use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{backend::TestBackend, Terminal};

use showreel_core::intro::{InputEvent, Viewport};
use showreel_core::AppConfig;
use showreel_tui::{input::Action, ui, App, Theme};

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: u32 = 1000;
const WIDTH: u16 = 100;
const HEIGHT: u16 = 41;

/// Send `events` wheel notches of `delta` px to a page drawn on an
/// off-screen terminal, then step frames until the intro settles
pub fn run(config: Arc<AppConfig>, delta: f64, events: u32) -> Result<()> {
    let start = Instant::now();
    let mut app = App::new(config, Theme::default(), start);
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT))?;

    // First draw records the section layout
    terminal.draw(|frame| ui::draw(frame, &mut app))?;

    for _ in 0..events {
        app.handle_action(Action::Intro(InputEvent::Wheel { delta_y: delta }), start);
    }
    tracing::debug!(delta, events, target = app.intro.target(), "Wheel sequence sent");

    println!("{:>5} {:>7} {:>9} {:>9} {:>8} {:>9}", "frame", "ms", "progress", "target", "locked", "offset");
    for frame in 1..=MAX_FRAMES {
        let now = start + FRAME * frame;
        app.on_frame(now);
        terminal.draw(|f| ui::draw(f, &mut app))?;

        println!(
            "{:>5} {:>7} {:>9.4} {:>9.4} {:>8} {:>9.1}",
            frame,
            (FRAME * frame).as_millis(),
            app.intro.progress(),
            app.intro.target(),
            app.intro.is_locked(),
            app.intro.viewport().scroll_offset(),
        );

        if !app.needs_fast_update() {
            println!("\nSettled after {} frames", frame);
            break;
        }
    }

    app.teardown();
    Ok(())
}
