use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use showreel_core::AppConfig;
use showreel_tui::{
    event::{AppEvent, EventHandler, SlideLoadResult},
    input::{handle_key_event, handle_mouse_event, Action},
    slides::load_image,
    ui, App, Theme,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Showreel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
) -> Result<()> {
    let mut app = App::new(config.clone(), Theme::default(), Instant::now());

    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Decode slide images off the UI thread
    let (slide_tx, mut slide_rx) = mpsc::unbounded_channel::<SlideLoadResult>();
    for (index, path) in app.slides.pending_loads() {
        let tx = slide_tx.clone();
        tokio::task::spawn_blocking(move || {
            let result = match load_image(&path) {
                Ok(image) => SlideLoadResult::Success { index, image },
                Err(error) => SlideLoadResult::Failure { index, error },
            };
            // Receiver is gone once the app has quit
            let _ = tx.send(result);
        });
    }
    drop(slide_tx);

    tracing::info!(slides = app.slides.len(), "TUI started");

    loop {
        // Process any completed image loads (non-blocking)
        while let Ok(result) = slide_rx.try_recv() {
            app.apply_slide_result(result);
        }

        let now = Instant::now();
        app.on_frame(now);

        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        // Poll fast while something animates, otherwise sleep until the next timer
        let timeout = event_handler.poll_timeout(app.needs_fast_update(), app.next_deadline(), now);
        if let Some(event) = event_handler.next(timeout)? {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key),
                AppEvent::Mouse(mouse) => handle_mouse_event(mouse, config.ui.wheel_delta_px),
                AppEvent::Resize(_, _) => Action::Resize,
                AppEvent::Tick => Action::None,
            };
            app.handle_action(action, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    app.teardown();
    tracing::info!("TUI stopped");
    Ok(())
}
