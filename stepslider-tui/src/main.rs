//! Stepped-slider demo — discrete snapping slider with mouse interaction.
//!
//! Screen: the slider surface, its settings, and an observer-driven
//! readout ("FPS: …"), with a one-line status bar.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use stepslider_tui::app::AppState;
use stepslider_tui::{input, persistence, ui};

/// Poll timeout while a snap animation is in flight (~60 fps).
const ANIMATING_POLL: Duration = Duration::from_millis(16);
/// Poll timeout when idle.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stepslider")
        .join("state.json");

    // Build app state and restore the previous session.
    let mut app = AppState::new();
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop.
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit.
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        let size = terminal.size()?;
        app.area = Rect::new(0, 0, size.width, size.height);

        // 1. Render, coalesced through the dirty flag.
        if app.dirty {
            terminal.draw(|f| ui::draw(f, app))?;
            app.dirty = false;
        }

        // 2. Wait for input; animate at a higher cadence while snapping.
        let timeout = if app.animation.is_some() {
            ANIMATING_POLL
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key, now),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, now),
                Event::Resize(_, _) => {
                    app.dirty = true;
                }
                _ => {}
            }
        }

        // 3. Advance the animation and drain observer notifications.
        app.tick(Instant::now());
    }
    Ok(())
}
