use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use audiotext_tui::clipboard::{copy_to_clipboard, detect_clipboard_backend};
use audiotext_tui::models::Severity;
use audiotext_tui::store::TranscriptStore;
use audiotext_tui::surface::Screen;
use audiotext_tui::ui::{App, draw};
use audiotext_tui::utils::constants::POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{LevelFilter, error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use signal_hook::consts::signal::*;
use signal_hook::iterator::Signals;

// ============================================================================
// SIGNAL LISTENER
// ============================================================================

fn start_signal_listener(shutdown: Arc<AtomicBool>) {
    thread::spawn(move || {
        if let Ok(mut signals) = Signals::new([SIGTERM, SIGINT]) {
            for signal in signals.forever() {
                if signal == SIGTERM || signal == SIGINT {
                    shutdown.store(true, Ordering::Relaxed);
                    break;
                }
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

fn run_ui(shutdown: Arc<AtomicBool>) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TranscriptStore::open();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let mut screen = Screen::new();
    screen.bootstrap();

    let mut app = App::new();

    loop {
        store.reload_if_changed();
        screen.prune_messages(Instant::now());

        if let Some(done) = app.poll_copy() {
            if done {
                screen.show_message("Transcript copied to clipboard", Severity::Success);
            } else {
                screen.show_message("Failed to copy to clipboard", Severity::Error);
            }
        }

        let entries = store.entries().to_vec();

        terminal.draw(|f| draw(f, &mut app, &screen, &entries))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let CrosstermEvent::Key(KeyEvent { code, .. }) = event::read()? {
                let count = entries.len();
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Down | KeyCode::Char('j') => app.next(count),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(count),
                    KeyCode::Char('m') | KeyCode::Char('M') => screen.click_menu_toggle(),
                    KeyCode::Char('x') | KeyCode::Char('X') if count > 0 => {
                        store.clear();
                        screen.show_message("Cleared transcription history", Severity::Warning);
                    }
                    KeyCode::Enter if count > 0 => {
                        if let Some(entry) = app.selected().and_then(|i| entries.get(i)) {
                            app.pending_copy = Some(copy_to_clipboard(&entry.text));
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit || shutdown.load(Ordering::Relaxed) {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .ok();

    info!("clipboard backend: {:?}", detect_clipboard_backend());

    let shutdown = Arc::new(AtomicBool::new(false));
    start_signal_listener(Arc::clone(&shutdown));

    if let Err(e) = run_ui(shutdown) {
        error!("UI error: {e}");
        std::process::exit(1);
    }
}
