use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, InputMode};
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: draws the UI and dispatches key presses.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // The queue may have shrunk under us in the refresh thread.
        app.clamp_cursor();

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press. Returns `true` when the app should exit.
pub fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.mode {
        InputMode::Command => {
            state.pending_gg = false;
            match key.code {
                KeyCode::Esc => app.cancel_command(),
                KeyCode::Backspace => app.pop_input_char(),
                KeyCode::Enter => app.submit_command(),
                KeyCode::Char(c) if !c.is_control() => app.push_input_char(c),
                _ => {}
            }
        }
        InputMode::Normal => {
            if key.code != KeyCode::Char('g') {
                state.pending_gg = false;
            }
            match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Char(':') => app.enter_command_mode(),
                KeyCode::Char('j') | KeyCode::Down => app.next(),
                KeyCode::Char('k') | KeyCode::Up => app.prev(),
                KeyCode::Char('g') => {
                    if state.pending_gg {
                        state.pending_gg = false;
                        app.top();
                    } else {
                        state.pending_gg = true;
                    }
                }
                KeyCode::Char('G') => app.bottom(),
                KeyCode::Tab => app.next_list(),
                KeyCode::Char('D') => app.close_active(),
                KeyCode::Enter => app.execute("play cursor"),
                KeyCode::Char('p') => app.execute("play"),
                _ => {}
            }
        }
    }
    false
}
