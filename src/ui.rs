//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::app::{App, InputMode};
use crate::commands::Context;
use crate::config::UiSettings;
use crate::song::Song;


/// Build the row text for `song` from the configured columns.
///
/// Columns the song lacks are skipped; a song with none of them shows its
/// file path.
pub(crate) fn song_row(song: &Song, ui: &UiSettings) -> String {
    let parts: Vec<&str> = ui
        .columns
        .iter()
        .filter_map(|c| song.tag(c))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    if parts.is_empty() {
        song.file().unwrap_or("?").to_string()
    } else {
        parts.join(&ui.column_separator)
    }
}

/// Title of the list box, e.g. `[1/3] Queue (42 songs)`.
pub(crate) fn list_title(app: &App, name: &str, len: usize) -> String {
    format!(
        " [{}/{}] {} ({} song{}) ",
        app.active_index() + 1,
        app.list_count(),
        name,
        len,
        if len == 1 { "" } else { "s" }
    )
}

/// Text of the bottom line: the command being typed, else the last message.
pub(crate) fn status_text(app: &App) -> (String, bool) {
    if app.mode == InputMode::Command {
        return (format!(":{}", app.input), false);
    }
    match &app.message {
        Some(msg) => (msg.text.clone(), msg.is_error),
        None if !app.is_connected() => ("disconnected".to_string(), true),
        None => ("[:] command | [enter] play | [tab] next list | [q] quit".to_string(), false),
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" lento ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Main list
    {
        let songlist = app.active_songlist().lock();
        let total = songlist.len();

        // Only build ListItems for the visible window, centered on the cursor.
        let list_height = chunks[1].height.saturating_sub(2) as usize;
        let sel_pos = app.cursor.min(total.saturating_sub(1));
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = sel_pos.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let visible_items: Vec<ListItem> = songlist.songs()[start..end]
            .iter()
            .map(|song| ListItem::new(song_row(song, ui_settings)))
            .collect();

        let list = List::new(visible_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(list_title(app, songlist.name(), total)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    let (text, is_error) = status_text(app);
    let style = if is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let status = Paragraph::new(text).style(style).block(Block::default().padding(Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }));
    frame.render_widget(status, chunks[2]);
}
