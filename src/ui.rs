//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;

const CONTROLS_TEXT: &str = "[a] add | [d] remove | [C] clear | [n] new playlist | \
    [p] add to playlist | [x] delete playlist | [e] export csv | [j/k] move | [q] quit";

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" musette ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Body: catalog on the left, playlist summary on the right.
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    // Catalog list
    {
        let rows = app.rows();
        let total = rows.len();
        let list_height = body[0].height.saturating_sub(2) as usize;
        let sel_pos = app.selected.min(total.saturating_sub(1));

        // Center the selected item when possible by creating a visible window.
        // Only build ListItems for the visible window (avoid allocating the entire list).
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = if sel_pos > half { sel_pos - half } else { 0 };
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let visible_items: Vec<ListItem> = rows[start..end]
            .iter()
            .map(|line| ListItem::new(line.as_str()))
            .collect();

        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(" catalog "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, body[0], &mut state);
    }

    // Playlist summary
    {
        let items: Vec<ListItem> = app
            .library
            .playlists
            .iter()
            .map(|p| ListItem::new(format!("{} ({} track(s))", p.name, p.len())))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" playlists "));
        frame.render_widget(list, body[1]);
    }

    // Prompt / status line
    let line = if let Some(prompt) = &app.prompt {
        format!("{}: {}_", prompt.label(), prompt.input)
    } else if let Some(status) = &app.status {
        status.clone()
    } else {
        format!(
            "{} track(s), {} playlist(s)",
            app.library.tracks.len(),
            app.library.playlists.len()
        )
    };
    let status_par = Paragraph::new(line)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[2]);

    // Footer
    let footer = Paragraph::new(CONTROLS_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
