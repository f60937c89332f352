//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod help;
mod list;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::App;

const TITLE: &str = "Toggle which SSH keys you would like";
const TITLE_COLOR: Color = Color::Rgb(0xFF, 0x75, 0xB7);

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const TITLE_HEIGHT: u16 = 2;
    const LIST_MIN_HEIGHT: u16 = 1;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(LIST_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(help::height(app)),
        ])
        .split(frame.area());

    let [title_area, list_area, status_area, help_area] = chunks.as_ref() else {
        return;
    };

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(TITLE_COLOR).add_modifier(Modifier::BOLD));
    frame.render_widget(title, *title_area);

    list::render(frame, app, *list_area);
    status::render(frame, app, *status_area);
    help::render(frame, app, *help_area);
}
