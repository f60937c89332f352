//! Status bar
//!
//! Displays the latest status message, or how many keys are enabled.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.status_message() {
        Some(message) if message.starts_with("Error") => (message.to_owned(), Color::Red),
        Some(message) => (message.to_owned(), Color::Yellow),
        None => {
            let store = app.store();
            (format!("{} of {} enabled", store.selected().count(), store.len()), Color::DarkGray)
        },
    };

    frame.render_widget(Paragraph::new(text).style(Style::default().fg(color)), area);
}
