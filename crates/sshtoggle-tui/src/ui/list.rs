//! Key list
//!
//! One row per record with a cursor marker and a checkbox.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::App;

const CURSOR_MARKER: &str = ">";
const NO_CURSOR: &str = " ";
const CHECKED: &str = "x";
const UNCHECKED: &str = " ";
const EMPTY_TEXT: &str = "No [[ssh-keys]] entries";

/// Render the key list.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let store = app.store();
    if store.is_empty() {
        let placeholder = Paragraph::new(EMPTY_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = store
        .entries()
        .map(|(position, record, selected)| {
            let at_cursor = position == app.cursor();
            let marker = if at_cursor { CURSOR_MARKER } else { NO_CURSOR };
            let check = if selected { CHECKED } else { UNCHECKED };

            let style = if at_cursor {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!("{marker} [{check}] ")),
                Span::styled(record.label(), style),
            ]))
        })
        .collect();

    // Selecting the cursor row keeps it scrolled into view.
    let mut state = ListState::default().with_selected(Some(app.cursor()));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}
