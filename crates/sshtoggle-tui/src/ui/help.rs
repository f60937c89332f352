//! Help line
//!
//! Short help lists the help and quit keys; full help lists every binding.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use sshtoggle_app::keymap::{self, KEY_BINDINGS, KeyBinding};

use crate::App;

const SEPARATOR: &str = " • ";
const KEY_COLUMN_WIDTH: usize = 12;

/// Rows needed for the help area.
pub fn height(app: &App) -> u16 {
    if app.show_help() { KEY_BINDINGS.len() as u16 } else { 1 }
}

/// Render the help area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default().fg(Color::Gray);
    let desc_style = Style::default().fg(Color::DarkGray);

    let lines: Vec<Line> = if app.show_help() {
        KEY_BINDINGS
            .iter()
            .map(|binding| {
                Line::from(vec![
                    Span::styled(format!("{:<KEY_COLUMN_WIDTH$}", binding.help_key), key_style),
                    Span::styled(binding.description, desc_style),
                ])
            })
            .collect()
    } else {
        let bindings: Vec<&KeyBinding> = keymap::short_help().collect();
        let mut spans = Vec::new();
        for (index, binding) in bindings.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, desc_style));
            }
            spans.push(Span::styled(format!("{} ", binding.help_key), key_style));
            spans.push(Span::styled(binding.description, desc_style));
        }
        vec![Line::from(spans)]
    };

    frame.render_widget(Paragraph::new(lines), area);
}
