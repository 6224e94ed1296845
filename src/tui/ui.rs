//! Main UI rendering logic
//!
//! Orchestrates the layout and renders all widgets.

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::tui::app::FormApp;
use crate::tui::widgets;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &FormApp) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Title + intro
        Constraint::Min(16),   // Form | result
        Constraint::Length(2), // Disclaimer
        Constraint::Length(1), // Footer status bar
    ])
    .split(f.area());

    widgets::render_header(f, chunks[0]);

    let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    widgets::render_form(f, body[0], app);
    widgets::render_result(f, body[1], app);

    widgets::render_disclaimer(f, chunks[2]);
    widgets::render_footer(f, chunks[3], app);

    if app.show_help {
        widgets::render_help(f, f.area());
    }
}
