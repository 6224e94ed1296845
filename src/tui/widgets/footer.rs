//! Footer status bar and disclaimer line

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::report::DISCLAIMER;
use crate::tui::app::FormApp;
use crate::tui::theme::THEME;

/// Render the footer status bar
pub fn render_footer(f: &mut Frame, area: Rect, app: &FormApp) {
    let line = Line::from(vec![
        Span::raw("  Model: "),
        Span::styled(app.model_description.clone(), THEME.highlight_style()),
        Span::raw("  Prediksi: "),
        Span::styled(app.session.submissions().to_string(), THEME.highlight_style()),
        Span::raw("  "),
        Span::styled(
            "[Tab] pindah  [+/-] ubah  [Enter] prediksi  [r] reset  [?] bantuan  [q] keluar",
            THEME.inactive_style(),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(DISCLAIMER, THEME.inactive_style()))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
