//! Form panel widget
//!
//! Continuous controls under "Data Umum & Klinis", coded choices under
//! "Data Kategorikal", then the submit button and any range notice.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{FeatureColumn, FeatureKind};
use crate::tui::app::FormApp;
use crate::tui::theme::THEME;

const LABEL_WIDTH: usize = 34;

/// Render the input form
pub fn render_form(f: &mut Frame, area: Rect, app: &FormApp) {
    let block = Block::default()
        .title(" DATA PASIEN ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let form = &app.form;
    let mut lines = vec![Line::from(Span::styled("Data Umum & Klinis", THEME.highlight_style()))];
    let mut in_choices = false;

    for column in form.controls() {
        if column.kind() == FeatureKind::Discrete && !in_choices {
            in_choices = true;
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("Data Kategorikal", THEME.highlight_style())));
        }
        lines.push(control_line(app, *column));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("[ Prediksi Risiko ]  (Enter)", THEME.title_style())));

    if let Some(notice) = form.notice() {
        lines.push(Line::from(Span::styled(notice.to_string(), THEME.error_style())));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn control_line(app: &FormApp, column: FeatureColumn) -> Line<'static> {
    let form = &app.form;
    let focused = form.focused() == column;
    let marker = if focused { "> " } else { "  " };

    let value = match column.kind() {
        FeatureKind::Continuous => {
            if focused && form.editing().is_some() {
                format!("{}_", form.display(column))
            } else {
                format!("- {} +", form.display(column))
            }
        }
        FeatureKind::Discrete => format!("< {} >", form.display(column)),
    };

    let value_style = if focused {
        THEME.focus_style()
    } else {
        THEME.text_style()
    };

    Line::from(vec![
        Span::styled(marker, THEME.highlight_style()),
        Span::styled(
            format!("{:<width$}", column.label(), width = LABEL_WIDTH),
            THEME.inactive_style(),
        ),
        Span::styled(value, value_style),
    ])
}
