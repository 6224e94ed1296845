//! Result panel widget
//!
//! Shows the latest assessment: probability, colored verdict, advisory and
//! an echo of the submitted inputs. Before the first submission it shows an
//! instruction instead.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::report::{RiskAssessment, PROBABILITY_CAPTION};
use crate::tui::app::FormApp;
use crate::tui::theme::THEME;

/// Render the assessment panel
pub fn render_result(f: &mut Frame, area: Rect, app: &FormApp) {
    let block = Block::default()
        .title(" HASIL PREDIKSI ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let session = &app.session;
    match session.result() {
        Some(assessment) => render_assessment(f, inner, assessment),
        None => {
            let mut lines = Vec::new();
            if let Some(err) = session.last_error() {
                lines.push(Line::from(Span::styled(err.to_string(), THEME.error_style())));
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                "Isi data pasien lalu tekan Enter untuk melihat prediksi.",
                THEME.inactive_style(),
            )));
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
    }
}

fn render_assessment(f: &mut Frame, area: Rect, assessment: &RiskAssessment) {
    let chunks = Layout::vertical([
        Constraint::Length(5), // Probability, label, advisory
        Constraint::Min(5),    // Input echo
    ])
    .split(area);

    let risk_style = THEME.risk_style(assessment.level.is_high());
    let summary = vec![
        Line::from(vec![
            Span::styled(format!("{PROBABILITY_CAPTION}: "), THEME.text_style()),
            Span::styled(assessment.percent.clone(), THEME.highlight_style()),
        ]),
        Line::from(Span::styled(assessment.label, risk_style)),
        Line::from(Span::styled(assessment.advisory, THEME.text_style())),
    ];
    f.render_widget(Paragraph::new(summary).wrap(Wrap { trim: true }), chunks[0]);

    let header = Row::new(vec!["Kolom", "Data", "Nilai", "Kode"]).style(THEME.title_style());
    let rows = assessment.inputs.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.column.clone()).style(THEME.inactive_style()),
            Cell::from(row.label.clone()),
            Cell::from(row.value.clone()).style(THEME.highlight_style()),
            Cell::from(row.code.clone()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Percentage(50),
            Constraint::Percentage(40),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Data yang dimasukkan ")
            .borders(Borders::TOP)
            .border_style(THEME.border_style()),
    );
    f.render_widget(table, chunks[1]);
}
