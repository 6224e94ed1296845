//! Help overlay

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme::THEME;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Down", "kontrol berikutnya"),
    ("Shift-Tab / Up", "kontrol sebelumnya"),
    ("+ / Right", "naikkan nilai / opsi berikutnya"),
    ("- / Left", "turunkan nilai / opsi sebelumnya"),
    ("0-9 .", "ketik nilai numerik"),
    ("Backspace", "hapus karakter"),
    ("Enter", "Prediksi Risiko"),
    ("Esc", "batalkan ketikan / keluar"),
    ("r", "kembalikan nilai awal"),
    ("?", "tutup bantuan"),
    ("q / Ctrl-C", "keluar"),
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered(area, 56, BINDINGS.len() as u16 + 2);
    let block = Block::default()
        .title(" BANTUAN ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!(" {key:<16}"), THEME.highlight_style()),
                Span::styled(*what, THEME.text_style()),
            ])
        })
        .collect();

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(row);
    cell
}
