//! Title and intro line

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::report::{APP_INTRO, APP_TITLE};
use crate::tui::theme::THEME;

pub fn render_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", APP_TITLE.to_uppercase()))
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let paragraph = Paragraph::new(Line::from(Span::styled(APP_INTRO, THEME.text_style())))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
