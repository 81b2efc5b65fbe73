use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PAGE_TITLE: &str = "Task Page";

/// Render page header with the API the tasks come from.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let line = Line::from(vec![
        Span::styled(PAGE_TITLE, styling::banner_style(theme)),
        Span::raw("  "),
        Span::styled(state.get_base_url().to_owned(), styling::muted_text_style(theme)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(Paragraph::new(line).block(block), size);
}
