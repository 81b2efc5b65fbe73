use super::Frame;
use crate::state::{FilterFocus, Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Filters";

/// Render the category and priority selectors.
///
pub fn filters(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = state.current_focus() == Focus::Filters;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    } else {
        block = block.title(BLOCK_TITLE);
    }

    let lines: Vec<Line> = [
        ("Category:", FilterFocus::Category),
        ("Priority:", FilterFocus::Priority),
    ]
    .iter()
    .map(|(label, filter)| {
        let field = filter.field();
        let selection = state.get_filter(field).label(field).to_owned();
        let style = if focused && state.get_filter_focus() == *filter {
            styling::highlight_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        Line::from(vec![
            Span::styled(format!("{:<10}", label), styling::label_style(theme)),
            Span::styled(format!("◀ {} ▶", selection), style),
        ])
    })
    .collect();

    frame.render_widget(Paragraph::new(lines).block(block), size);
}
