use super::Frame;
use crate::state::{FormField, Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render task form. The heading and submit label follow the form mode.
///
pub fn form(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = state.current_focus() == Focus::Form;
    let mode = state.get_form_mode();
    let draft = state.get_draft();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(mode.title(), styling::active_block_title_style()));
    } else {
        block = block.title(mode.title());
    }

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| {
            let value = field.value(draft);
            let current = focused && *field == state.get_form_field();
            let text = match (field, value.is_empty()) {
                (FormField::Priority, true) => format!("◀ {} ▶", field.placeholder()),
                (FormField::Priority, false) => format!("◀ {} ▶", value),
                (_, true) if current => "_".to_string(),
                (_, true) => field.placeholder().to_string(),
                (_, false) if current => format!("{}_", value),
                (_, false) => value.to_string(),
            };
            let style = if current {
                styling::highlight_style(theme)
            } else if value.is_empty() {
                styling::muted_text_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            Line::from(vec![
                Span::styled(format!("{:<13}", label(*field)), styling::label_style(theme)),
                Span::styled(text, style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]  (Enter)", mode.submit_label()),
        styling::label_style(theme),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), size);
}

fn label(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Title",
        FormField::Description => "Description",
        FormField::Priority => "Priority",
        FormField::Category => "Category",
    }
}
