use super::Frame;
use crate::state::{Focus, FormMode, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

const COLUMNS: [&str; 4] = ["Title", "Description", "Priority", "Category"];

/// Render task table for the filtered list.
///
pub fn table(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = state.current_focus() == Focus::Table;
    let title = format!(
        "Tasks ({} of {})",
        state.get_filtered_tasks().len(),
        state.get_tasks().len()
    );

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(title, styling::active_block_title_style()));
    } else {
        block = block.title(title);
    }

    if !state.is_loaded() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    if state.get_filtered_tasks().is_empty() {
        let message = if state.get_tasks().is_empty() {
            "No tasks yet. Press Tab to add one."
        } else {
            "No tasks match the selected filters."
        };
        let paragraph = Paragraph::new(message)
            .style(styling::muted_text_style(&theme))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let editing_id = match state.get_form_mode() {
        FormMode::Editing { id } => Some(id.clone()),
        FormMode::Creating => None,
    };
    let rows: Vec<Row> = state
        .get_filtered_tasks()
        .iter()
        .map(|task| {
            let style = if editing_id.as_deref() == Some(task.id.as_str()) {
                Style::default().fg(theme.accent.to_color())
            } else {
                styling::normal_text_style(&theme)
            };
            Row::new(vec![
                Cell::from(task.title.clone()),
                Cell::from(task.description.clone()),
                Cell::from(task.priority.clone()),
                Cell::from(task.category.clone()),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(styling::label_style(&theme))
        .bottom_margin(1);

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(40),
        Constraint::Percentage(15),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(styling::highlight_style(&theme))
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, size, state.get_table_state());
}
