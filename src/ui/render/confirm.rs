use super::Frame;
use crate::api::Task;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 8;

/// Render the delete confirmation dialog over the middle of the screen.
///
pub fn delete_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let area = dialog_area(size);
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines = match state.get_delete_confirmation_task() {
        Some(task) => task_lines(task, theme, inner_width),
        None => vec![Line::from("The selected task is no longer listed.")],
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/y: delete   Esc/n: keep",
        styling::muted_text_style(theme),
    )));

    let border = Style::default()
        .fg(theme.error.to_color())
        .add_modifier(Modifier::BOLD);
    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(Span::styled("Delete Task", border))
            .borders(Borders::ALL)
            .border_style(border),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// Title on its own line, then category and priority when set.
///
fn task_lines(task: &Task, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let details: Vec<&str> = [task.category.as_str(), task.priority.as_str()]
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate(&task.title, width),
            styling::banner_style(theme),
        )),
    ];
    if !details.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&details.join(" · "), width),
            styling::normal_text_style(theme),
        )));
    }
    lines
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// A fixed-size rectangle centered in `size`, shrunk to fit small terminals.
///
fn dialog_area(size: Rect) -> Rect {
    let width = DIALOG_WIDTH.min(size.width);
    let height = DIALOG_HEIGHT.min(size.height);
    Rect {
        x: size.x + (size.width - width) / 2,
        y: size.y + (size.height - height) / 2,
        width,
        height,
    }
}
