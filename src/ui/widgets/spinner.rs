use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Frames of the loading spinner, advanced once per tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a centered spinner paragraph for an area of the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let theme = state.get_theme();
    let frame = FRAMES[state.get_spinner_index() % FRAMES.len()];
    let padding = height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        format!("{} Loading tasks...", frame),
        styling::normal_text_style(theme),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}
