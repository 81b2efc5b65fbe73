use super::Frame;
use crate::state::{FormField, Focus, State};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and key hints for the current focus.
///
fn controls(state: &State) -> (&'static str, &'static str) {
    if state.has_delete_confirmation() {
        return ("DELETE:", " Enter/y: confirm delete, Esc/n: cancel");
    }
    match state.current_focus() {
        Focus::Form if state.get_form_field() == FormField::Priority => (
            "FORM:",
            " ←→: choose priority, ↑↓: fields, Enter: submit, Tab: next area, Esc: table",
        ),
        Focus::Form => (
            "FORM:",
            " Type to edit, ↑↓: fields, Enter: submit, Tab: next area, Esc: table",
        ),
        Focus::Filters => (
            "FILTERS:",
            " ↑↓: selector, ←→: value, Tab: next area, Esc: table, q: quit",
        ),
        Focus::Table => (
            "TASKS:",
            " j/k: navigate, Enter/e: update, d: delete, r: refresh, Tab: next area, q: quit",
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (mode, hints) = controls(state);
    let mode_color = if state.has_delete_confirmation() {
        theme.error.to_color()
    } else {
        theme.primary.to_color()
    };
    let line = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, Style::default().fg(theme.text_muted.to_color())),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
