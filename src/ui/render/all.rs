use super::{confirm, filters, footer, form, header, log, table, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(8), // Form and filters
            Constraint::Min(5),    // Task table
            Constraint::Length(8), // Log
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    header(frame, rows[0], state);
    form(frame, controls[0], state);
    filters(frame, controls[1], state);
    table(frame, rows[2], state);
    log(frame, rows[3], state);
    footer(frame, rows[4], state);

    if state.has_delete_confirmation() {
        confirm::delete_confirmation(frame, size, state);
    }
}
