use crate::state::{FormField, Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => error!("Failed to poll terminal events: {}", e),
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.has_delete_confirmation() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                debug!("Processing confirm delete event '{:?}'...", key);
                state.confirm_delete();
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                debug!("Processing cancel delete confirmation event '{:?}'...", key);
                state.cancel_delete_confirmation();
            }
            _ => (),
        }
        return true;
    }

    match key.code {
        KeyCode::Tab => {
            state.next_focus();
            return true;
        }
        KeyCode::BackTab => {
            state.previous_focus();
            return true;
        }
        _ => (),
    }

    match state.current_focus() {
        Focus::Form => handle_form_key(state, key),
        Focus::Filters => handle_filters_key(state, key),
        Focus::Table => handle_table_key(state, key),
    }
}

/// Keys while the form has focus. Printable characters go to the draft.
///
fn handle_form_key(state: &mut State, key: KeyEvent) -> bool {
    let field = state.get_form_field();
    match key.code {
        KeyCode::Esc => {
            state.set_focus(Focus::Table);
        }
        KeyCode::Enter => {
            debug!("Processing submit form event '{:?}'...", key);
            state.submit_form();
        }
        KeyCode::Up => {
            state.previous_form_field();
        }
        KeyCode::Down => {
            state.next_form_field();
        }
        KeyCode::Left if field == FormField::Priority => {
            state.cycle_form_priority(false);
        }
        KeyCode::Right if field == FormField::Priority => {
            state.cycle_form_priority(true);
        }
        KeyCode::Backspace => {
            state.remove_form_char();
        }
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            state.add_form_char(c);
        }
        _ => (),
    }
    true
}

/// Keys while the filter selectors have focus.
///
fn handle_filters_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Esc => {
            state.set_focus(Focus::Table);
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
            state.toggle_filter_focus();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.previous_filter_value();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.next_filter_value();
        }
        _ => (),
    }
    true
}

/// Keys while the task table has focus.
///
fn handle_table_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_task();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_task();
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            debug!("Processing select task event '{:?}'...", key);
            if let Err(e) = state.select_current_task() {
                warn!("Cannot select task for update: {}", e);
            }
        }
        KeyCode::Char('d') => {
            debug!("Processing delete task event '{:?}'...", key);
            if let Err(e) = state.request_delete_current() {
                warn!("Cannot delete task: {}", e);
            }
        }
        KeyCode::Char('r') => {
            debug!("Processing refresh event '{:?}'...", key);
            state.refresh();
        }
        _ => (),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Task;
    use crate::events::network::Event as NetworkEvent;
    use crate::logger::LogBuffer;
    use crate::state::{FormMode, Selection, TaskField};
    use crate::ui::Theme;
    use std::sync::mpsc::{channel, Receiver};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn task(id: &str, category: &str, priority: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            category: category.to_string(),
            priority: priority.to_string(),
        }
    }

    fn loaded_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        let mut state = State::new(tx, LogBuffer::default(), String::new(), Theme::default());
        state.set_tasks(vec![task("1", "Work", "High"), task("2", "Home", "Low")]);
        (state, rx)
    }

    #[test]
    fn ctrl_c_always_exits() {
        let (mut state, _rx) = loaded_state();
        state.set_focus(Focus::Form);
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn q_exits_from_table_but_types_in_form() {
        let (mut state, _rx) = loaded_state();
        assert!(!handle_key(&mut state, key(KeyCode::Char('q'))));
        state.set_focus(Focus::Form);
        assert!(handle_key(&mut state, key(KeyCode::Char('q'))));
        assert_eq!(state.get_draft().title, "q");
    }

    #[test]
    fn tab_cycles_focus() {
        let (mut state, _rx) = loaded_state();
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_focus(), Focus::Form);
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_focus(), Focus::Table);
    }

    #[test]
    fn typing_and_submitting_creates_task() {
        let (mut state, rx) = loaded_state();
        state.set_focus(Focus::Form);
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT));
        handle_key(&mut state, key(KeyCode::Char('x')));
        handle_key(&mut state, key(KeyCode::Backspace));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Right));
        handle_key(&mut state, key(KeyCode::Enter));
        match rx.try_recv().unwrap() {
            NetworkEvent::CreateTask { draft } => {
                assert_eq!(draft.title, "W");
                assert_eq!(draft.priority, "High");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn enter_on_table_selects_task_for_update() {
        let (mut state, rx) = loaded_state();
        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.current_focus(), Focus::Form);
        assert_eq!(
            *state.get_form_mode(),
            FormMode::Editing {
                id: "2".to_string()
            }
        );
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::UpdateTask { id, .. } if id == "2"
        ));
    }

    #[test]
    fn delete_flow_needs_confirmation() {
        let (mut state, rx) = loaded_state();
        handle_key(&mut state, key(KeyCode::Char('d')));
        assert!(state.has_delete_confirmation());
        // Other keys are swallowed by the dialog.
        assert!(handle_key(&mut state, key(KeyCode::Char('q'))));
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::DeleteTask { id } if id == "1"
        ));
    }

    #[test]
    fn esc_cancels_delete() {
        let (mut state, rx) = loaded_state();
        handle_key(&mut state, key(KeyCode::Char('d')));
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.has_delete_confirmation());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn filter_keys_change_selection() {
        let (mut state, _rx) = loaded_state();
        state.set_focus(Focus::Filters);
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(
            *state.get_filter(TaskField::Category),
            Selection::Only("Work".to_string())
        );
        assert_eq!(state.get_filtered_tasks().len(), 1);
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(
            *state.get_filter(TaskField::Priority),
            Selection::Only("Low".to_string())
        );
        assert!(state.get_filtered_tasks().is_empty());
    }

    #[test]
    fn r_refreshes() {
        let (mut state, rx) = loaded_state();
        handle_key(&mut state, key(KeyCode::Char('r')));
        assert!(matches!(rx.try_recv().unwrap(), NetworkEvent::FetchTasks));
    }
}
