use crate::api::{Task, TaskDraft};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::TableState;

use super::error::StateError;
use super::filter::{distinct_values, filter_tasks, Selection, TaskField};
use super::form::{cycle_priority, FormField, FormMode};
use super::navigation::{FilterFocus, Focus};

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    log_buffer: LogBuffer,
    base_url: String,
    theme: Theme,
    spinner_index: usize,
    current_focus: Focus,
    filter_focus: FilterFocus,
    tasks_loaded: bool,
    tasks: Vec<Task>,
    filtered_tasks: Vec<Task>,
    category_filter: Selection,
    priority_filter: Selection,
    table_state: TableState,
    draft: TaskDraft,
    form_mode: FormMode,
    form_field: FormField,
    delete_confirmation: Option<String>, // Id of task pending deletion confirmation
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            log_buffer: LogBuffer::default(),
            base_url: String::new(),
            theme: Theme::default(),
            spinner_index: 0,
            current_focus: Focus::default(),
            filter_focus: FilterFocus::default(),
            tasks_loaded: false,
            tasks: vec![],
            filtered_tasks: vec![],
            category_filter: Selection::All,
            priority_filter: Selection::All,
            table_state: TableState::default(),
            draft: TaskDraft::default(),
            form_mode: FormMode::Creating,
            form_field: FormField::Title,
            delete_confirmation: None,
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        log_buffer: LogBuffer,
        base_url: String,
        theme: Theme,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            log_buffer,
            base_url,
            theme,
            ..State::default()
        }
    }

    /// Send a network event to the networking thread.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to dispatch network event: {}", e);
                }
            }
            None => warn!("No network sender set, dropping event '{:?}'.", event),
        }
    }

    /// Request a fresh copy of the task list.
    ///
    pub fn refresh(&self) {
        self.dispatch(NetworkEvent::FetchTasks);
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Advance the spinner by one frame, wrapping at the last frame.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    /// Return a snapshot of the captured log lines, oldest first.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        match self.log_buffer.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(_) => vec![],
        }
    }

    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    pub fn set_focus(&mut self, focus: Focus) -> &mut Self {
        self.current_focus = focus;
        self
    }

    pub fn next_focus(&mut self) -> &mut Self {
        self.current_focus = self.current_focus.next();
        self
    }

    pub fn previous_focus(&mut self) -> &mut Self {
        self.current_focus = self.current_focus.previous();
        self
    }

    pub fn get_filter_focus(&self) -> FilterFocus {
        self.filter_focus
    }

    pub fn toggle_filter_focus(&mut self) -> &mut Self {
        self.filter_focus = self.filter_focus.toggle();
        self
    }

    /// Returns true once the first fetch has finished, whether or not it
    /// succeeded.
    ///
    pub fn is_loaded(&self) -> bool {
        self.tasks_loaded
    }

    /// Record a fetch that failed. The current list is kept.
    ///
    pub fn finish_failed_fetch(&mut self) -> &mut Self {
        self.tasks_loaded = true;
        self
    }

    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the task list with the server's copy and recompute the
    /// filtered list.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.tasks = tasks;
        self.tasks_loaded = true;
        self.refilter();
        self
    }

    pub fn get_filtered_tasks(&self) -> &[Task] {
        &self.filtered_tasks
    }

    /// Return the distinct values present in the loaded list for the field.
    ///
    pub fn get_options(&self, field: TaskField) -> Vec<String> {
        distinct_values(&self.tasks, field)
    }

    pub fn get_filter(&self, field: TaskField) -> &Selection {
        match field {
            TaskField::Category => &self.category_filter,
            TaskField::Priority => &self.priority_filter,
        }
    }

    pub fn set_filter(&mut self, field: TaskField, selection: Selection) -> &mut Self {
        debug!("Setting {:?} filter to {:?}", field, selection);
        match field {
            TaskField::Category => self.category_filter = selection,
            TaskField::Priority => self.priority_filter = selection,
        }
        self.refilter();
        self
    }

    /// Move the focused filter selector to its next value.
    ///
    pub fn next_filter_value(&mut self) -> &mut Self {
        let field = self.filter_focus.field();
        let selection = self.get_filter(field).next(&self.get_options(field));
        self.set_filter(field, selection)
    }

    /// Move the focused filter selector to its previous value.
    ///
    pub fn previous_filter_value(&mut self) -> &mut Self {
        let field = self.filter_focus.field();
        let selection = self.get_filter(field).previous(&self.get_options(field));
        self.set_filter(field, selection)
    }

    fn refilter(&mut self) {
        self.filtered_tasks = filter_tasks(&self.tasks, &self.category_filter, &self.priority_filter);
        let selected = match (self.filtered_tasks.len(), self.table_state.selected()) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
        self.table_state.select(selected);
    }

    pub fn get_table_state(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    /// Return the task under the table cursor.
    ///
    pub fn get_current_task(&self) -> Option<&Task> {
        self.table_state
            .selected()
            .and_then(|index| self.filtered_tasks.get(index))
    }

    pub fn next_task(&mut self) -> &mut Self {
        if !self.filtered_tasks.is_empty() {
            let index = match self.table_state.selected() {
                Some(index) if index + 1 < self.filtered_tasks.len() => index + 1,
                _ => 0,
            };
            self.table_state.select(Some(index));
        }
        self
    }

    pub fn previous_task(&mut self) -> &mut Self {
        if !self.filtered_tasks.is_empty() {
            let index = match self.table_state.selected() {
                Some(index) if index > 0 => index - 1,
                _ => self.filtered_tasks.len() - 1,
            };
            self.table_state.select(Some(index));
        }
        self
    }

    pub fn get_draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn get_form_mode(&self) -> &FormMode {
        &self.form_mode
    }

    pub fn get_form_field(&self) -> FormField {
        self.form_field
    }

    pub fn next_form_field(&mut self) -> &mut Self {
        self.form_field = self.form_field.next();
        self
    }

    pub fn previous_form_field(&mut self) -> &mut Self {
        self.form_field = self.form_field.previous();
        self
    }

    /// Append a character to the focused text field of the draft.
    ///
    pub fn add_form_char(&mut self, c: char) -> &mut Self {
        if self.form_field.is_text() {
            self.form_field.value_mut(&mut self.draft).push(c);
        }
        self
    }

    /// Remove the last character of the focused text field of the draft.
    ///
    pub fn remove_form_char(&mut self) -> &mut Self {
        if self.form_field.is_text() {
            self.form_field.value_mut(&mut self.draft).pop();
        }
        self
    }

    /// Cycle the draft's priority through the priorities of the loaded list.
    ///
    pub fn cycle_form_priority(&mut self, forward: bool) -> &mut Self {
        let options = self.get_options(TaskField::Priority);
        self.draft.priority = cycle_priority(&self.draft.priority, &options, forward);
        self
    }

    /// Copy the task into the draft and switch the form to editing it.
    ///
    pub fn select_task(&mut self, id: &str) -> Result<(), StateError> {
        let task = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or_else(|| StateError::TaskNotFound { id: id.to_owned() })?;
        debug!("Selected task {} for update", id);
        self.draft = TaskDraft::from(task);
        self.form_mode = FormMode::Editing { id: id.to_owned() };
        self.form_field = FormField::Title;
        Ok(())
    }

    /// Select the task under the table cursor for update and focus the form.
    ///
    pub fn select_current_task(&mut self) -> Result<(), StateError> {
        let id = self
            .get_current_task()
            .map(|task| task.id.clone())
            .ok_or(StateError::NoTaskSelected)?;
        self.select_task(&id)?;
        self.current_focus = Focus::Form;
        Ok(())
    }

    /// Dispatch a create or an update of the draft depending on the form mode.
    ///
    pub fn submit_form(&self) {
        let draft = self.draft.clone();
        match &self.form_mode {
            FormMode::Creating => self.dispatch(NetworkEvent::CreateTask { draft }),
            FormMode::Editing { id } => self.dispatch(NetworkEvent::UpdateTask {
                id: id.clone(),
                draft,
            }),
        }
    }

    /// Return the form to creating with an empty draft.
    ///
    pub fn finish_submit(&mut self) -> &mut Self {
        self.draft = TaskDraft::default();
        self.form_mode = FormMode::Creating;
        self.form_field = FormField::Title;
        self
    }

    pub fn has_delete_confirmation(&self) -> bool {
        self.delete_confirmation.is_some()
    }

    /// Return the task pending deletion if it is still in the loaded list.
    ///
    pub fn get_delete_confirmation_task(&self) -> Option<&Task> {
        let id = self.delete_confirmation.as_ref()?;
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Ask for confirmation before deleting the task under the table cursor.
    ///
    pub fn request_delete_current(&mut self) -> Result<(), StateError> {
        let id = self
            .get_current_task()
            .map(|task| task.id.clone())
            .ok_or(StateError::NoTaskSelected)?;
        self.delete_confirmation = Some(id);
        Ok(())
    }

    pub fn cancel_delete_confirmation(&mut self) -> &mut Self {
        self.delete_confirmation = None;
        self
    }

    /// Dispatch the pending deletion, if any.
    ///
    pub fn confirm_delete(&mut self) -> &mut Self {
        if let Some(id) = self.delete_confirmation.take() {
            self.dispatch(NetworkEvent::DeleteTask { id });
        }
        self
    }
}
