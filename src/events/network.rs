use crate::api::{TaskApi, TaskDraft};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    FetchTasks,
    CreateTask { draft: TaskDraft },
    UpdateTask { id: String, draft: TaskDraft },
    DeleteTask { id: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a TaskApi,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a TaskApi) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type. A failed request leaves the task list,
    /// draft and form mode untouched and is returned to the caller.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchTasks => self.fetch_tasks().await?,
            Event::CreateTask { draft } => self.create_task(draft).await?,
            Event::UpdateTask { id, draft } => self.update_task(id, draft).await?,
            Event::DeleteTask { id } => self.delete_task(id).await?,
        }
        Ok(())
    }

    /// Replace the task list in state with the server's copy.
    ///
    async fn fetch_tasks(&mut self) -> Result<()> {
        info!("Fetching tasks from {}...", self.api.base_url());
        let tasks = match self.api.list_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!("Failed to fetch tasks: {}", e);
                self.state.lock().await.finish_failed_fetch();
                return Err(e.into());
            }
        };
        info!("Received {} tasks.", tasks.len());
        let mut state = self.state.lock().await;
        state.set_tasks(tasks);
        Ok(())
    }

    /// Create a task, then reset the form and reload the list.
    ///
    async fn create_task(&mut self, draft: TaskDraft) -> Result<()> {
        info!("Creating task '{}'...", draft.title);
        if let Err(e) = self.api.create_task(&draft).await {
            error!("Failed to create task '{}': {}", draft.title, e);
            return Err(e.into());
        }
        info!("Created task '{}'.", draft.title);
        {
            let mut state = self.state.lock().await;
            state.finish_submit();
        }
        self.fetch_tasks().await
    }

    /// Update a task, then reset the form and reload the list.
    ///
    async fn update_task(&mut self, id: String, draft: TaskDraft) -> Result<()> {
        info!("Updating task {}...", id);
        if let Err(e) = self.api.update_task(&id, &draft).await {
            error!("Failed to update task {}: {}", id, e);
            return Err(e.into());
        }
        info!("Updated task {}.", id);
        {
            let mut state = self.state.lock().await;
            state.finish_submit();
        }
        self.fetch_tasks().await
    }

    /// Delete a task, then reload the list.
    ///
    async fn delete_task(&mut self, id: String) -> Result<()> {
        info!("Deleting task {}...", id);
        if let Err(e) = self.api.delete_task(&id).await {
            error!("Failed to delete task {}: {}", id, e);
            return Err(e.into());
        }
        info!("Deleted task {}.", id);
        self.fetch_tasks().await
    }
}
