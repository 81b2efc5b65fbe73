use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines task data structure as returned by the API.
///
/// The identifier is assigned by the server and travels under the `_id` key.
/// Any field missing from a payload decodes as an empty string.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub category: String,
}

/// Defines the pending, not-yet-submitted form representation of a task.
///
/// Carries no identifier, so serializing a draft never sends one.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub category: String,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.clone(),
            category: task.category.clone(),
        }
    }
}
