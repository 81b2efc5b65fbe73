//! Task filtering.
//!
//! Pure functions deriving the displayed task list from the full list and the
//! two filter selections, plus the option lists the selectors cycle through.

use crate::api::Task;

/// Specifying which task field a filter applies to.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TaskField {
    Category,
    Priority,
}

impl TaskField {
    /// Return the value of this field on the task.
    ///
    pub fn value_of(self, task: &Task) -> &str {
        match self {
            TaskField::Category => &task.category,
            TaskField::Priority => &task.priority,
        }
    }

    /// Return the label of the sentinel that matches every value.
    ///
    pub fn all_label(self) -> &'static str {
        match self {
            TaskField::Category => "All Categories",
            TaskField::Priority => "All Priorities",
        }
    }
}

/// Specifying a filter selection: everything, or one exact value.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Returns true if the value passes this selection.
    ///
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    /// Return the text shown for this selection in a selector.
    ///
    pub fn label(&self, field: TaskField) -> &str {
        match self {
            Selection::All => field.all_label(),
            Selection::Only(value) => value,
        }
    }

    /// Return the selection after this one, wrapping from the last option
    /// back to `All`.
    ///
    pub fn next(&self, options: &[String]) -> Selection {
        let position = self.position(options);
        Selection::at((position + 1) % (options.len() + 1), options)
    }

    /// Return the selection before this one, wrapping from `All` to the last
    /// option.
    ///
    pub fn previous(&self, options: &[String]) -> Selection {
        let position = self.position(options);
        let count = options.len() + 1;
        Selection::at((position + count - 1) % count, options)
    }

    /// Position in the cycle `[All, options...]`. A value no longer among
    /// the options counts as `All`.
    ///
    fn position(&self, options: &[String]) -> usize {
        match self {
            Selection::All => 0,
            Selection::Only(value) => options
                .iter()
                .position(|option| option == value)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    fn at(position: usize, options: &[String]) -> Selection {
        match position {
            0 => Selection::All,
            i => Selection::Only(options[i - 1].clone()),
        }
    }
}

/// Return the tasks matching both selections, in their original order.
///
pub fn filter_tasks(tasks: &[Task], category: &Selection, priority: &Selection) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| category.matches(&task.category) && priority.matches(&task.priority))
        .cloned()
        .collect()
}

/// Return the distinct values of the field across the tasks, in order of
/// first appearance.
///
pub fn distinct_values(tasks: &[Task], field: TaskField) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for task in tasks {
        let value = field.value_of(task);
        if !values.iter().any(|v| v == value) {
            values.push(value.to_owned());
        }
    }
    values
}
