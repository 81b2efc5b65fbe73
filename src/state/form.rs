//! Form editing state types.
//!
//! This module contains the create/edit mode of the task form and the
//! fields a user moves between while filling it in.

use crate::api::TaskDraft;

/// Specifying what submitting the form does.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum FormMode {
    /// No task selected; submit creates a task.
    #[default]
    Creating,
    /// A task is selected; submit updates the task with this id.
    Editing { id: String },
}

impl FormMode {
    /// Return the heading shown above the form.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Creating => "Add New Task",
            FormMode::Editing { .. } => "Update Task",
        }
    }

    /// Return the label of the submit action.
    ///
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Creating => "Add Task",
            FormMode::Editing { .. } => "Update Task",
        }
    }
}

/// Specifying the form fields in display order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
    Category,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Priority,
        FormField::Category,
    ];

    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Category,
            FormField::Category => FormField::Title,
        }
    }

    pub fn previous(self) -> FormField {
        match self {
            FormField::Title => FormField::Category,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
            FormField::Category => FormField::Priority,
        }
    }

    /// Returns true for fields edited by typing rather than by cycling options.
    ///
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Priority)
    }

    /// Return the placeholder shown while the field is empty.
    ///
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Title => "Task Title",
            FormField::Description => "Description",
            FormField::Priority => "Select Priority",
            FormField::Category => "Category",
        }
    }

    /// Return the draft's value for this field.
    ///
    pub fn value(self, draft: &TaskDraft) -> &str {
        match self {
            FormField::Title => &draft.title,
            FormField::Description => &draft.description,
            FormField::Priority => &draft.priority,
            FormField::Category => &draft.category,
        }
    }

    /// Return mutable access to the draft's value for this field.
    ///
    pub fn value_mut(self, draft: &mut TaskDraft) -> &mut String {
        match self {
            FormField::Title => &mut draft.title,
            FormField::Description => &mut draft.description,
            FormField::Priority => &mut draft.priority,
            FormField::Category => &mut draft.category,
        }
    }
}

/// Return the priority after `current` in the cycle `["", options...]`.
/// A value not among the options restarts the cycle at the unset option.
///
pub fn cycle_priority(current: &str, options: &[String], forward: bool) -> String {
    let count = options.len() + 1;
    let position = options
        .iter()
        .position(|option| option == current)
        .map(|i| i + 1)
        .unwrap_or(0);
    let position = if forward {
        (position + 1) % count
    } else {
        (position + count - 1) % count
    };
    match position {
        0 => String::new(),
        i => options[i - 1].clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_labels() {
        assert_eq!(FormMode::default(), FormMode::Creating);
        assert_eq!(FormMode::Creating.title(), "Add New Task");
        assert_eq!(FormMode::Creating.submit_label(), "Add Task");
        let editing = FormMode::Editing {
            id: "1".to_string(),
        };
        assert_eq!(editing.title(), "Update Task");
        assert_eq!(editing.submit_label(), "Update Task");
    }

    #[test]
    fn test_form_field_cycle() {
        let mut field = FormField::Title;
        for expected in FormField::ALL.iter().skip(1) {
            field = field.next();
            assert_eq!(field, *expected);
        }
        assert_eq!(field.next(), FormField::Title);
        assert_eq!(FormField::Title.previous(), FormField::Category);
    }

    #[test]
    fn test_form_field_value_mut() {
        let mut draft = TaskDraft::default();
        FormField::Category.value_mut(&mut draft).push_str("Work");
        assert_eq!(draft.category, "Work");
        assert_eq!(FormField::Category.value(&draft), "Work");
        assert!(!FormField::Priority.is_text());
        assert!(FormField::Description.is_text());
    }

    #[test]
    fn test_cycle_priority() {
        let options = vec!["High".to_string(), "Low".to_string()];
        assert_eq!(cycle_priority("", &options, true), "High");
        assert_eq!(cycle_priority("High", &options, true), "Low");
        assert_eq!(cycle_priority("Low", &options, true), "");
        assert_eq!(cycle_priority("", &options, false), "Low");
        assert_eq!(cycle_priority("Urgent", &options, true), "High");
        assert_eq!(cycle_priority("", &[], true), "");
    }
}
