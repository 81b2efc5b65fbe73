//! Navigation-related state types.
//!
//! This module contains enums related to which area of the screen has focus.

use super::filter::TaskField;

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Focus {
    Form,
    Filters,
    #[default]
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Form => Focus::Filters,
            Focus::Filters => Focus::Table,
            Focus::Table => Focus::Form,
        }
    }

    pub fn previous(self) -> Focus {
        match self {
            Focus::Form => Focus::Table,
            Focus::Filters => Focus::Form,
            Focus::Table => Focus::Filters,
        }
    }
}

/// Specifying which filter selector is active within the filters area.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FilterFocus {
    #[default]
    Category,
    Priority,
}

impl FilterFocus {
    pub fn toggle(self) -> FilterFocus {
        match self {
            FilterFocus::Category => FilterFocus::Priority,
            FilterFocus::Priority => FilterFocus::Category,
        }
    }

    pub fn field(self) -> TaskField {
        match self {
            FilterFocus::Category => TaskField::Category,
            FilterFocus::Priority => TaskField::Priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::default(), Focus::Table);
        assert_eq!(Focus::Table.next(), Focus::Form);
        assert_eq!(Focus::Form.next(), Focus::Filters);
        assert_eq!(Focus::Filters.next(), Focus::Table);
        assert_eq!(Focus::Form.previous(), Focus::Table);
        assert_eq!(Focus::Table.previous(), Focus::Filters);
    }

    #[test]
    fn test_filter_focus() {
        assert_eq!(FilterFocus::Category.toggle(), FilterFocus::Priority);
        assert_eq!(FilterFocus::Priority.toggle(), FilterFocus::Category);
        assert_eq!(FilterFocus::Priority.field(), TaskField::Priority);
    }
}
