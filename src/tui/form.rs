//! Entry form state
//!
//! The four inputs of the add-line form, with Tab navigation between them.

use crate::models::EntryForm;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Cost,
    Category,
    Date,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Cost,
            Self::Cost => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Cost => Self::Description,
            Self::Category => Self::Cost,
            Self::Date => Self::Category,
        }
    }

    pub const ALL: [FormField; 4] = [
        FormField::Description,
        FormField::Cost,
        FormField::Category,
        FormField::Date,
    ];
}

/// State for the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    pub focused_field: FormField,
    pub description_input: TextInput,
    pub cost_input: TextInput,
    pub category_input: TextInput,
    pub date_input: TextInput,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    pub fn new() -> Self {
        Self {
            focused_field: FormField::Description,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            cost_input: TextInput::new().label("Cost").placeholder("0.00"),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g. Housing"),
            date_input: TextInput::new().label("Date").placeholder("MM/DD/YYYY"),
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn input(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Description => &self.description_input,
            FormField::Cost => &self.cost_input,
            FormField::Category => &self.category_input,
            FormField::Date => &self.date_input,
        }
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Description => &mut self.description_input,
            FormField::Cost => &mut self.cost_input,
            FormField::Category => &mut self.category_input,
            FormField::Date => &mut self.date_input,
        }
    }

    /// Current field values, verbatim
    pub fn to_entry_form(&self) -> EntryForm {
        EntryForm::new(
            self.description_input.value(),
            self.cost_input.value(),
            self.category_input.value(),
            self.date_input.value(),
        )
    }

    /// Empty every field and return focus to the description
    pub fn clear(&mut self) {
        self.description_input.clear();
        self.cost_input.clear();
        self.category_input.clear();
        self.date_input.clear();
        self.focused_field = FormField::Description;
    }
}
