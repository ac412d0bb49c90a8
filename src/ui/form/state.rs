use crate::form::{FormField, ProductForm};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: u64 },
}

impl FormMode {
    pub fn title(self) -> String {
        match self {
            FormMode::Create => "New Product".to_string(),
            FormMode::Edit { id } => format!("Edit Product #{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormDialogState {
    #[default]
    Hidden,
    Visible {
        mode: FormMode,
        form: ProductForm,
        focused: FormField,
        /// Messages from the last rejected submit.
        errors: Vec<String>,
    },
}

impl UiState for FormDialogState {}

impl FormDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
