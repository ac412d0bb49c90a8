use crate::form::ProductForm;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    OpenCreate,
    OpenEdit { id: u64, form: ProductForm },
    Input(char),
    /// Pasted text goes into the focused field in one step.
    Paste(String),
    Backspace,
    /// Enter: newline in multi-line fields, next field otherwise.
    Newline,
    NextField,
    PrevField,
    ShowErrors { errors: Vec<String> },
    Close,
}

impl Intent for FormIntent {}
