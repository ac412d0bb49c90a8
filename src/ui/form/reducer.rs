use crate::form::{FormField, ProductForm};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormDialogState, FormMode};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormDialogState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenCreate => open(FormMode::Create, ProductForm::default()),
            FormIntent::OpenEdit { id, form } => open(FormMode::Edit { id }, form),
            FormIntent::Close => FormDialogState::Hidden,
            FormIntent::Input(ch) => edit(state, |text, _| text.push(ch)),
            FormIntent::Paste(pasted) => edit(state, |text, field| {
                if field.is_multiline() {
                    text.push_str(&pasted.replace("\r\n", "\n"));
                } else {
                    text.push_str(pasted.lines().next().unwrap_or(""));
                }
            }),
            FormIntent::Backspace => edit(state, |text, _| {
                text.pop();
            }),
            FormIntent::Newline => {
                let multiline = matches!(
                    &state,
                    FormDialogState::Visible { focused, .. } if focused.is_multiline()
                );
                if multiline {
                    edit(state, |text, _| text.push('\n'))
                } else {
                    move_focus(state, 1)
                }
            }
            FormIntent::NextField => move_focus(state, 1),
            FormIntent::PrevField => move_focus(state, -1),
            FormIntent::ShowErrors { errors } => match state {
                FormDialogState::Visible {
                    mode,
                    form,
                    focused,
                    ..
                } => FormDialogState::Visible {
                    mode,
                    form,
                    focused,
                    errors,
                },
                other => other,
            },
        }
    }
}

fn open(mode: FormMode, form: ProductForm) -> FormDialogState {
    FormDialogState::Visible {
        mode,
        form,
        focused: FormField::Title,
        errors: Vec::new(),
    }
}

fn edit(state: FormDialogState, apply: impl FnOnce(&mut String, FormField)) -> FormDialogState {
    match state {
        FormDialogState::Visible {
            mode,
            mut form,
            focused,
            errors,
        } => {
            apply(form.field_mut(focused), focused);
            FormDialogState::Visible {
                mode,
                form,
                focused,
                errors,
            }
        }
        other => other,
    }
}

/// Moves focus by `step`, wrapping around at both ends.
fn move_focus(state: FormDialogState, step: isize) -> FormDialogState {
    match state {
        FormDialogState::Visible {
            mode,
            form,
            focused,
            errors,
        } => {
            let fields = FormField::ALL;
            let len = fields.len() as isize;
            let current = fields.iter().position(|f| *f == focused).unwrap_or(0) as isize;
            let next = (current + step).rem_euclid(len) as usize;
            FormDialogState::Visible {
                mode,
                form,
                focused: fields[next],
                errors,
            }
        }
        other => other,
    }
}
