mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormDialogState, FormMode};
