//! Model-View-Intent (MVI) primitives for the dashboard dialogs.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: what a dialog shows (hidden, or visible with its data)
//! - **Intent**: key presses and catalog responses aimed at the dialog
//! - **Reducer**: pure `(State, Intent) -> State`; side effects such as
//!   network commands stay in `App`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
