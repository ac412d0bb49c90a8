/// Marker trait for dialog intents.
///
/// Intents are either user actions (typing, moving focus, closing) or
/// results handed over by `App` (a refreshed product, validation errors).
pub trait Intent: Send + 'static {}
