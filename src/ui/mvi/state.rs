/// Marker trait for dialog state.
///
/// Cloneable and comparable so tests can assert on whole states; `Default`
/// is the hidden dialog.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
