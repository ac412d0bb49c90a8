use crate::catalog::Product;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailDialogState {
    #[default]
    Hidden,
    Visible { product: Product },
}

impl UiState for DetailDialogState {}

impl DetailDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn product_id(&self) -> Option<u64> {
        match self {
            Self::Visible { product } => Some(product.id),
            Self::Hidden => None,
        }
    }
}
