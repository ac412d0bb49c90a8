use crate::catalog::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Open { product: Product },
    /// Fresh copy from the service; ignored unless the same product is shown.
    Refresh { product: Product },
    Close,
}

impl Intent for DetailIntent {}
