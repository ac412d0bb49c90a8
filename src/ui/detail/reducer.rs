use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailDialogState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailDialogState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { product } => DetailDialogState::Visible { product },
            DetailIntent::Refresh { product } => match state {
                DetailDialogState::Visible { product: shown } if shown.id == product.id => {
                    DetailDialogState::Visible { product }
                }
                other => other,
            },
            DetailIntent::Close => DetailDialogState::Hidden,
        }
    }
}
