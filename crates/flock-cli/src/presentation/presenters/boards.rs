use flock_types::Board;

use crate::presentation::view_models::{BoardListViewModel, BoardRowViewModel};

pub fn build_board_list(boards: &[Board]) -> BoardListViewModel {
    BoardListViewModel {
        boards: boards
            .iter()
            .map(|board| BoardRowViewModel {
                id: board.id.to_string(),
                name: board.name.clone(),
                post_count: board.post_count,
            })
            .collect(),
    }
}
