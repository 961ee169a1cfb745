//! Recording fakes for collaborator traits.

use std::sync::Mutex;

use flock_data::BoardStore;
use flock_types::{Board, BoardId, Error, PostId, Result};

/// Board store that records every call and can be told to fail.
///
/// Tests assert on the recorded calls to verify "exactly one persistence
/// call" style contracts.
pub struct RecordingBoardStore {
    boards: Mutex<Vec<Board>>,
    saves: Mutex<Vec<(PostId, BoardId)>>,
    created: Mutex<Vec<String>>,
    fail_saves: bool,
}

impl RecordingBoardStore {
    pub fn new() -> Self {
        let boards = vec![
            board("board-1", "Favorites", 15),
            board("board-2", "Inspiration", 8),
            board("board-3", "Research", 24),
        ];
        Self {
            boards: Mutex::new(boards),
            saves: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            fail_saves: false,
        }
    }

    /// Every save call fails with an unknown-board error, regardless of id.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    pub fn saves(&self) -> Vec<(PostId, BoardId)> {
        self.saves.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

impl Default for RecordingBoardStore {
    fn default() -> Self {
        Self::new()
    }
}

fn board(id: &str, name: &str, post_count: u32) -> Board {
    Board {
        id: BoardId::new(id),
        name: name.to_string(),
        post_count,
    }
}

impl BoardStore for RecordingBoardStore {
    fn boards(&self) -> Result<Vec<Board>> {
        Ok(self.boards.lock().unwrap().clone())
    }

    fn create_board(&self, name: &str) -> Result<Board> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Config("board name must not be blank".to_string()));
        }

        self.created.lock().unwrap().push(name.to_string());
        let mut boards = self.boards.lock().unwrap();
        let created = board(&format!("board-{}", boards.len() + 1), name, 0);
        boards.push(created.clone());
        Ok(created)
    }

    fn save_post(&self, post: &PostId, board: &BoardId) -> Result<()> {
        if self.fail_saves {
            return Err(Error::UnknownBoard(board.to_string()));
        }
        self.saves.lock().unwrap().push((post.clone(), board.clone()));
        Ok(())
    }
}
