//! Dashboard application state.
//!
//! AppState is the single owner of the shared sort state and the active
//! view; the chart/grid/table components are pure renderers over it. Every
//! user action is a method here, so the whole interaction surface is unit
//! testable without a terminal.

use ratatui::layout::Rect;

use flock_data::{BoardStore, PostFilter, PostRepository};
use flock_engine::{resort, GridPreset, SharedSort};
use flock_types::{Board, BoardId, Post, PostId, SortField, ViewMode};

use super::popup::SaveBoardPopup;

pub struct AppState {
    /// Feed-ordered pool; the default sort restores this order
    base: Vec<Post>,
    /// Current sorted, re-ranked sequence rendered by all three views
    pub posts: Vec<Post>,
    pub boards: Vec<Board>,
    pub sort: SharedSort,
    pub view: ViewMode,
    pub board_context: Option<BoardId>,
    pub board_context_name: Option<String>,
    /// Cursor/hover index into `posts`
    pub cursor: usize,
    /// Chart marker whose detail panel is open
    pub selected: Option<PostId>,
    pub popup: Option<SaveBoardPopup>,
    pub status: Option<String>,
    /// Last drawn frame area; layout and popup placement derive from it
    pub viewport: Rect,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(
        posts: Vec<Post>,
        boards: Vec<Board>,
        view: ViewMode,
        board_context: Option<BoardId>,
    ) -> Self {
        let sort = SharedSort::new();
        let sorted = resort(&posts, sort.state());
        let board_context_name = board_context
            .as_ref()
            .and_then(|id| boards.iter().find(|b| &b.id == id).map(|b| b.name.clone()));

        Self {
            base: posts,
            posts: sorted,
            boards,
            sort,
            view,
            board_context,
            board_context_name,
            cursor: 0,
            selected: None,
            popup: None,
            status: None,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Re-sort from the base pool and re-rank. The one place ordering
    /// changes; both control surfaces funnel through it.
    fn resort_now(&mut self) {
        self.posts = resort(&self.base, self.sort.state());
        self.cursor = self.cursor.min(self.posts.len().saturating_sub(1));
        self.selected = None;
    }

    pub fn cursor_post(&self) -> Option<&Post> {
        self.posts.get(self.cursor)
    }

    pub fn selected_post(&self) -> Option<&Post> {
        let id = self.selected.as_ref()?;
        self.posts.iter().find(|p| &p.id == id)
    }

    // -- view switching ---------------------------------------------------

    pub fn switch_view(&mut self, view: ViewMode) {
        if self.view != view {
            self.view = view;
            // A stale overlay must not survive a view change
            self.popup = None;
        }
    }

    /// Activate one of the two quick-switch targets (0 = left, 1 = right)
    pub fn quick_switch(&mut self, slot: usize) {
        let targets = self.view.quick_switch_targets();
        if let Some(target) = targets.get(slot) {
            self.switch_view(*target);
        }
    }

    // -- sorting ----------------------------------------------------------

    /// Table header click: toggles direction on the active field, starts
    /// ascending on a new field. Triggers exactly one re-sort.
    pub fn click_header(&mut self, field: SortField) {
        self.sort.click_header(field);
        self.resort_now();
    }

    /// Grid dropdown change. Triggers exactly one re-sort.
    pub fn select_preset(&mut self, preset: GridPreset) {
        self.sort.select_preset(preset);
        self.resort_now();
    }

    /// Advance the grid dropdown to the next preset
    pub fn cycle_preset(&mut self) {
        let current = self.sort.preset();
        let position = GridPreset::ALL.iter().position(|p| *p == current).unwrap_or(0);
        let next = GridPreset::ALL[(position + 1) % GridPreset::ALL.len()];
        self.select_preset(next);
    }

    // -- cursor and chart selection ---------------------------------------

    pub fn select_next(&mut self) {
        if !self.posts.is_empty() {
            self.cursor = (self.cursor + 1).min(self.posts.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.posts.len() {
            self.cursor = index;
        }
    }

    /// Select the cursor marker, or deselect when it is already selected
    pub fn toggle_select(&mut self) {
        let Some(post) = self.cursor_post() else {
            return;
        };
        let id = post.id.clone();
        if self.selected.as_ref() == Some(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
    }

    /// Index of the marker the chart should emphasize
    pub fn emphasized_index(&self) -> Option<usize> {
        if let Some(post) = self.selected_post() {
            let id = post.id.clone();
            return self.posts.iter().position(|p| p.id == id);
        }
        if self.posts.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    // -- save-to-board popup ----------------------------------------------

    /// Open the save popup for the acted-on post: the open detail panel's
    /// post in chart view, otherwise the cursor row.
    pub fn open_popup(&mut self, anchor: Option<(u16, u16)>) {
        let post = self
            .selected_post()
            .or_else(|| self.cursor_post())
            .map(|p| p.id.clone());
        if let Some(post) = post {
            self.popup = Some(SaveBoardPopup::new(post, anchor));
        }
    }

    /// Dismiss the popup. No side effects.
    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    /// Save the popup's post to the highlighted board.
    ///
    /// Exactly one persistence call is made. Returns the board to navigate
    /// to on success; on failure the popup still closes and the error lands
    /// on the status line.
    pub fn popup_save_highlighted(&mut self, store: &dyn BoardStore) -> Option<BoardId> {
        let popup = self.popup.as_mut()?;
        let board = self.boards.get(popup.board_cursor)?.clone();
        // Visual feedback lands before the save completes
        popup.selected_board = Some(board.id.clone());
        let post = popup.post.clone();

        match store.save_post(&post, &board.id) {
            Ok(()) => {
                self.status = Some(format!("Saved to {}", board.name));
                self.popup = None;
                Some(board.id)
            }
            Err(e) => {
                self.status = Some(format!("Save failed: {}", e));
                self.popup = None;
                None
            }
        }
    }

    /// Create a board from the popup's name field and save the post to it.
    /// Inert while the name is blank.
    pub fn popup_create_and_save(&mut self, store: &dyn BoardStore) -> Option<BoardId> {
        let popup = self.popup.as_ref()?;
        if !popup.can_create() {
            return None;
        }
        let post = popup.post.clone();
        let name = popup.name_input.clone();

        let result = store
            .create_board(&name)
            .and_then(|board| store.save_post(&post, &board.id).map(|()| board));

        match result {
            Ok(board) => {
                self.boards.push(board.clone());
                self.status = Some(format!("Created {} and saved post", board.name));
                self.popup = None;
                Some(board.id)
            }
            Err(e) => {
                self.status = Some(format!("Create failed: {}", e));
                self.popup = None;
                None
            }
        }
    }

    // -- navigation -------------------------------------------------------

    /// Switch the dashboard into a board's filtered context.
    pub fn navigate_to_board(&mut self, repo: &dyn PostRepository, board: BoardId) {
        match repo.list(&PostFilter::board(board.clone())) {
            Ok(posts) => {
                self.board_context_name = self
                    .boards
                    .iter()
                    .find(|b| b.id == board)
                    .map(|b| b.name.clone());
                self.board_context = Some(board);
                self.base = posts;
                self.cursor = 0;
                self.resort_now();
            }
            Err(e) => {
                self.status = Some(format!("Could not open board: {}", e));
            }
        }
    }
}
