//! Save-to-board popup state and placement.
//!
//! Placement is derived from the current viewport every frame: anchored
//! below the invocation point on wide terminals, always centered on narrow
//! ones. Dismissal (outside click, Esc) carries no side effects.

use ratatui::layout::{Position, Rect};

use flock_types::{BoardId, PostId};

/// Below this viewport width the popup is always centered, regardless of
/// where it was invoked from
pub const NARROW_VIEWPORT_COLS: u16 = 90;

/// Popup outer width in columns
pub const POPUP_WIDTH: u16 = 44;

/// Rows between the popup's top edge and the first board row (border plus
/// section heading); the mouse handler maps clicks with this
pub const BOARD_LIST_OFFSET: u16 = 2;

/// Rows of chrome around the board list: border, heading, separator,
/// name-input heading, input line, border
const POPUP_CHROME_ROWS: u16 = 6;

/// Which part of the popup has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupFocus {
    Boards,
    Name,
}

/// Where the popup lands for the current viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPlacement {
    /// Below the invocation point
    Anchored { x: u16, y: u16 },
    Centered,
}

pub struct SaveBoardPopup {
    /// Post being saved
    pub post: PostId,
    /// Invocation point, when the popup was opened from one
    pub anchor: Option<(u16, u16)>,
    pub name_input: String,
    /// Highlighted row in the board list
    pub board_cursor: usize,
    /// Board already chosen this session (visual feedback during save)
    pub selected_board: Option<BoardId>,
    pub focus: PopupFocus,
}

impl SaveBoardPopup {
    pub fn new(post: PostId, anchor: Option<(u16, u16)>) -> Self {
        Self {
            post,
            anchor,
            name_input: String::new(),
            board_cursor: 0,
            selected_board: None,
            focus: PopupFocus::Boards,
        }
    }

    /// Create is inert until the name field has non-whitespace content
    pub fn can_create(&self) -> bool {
        !self.name_input.trim().is_empty()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PopupFocus::Boards => PopupFocus::Name,
            PopupFocus::Name => PopupFocus::Boards,
        };
    }

    pub fn board_cursor_up(&mut self) {
        self.board_cursor = self.board_cursor.saturating_sub(1);
    }

    pub fn board_cursor_down(&mut self, board_count: usize) {
        if board_count > 0 {
            self.board_cursor = (self.board_cursor + 1).min(board_count - 1);
        }
    }

    pub fn placement(&self, viewport_width: u16) -> PopupPlacement {
        if viewport_width < NARROW_VIEWPORT_COLS {
            return PopupPlacement::Centered;
        }
        match self.anchor {
            Some((x, y)) => PopupPlacement::Anchored { x, y },
            None => PopupPlacement::Centered,
        }
    }

    pub fn height(board_count: usize) -> u16 {
        board_count as u16 + POPUP_CHROME_ROWS
    }

    /// Concrete popup rectangle for this frame, clamped into the viewport.
    pub fn area(&self, viewport: Rect, board_count: usize) -> Rect {
        let width = POPUP_WIDTH.min(viewport.width);
        let height = Self::height(board_count).min(viewport.height);

        let (x, y) = match self.placement(viewport.width) {
            PopupPlacement::Centered => (
                viewport.x + (viewport.width.saturating_sub(width)) / 2,
                viewport.y + (viewport.height.saturating_sub(height)) / 2,
            ),
            PopupPlacement::Anchored { x, y } => {
                // Centered on the anchor column, one row below the anchor
                let left = x.saturating_sub(width / 2);
                (left, y.saturating_add(1))
            }
        };

        // Keep the whole popup on screen
        let x = x.min(viewport.right().saturating_sub(width)).max(viewport.x);
        let y = y.min(viewport.bottom().saturating_sub(height)).max(viewport.y);

        Rect::new(x, y, width, height)
    }

    /// True when a pointer event at (column, row) lands inside `area`
    pub fn hit(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popup(anchor: Option<(u16, u16)>) -> SaveBoardPopup {
        SaveBoardPopup::new(PostId::new("post-1"), anchor)
    }

    #[test]
    fn test_wide_viewport_anchors_below_point() {
        let p = popup(Some((60, 10)));
        assert_eq!(
            p.placement(120),
            PopupPlacement::Anchored { x: 60, y: 10 }
        );
    }

    #[test]
    fn test_narrow_viewport_always_centers() {
        let p = popup(Some((30, 10)));
        assert_eq!(p.placement(NARROW_VIEWPORT_COLS - 1), PopupPlacement::Centered);
    }

    #[test]
    fn test_no_anchor_centers_on_any_viewport() {
        let p = popup(None);
        assert_eq!(p.placement(200), PopupPlacement::Centered);
    }

    #[test]
    fn test_area_stays_within_viewport() {
        let viewport = Rect::new(0, 0, 120, 40);
        // Anchor near the right edge would overflow without clamping
        let p = popup(Some((118, 38)));
        let area = p.area(viewport, 5);
        assert!(area.right() <= viewport.right());
        assert!(area.bottom() <= viewport.bottom());
    }

    #[test]
    fn test_centered_area_is_centered() {
        let viewport = Rect::new(0, 0, 120, 40);
        let p = popup(None);
        let area = p.area(viewport, 5);
        assert_eq!(area.width, POPUP_WIDTH);
        assert_eq!(area.x, (120 - POPUP_WIDTH) / 2);
    }

    #[test]
    fn test_can_create_requires_non_blank_name() {
        let mut p = popup(None);
        assert!(!p.can_create());
        p.name_input = "   ".to_string();
        assert!(!p.can_create());
        p.name_input = "Mood Board".to_string();
        assert!(p.can_create());
    }

    #[test]
    fn test_board_cursor_clamps() {
        let mut p = popup(None);
        p.board_cursor_up();
        assert_eq!(p.board_cursor, 0);
        for _ in 0..10 {
            p.board_cursor_down(3);
        }
        assert_eq!(p.board_cursor, 2);
    }

    #[test]
    fn test_hit_detects_inside_and_outside() {
        let area = Rect::new(10, 10, 44, 12);
        assert!(SaveBoardPopup::hit(area, 10, 10));
        assert!(SaveBoardPopup::hit(area, 30, 15));
        assert!(!SaveBoardPopup::hit(area, 9, 10));
        assert!(!SaveBoardPopup::hit(area, 60, 30));
    }
}
