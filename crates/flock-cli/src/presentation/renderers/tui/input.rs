//! Input handling: one state transition per key or pointer event.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use flock_data::{BoardStore, PostRepository};
use flock_engine::{PLOT_HEIGHT, PLOT_WIDTH};
use flock_types::{SortField, ViewMode};

use super::app::AppState;
use super::popup::{PopupFocus, SaveBoardPopup, BOARD_LIST_OFFSET};
use super::ui;
use crate::presentation::presenters::build_chart;

pub(crate) fn handle_key(
    state: &mut AppState,
    key: KeyEvent,
    repo: &dyn PostRepository,
    store: &dyn BoardStore,
) {
    if state.popup.is_some() {
        handle_popup_key(state, key, repo, store);
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Esc => {
            // Esc closes the detail panel first, then the dashboard
            if state.selected.is_some() {
                state.selected = None;
            } else {
                state.should_quit = true;
            }
        }

        KeyCode::Char('1') => state.quick_switch(0),
        KeyCode::Char('2') => state.quick_switch(1),
        KeyCode::Char('c') => state.switch_view(ViewMode::Chart),
        KeyCode::Char('g') => state.switch_view(ViewMode::Grid),
        KeyCode::Char('t') => state.switch_view(ViewMode::Table),

        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Up | KeyCode::Char('k') => state.select_previous(),

        KeyCode::Enter => match state.view {
            ViewMode::Chart => state.toggle_select(),
            ViewMode::Grid | ViewMode::Table => state.open_popup(None),
        },
        KeyCode::Char('s') => state.open_popup(None),

        // Table header clicks
        KeyCode::Char('v') if state.view == ViewMode::Table => {
            state.click_header(SortField::ViralScore)
        }
        KeyCode::Char('o') if state.view == ViewMode::Table => {
            state.click_header(SortField::OutlierScore)
        }
        KeyCode::Char('w') if state.view == ViewMode::Table => {
            state.click_header(SortField::Views)
        }
        KeyCode::Char('e') if state.view == ViewMode::Table => {
            state.click_header(SortField::Engagement)
        }
        KeyCode::Char('d') if state.view == ViewMode::Table => {
            state.click_header(SortField::Date)
        }

        // Grid preset dropdown
        KeyCode::Char('p') if state.view == ViewMode::Grid => state.cycle_preset(),

        _ => {}
    }
}

fn handle_popup_key(
    state: &mut AppState,
    key: KeyEvent,
    repo: &dyn PostRepository,
    store: &dyn BoardStore,
) {
    let board_count = state.boards.len();
    let focus = match &state.popup {
        Some(popup) => popup.focus,
        None => return,
    };

    match key.code {
        KeyCode::Esc => state.close_popup(),
        KeyCode::Tab => {
            if let Some(popup) = state.popup.as_mut() {
                popup.toggle_focus();
            }
        }

        KeyCode::Up if focus == PopupFocus::Boards => {
            if let Some(popup) = state.popup.as_mut() {
                popup.board_cursor_up();
            }
        }
        KeyCode::Down if focus == PopupFocus::Boards => {
            if let Some(popup) = state.popup.as_mut() {
                popup.board_cursor_down(board_count);
            }
        }

        KeyCode::Enter => {
            let navigate_to = match focus {
                PopupFocus::Boards => state.popup_save_highlighted(store),
                PopupFocus::Name => state.popup_create_and_save(store),
            };
            if let Some(board) = navigate_to {
                state.navigate_to_board(repo, board);
            }
        }

        KeyCode::Backspace if focus == PopupFocus::Name => {
            if let Some(popup) = state.popup.as_mut() {
                popup.name_input.pop();
            }
        }
        KeyCode::Char(ch) if focus == PopupFocus::Name => {
            if let Some(popup) = state.popup.as_mut() {
                popup.name_input.push(ch);
            }
        }

        _ => {}
    }
}

pub(crate) fn handle_mouse(
    state: &mut AppState,
    mouse: MouseEvent,
    repo: &dyn PostRepository,
    store: &dyn BoardStore,
) {
    let chunks = ui::screen_chunks(state.viewport);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (column, row) = (mouse.column, mouse.row);

            if let Some(popup) = &state.popup {
                let area = popup.area(state.viewport, state.boards.len());
                if SaveBoardPopup::hit(area, column, row) {
                    let board_row = row
                        .checked_sub(area.y + BOARD_LIST_OFFSET)
                        .map(|r| r as usize);
                    if let Some(index) = board_row
                        && index < state.boards.len()
                    {
                        if let Some(popup) = state.popup.as_mut() {
                            popup.board_cursor = index;
                        }
                        if let Some(board) = state.popup_save_highlighted(store) {
                            state.navigate_to_board(repo, board);
                        }
                    }
                } else {
                    // Any pointer interaction outside the popup dismisses it
                    // without side effects
                    state.close_popup();
                }
                return;
            }

            if state.view == ViewMode::Chart
                && let Some(index) = chart_hit_test(state, chunks.body, column, row)
            {
                state.set_cursor(index);
                state.toggle_select();
            }
        }

        MouseEventKind::Moved => {
            // Hovering a marker emphasizes it
            if state.popup.is_none()
                && state.view == ViewMode::Chart
                && let Some(index) = chart_hit_test(state, chunks.body, mouse.column, mouse.row)
            {
                state.set_cursor(index);
            }
        }

        _ => {}
    }
}

/// Map a terminal cell inside the chart body onto plot space and find the
/// nearest marker whose disc covers it.
fn chart_hit_test(state: &AppState, body: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Rect::new(
        body.x + 1,
        body.y + 1,
        body.width.saturating_sub(2),
        body.height.saturating_sub(2),
    );
    if inner.width == 0 || inner.height == 0 || !inner.contains(Position::new(column, row)) {
        return None;
    }

    let plot_x = (column - inner.x) as f64 / inner.width as f64 * PLOT_WIDTH;
    // Canvas y axis points up; cells count down
    let plot_y = (1.0 - (row - inner.y) as f64 / inner.height as f64) * PLOT_HEIGHT;

    let vm = build_chart(&state.posts, None);
    vm.markers
        .iter()
        .map(|m| {
            let dx = m.x - plot_x;
            let dy = (PLOT_HEIGHT - m.y) - plot_y;
            (m.index, dx * dx + dy * dy, m.size / 2.0)
        })
        // A cell is coarse, so allow a generous halo around each disc
        .filter(|(_, dist_sq, radius)| *dist_sq <= radius * radius * 4.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _, _)| index)
}
