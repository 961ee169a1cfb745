//! Save-to-board popup overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use flock_engine::ACCENT_FIRST;

use super::{to_color, Component};
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::renderers::tui::popup::PopupFocus;

pub(crate) struct PopupComponent;

impl Component for PopupComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(popup) = &state.popup else {
            return;
        };

        let popup_area = popup.area(area, state.boards.len());
        f.render_widget(Clear, popup_area);

        let boards_focused = popup.focus == PopupFocus::Boards;

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            "Your boards",
            section_style(boards_focused),
        )));

        for (index, board) in state.boards.iter().enumerate() {
            let label = format!("{} ({})", board.name, board.post_count);
            let mut style = Style::default();
            if popup.selected_board.as_ref() == Some(&board.id) {
                // Chosen board flashes the accent before the save completes
                style = style.bg(to_color(ACCENT_FIRST));
            }
            if boards_focused && index == popup.board_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(Span::styled(format!(" {} ", label), style)));
        }

        lines.push(Line::from(Span::styled(
            "Create new board",
            section_style(!boards_focused),
        )));

        let name_line = if popup.name_input.is_empty() {
            Line::from(Span::styled(
                " Board name",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(Span::raw(format!(" {}", popup.name_input)))
        };
        lines.push(name_line);

        let hint = if boards_focused {
            "enter save - tab name field - esc close"
        } else if popup.can_create() {
            "enter create and save - esc close"
        } else {
            "type a board name - esc close"
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().add_modifier(Modifier::DIM),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Save to Board ");
        f.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn section_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}
