//! Detail panel for the selected chart marker.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::presentation::presenters::build_detail;
use crate::presentation::renderers::tui::app::AppState;

const PANEL_HEIGHT: u16 = 6;

pub(crate) struct DetailComponent;

impl Component for DetailComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let Some(post) = state.selected_post() else {
            return;
        };
        let vm = build_detail(post);

        // Overlay strip along the bottom of the chart area
        let height = PANEL_HEIGHT.min(area.height);
        let panel = Rect::new(
            area.x + 2,
            area.y + area.height.saturating_sub(height + 1),
            area.width.saturating_sub(4),
            height,
        );

        let lines = vec![
            Line::from(Span::styled(
                vm.creator_handle,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vm.caption),
            Line::from(vec![
                Span::styled("views ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(vm.views),
                Span::styled("  likes ", Style::default().add_modifier(Modifier::DIM)),
                Span::raw(vm.likes),
                Span::styled("  [s] save to board", Style::default().add_modifier(Modifier::DIM)),
            ]),
        ];

        f.render_widget(Clear, panel);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            panel,
        );
    }
}
