//! Footer: quick-switch targets, per-view key hints, and the status line.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use flock_types::ViewMode;

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let [left, right] = state.view.quick_switch_targets();

        let mut spans = vec![
            Span::styled("[1] ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(left.label()),
            Span::raw("  "),
            Span::styled("[2] ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(right.label()),
            Span::styled("   ", Style::default()),
        ];

        let hints = match state.view {
            ViewMode::Chart => "arrows move - enter details - s save - q quit",
            ViewMode::Grid => "arrows move - p preset - enter save - q quit",
            ViewMode::Table => "v/o/w/e/d sort - arrows move - enter save - q quit",
        };
        spans.push(Span::styled(
            hints,
            Style::default().add_modifier(Modifier::DIM),
        ));

        let status_line = match &state.status {
            Some(status) => Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::Cyan),
            )),
            None => Line::from(""),
        };

        let footer = Paragraph::new(Text::from(vec![Line::from(spans), status_line])).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer, area);
    }
}
