//! Grid view: post cards with the preset selector on top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{to_color, Component};
use crate::presentation::presenters::build_leaderboard;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct GridComponent;

impl Component for GridComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = build_leaderboard(
            &state.posts,
            state.sort.state(),
            state.sort.preset(),
            state.board_context_name.as_deref(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let selector = Paragraph::new(Line::from(vec![
            Span::styled("Sort by: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                vm.preset_label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  [p] next preset",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
        f.render_widget(selector, chunks[0]);

        let items: Vec<ListItem> = vm
            .rows
            .iter()
            .map(|row| {
                let title = Line::from(vec![
                    Span::styled(
                        format!("{:>2} ", row.viral_score),
                        Style::default()
                            .fg(to_color(row.viral_color))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(row.caption.clone()),
                ]);
                let stats = Line::from(vec![
                    Span::styled(
                        format!("   {}  ", row.creator_handle),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::raw(format!(
                        "likes {}  comments {}  shares {}",
                        row.likes, row.comments, row.shares
                    )),
                ]);
                ListItem::new(vec![title, stats])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        if !vm.rows.is_empty() {
            list_state.select(Some(state.cursor.min(vm.rows.len() - 1)));
        }

        f.render_stateful_widget(list, chunks[1], &mut list_state);
    }
}
