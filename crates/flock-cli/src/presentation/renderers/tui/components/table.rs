//! Table view with sortable column headers.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use flock_engine::ACCENT_SECOND;
use flock_types::{SortField, SortState};

use super::{to_color, Component};
use crate::presentation::presenters::{build_leaderboard, direction_arrow};
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct TableComponent;

fn header_label(label: &str, field: SortField, sort: SortState) -> String {
    if sort.field == field {
        format!("{} {}", label, direction_arrow(sort.direction))
    } else {
        label.to_string()
    }
}

impl Component for TableComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let sort = state.sort.state();
        let vm = build_leaderboard(
            &state.posts,
            sort,
            state.sort.preset(),
            state.board_context_name.as_deref(),
        );

        let header = Row::new(vec![
            header_label("Viral", SortField::ViralScore, sort),
            header_label("Outlier", SortField::OutlierScore, sort),
            "Post".to_string(),
            "Creator".to_string(),
            header_label("Views", SortField::Views, sort),
            header_label("Engagement", SortField::Engagement, sort),
            header_label("Date", SortField::Date, sort),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = vm
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.viral_score.to_string())
                        .style(Style::default().fg(to_color(row.viral_color))),
                    Cell::from(row.outlier_score.to_string())
                        .style(Style::default().fg(to_color(ACCENT_SECOND))),
                    Cell::from(row.caption.clone()),
                    Cell::from(row.creator_handle.clone()),
                    Cell::from(row.views.clone()),
                    Cell::from(row.engagement.clone()),
                    Cell::from(row.date.clone()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(7),
                Constraint::Length(9),
                Constraint::Min(24),
                Constraint::Length(16),
                Constraint::Length(8),
                Constraint::Length(12),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

        let mut table_state = TableState::default();
        if !vm.rows.is_empty() {
            table_state.select(Some(state.cursor.min(vm.rows.len() - 1)));
        }

        f.render_stateful_widget(table, area, &mut table_state);
    }
}
