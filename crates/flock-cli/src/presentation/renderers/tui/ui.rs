use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use flock_types::ViewMode;

use super::app::AppState;
use super::components::{
    ChartComponent, Component, DetailComponent, FooterComponent, GridComponent, PopupComponent,
    TableComponent,
};

pub(crate) struct ScreenChunks {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Fixed vertical split shared by the draw pass and the mouse hit-testing
pub(crate) fn screen_chunks(area: Rect) -> ScreenChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenChunks {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    state.viewport = f.area();
    let chunks = screen_chunks(f.area());

    render_header(f, chunks.header, state);

    match state.view {
        ViewMode::Chart => {
            ChartComponent.render(f, chunks.body, state);
            DetailComponent.render(f, chunks.body, state);
        }
        ViewMode::Grid => GridComponent.render(f, chunks.body, state),
        ViewMode::Table => TableComponent.render(f, chunks.body, state),
    }

    FooterComponent.render(f, chunks.footer, state);

    // Popup overlays everything; placement derives from the frame area
    if state.popup.is_some() {
        PopupComponent.render(f, f.area(), state);
    }
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let title = match &state.board_context_name {
        Some(name) => format!("CreatorFlock - {}", name),
        None => "CreatorFlock Leaderboard".to_string(),
    };

    let sort = state.sort.state();
    let sort_line = Line::from(vec![
        Span::styled("Sort: ", Style::default().add_modifier(Modifier::DIM)),
        Span::raw(format!(
            "{} {}",
            crate::presentation::presenters::field_label(sort.field),
            crate::presentation::presenters::direction_arrow(sort.direction)
        )),
        Span::styled("  Preset: ", Style::default().add_modifier(Modifier::DIM)),
        Span::raw(state.sort.preset().label()),
        Span::styled(
            format!("  {} posts", state.posts.len()),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        sort_line,
    ]);
    f.render_widget(header, area);
}
