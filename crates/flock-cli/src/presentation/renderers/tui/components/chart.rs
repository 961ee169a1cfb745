//! Scatter plot view: outlier score on x, viral score on y, marker size by
//! views, rank badge at each marker.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders,
    },
    Frame,
};

use flock_engine::{PLOT_HEIGHT, PLOT_WIDTH};

use super::{to_color, Component};
use crate::presentation::presenters::build_chart;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct ChartComponent;

impl Component for ChartComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let vm = build_chart(&state.posts, state.emphasized_index());

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", vm.y_label))
                    .title_bottom(format!(" {} ", vm.x_label)),
            )
            .x_bounds([0.0, PLOT_WIDTH])
            .y_bounds([0.0, PLOT_HEIGHT])
            .paint(|ctx| {
                for marker in &vm.markers {
                    // Plot y grows downward; canvas y grows upward
                    let y = PLOT_HEIGHT - marker.y;
                    ctx.draw(&Circle {
                        x: marker.x,
                        y,
                        radius: marker.size / 2.0,
                        color: to_color(marker.color),
                    });
                }

                ctx.layer();

                for marker in &vm.markers {
                    let y = PLOT_HEIGHT - marker.y;
                    let style = if marker.selected {
                        Style::default()
                            .fg(to_color(marker.color))
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default()
                            .fg(to_color(marker.color))
                            .add_modifier(Modifier::BOLD)
                    };
                    ctx.print(
                        marker.x,
                        y,
                        Line::styled(format!("#{}", marker.rank), style),
                    );
                }
            });

        f.render_widget(canvas, area);
    }
}
