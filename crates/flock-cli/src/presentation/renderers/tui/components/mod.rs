mod chart;
mod detail;
mod footer;
mod grid;
mod popup;
mod table;

pub(crate) use chart::ChartComponent;
pub(crate) use detail::DetailComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use grid::GridComponent;
pub(crate) use popup::PopupComponent;
pub(crate) use table::TableComponent;

use ratatui::{layout::Rect, style::Color, Frame};

use flock_engine::Rgb;

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
