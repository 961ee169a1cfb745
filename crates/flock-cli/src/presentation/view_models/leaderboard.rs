use serde::Serialize;

use flock_engine::{BadgeMetrics, Rgb};

/// One post as a table/grid row, fully pre-formatted
#[derive(Debug, Clone, Serialize)]
pub struct PostRowViewModel {
    pub rank: u32,
    pub id: String,
    pub caption: String,
    pub creator_handle: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub shares: String,
    pub viral_score: u32,
    pub outlier_score: u32,
    /// Color encoding the viral score's strength
    pub viral_color: Rgb,
    pub engagement: String,
    pub date: String,
}

/// The ranked leaderboard plus the state both sort controls display
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardViewModel {
    pub rows: Vec<PostRowViewModel>,
    /// Table control state, e.g. "Viral v"
    pub sort_label: String,
    /// Grid control state, e.g. "Most Viral"
    pub preset_label: String,
    pub board_name: Option<String>,
    pub total_count: usize,
}

/// One scatter marker, positioned in plot space with selection scaling
/// already applied
#[derive(Debug, Clone, Serialize)]
pub struct MarkerViewModel {
    /// Index into the current sorted sequence
    pub index: usize,
    pub rank: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgb,
    pub badge: BadgeMetrics,
    pub selected: bool,
}

/// Scatter plot contents. `markers` is empty when the sequence is empty or
/// degenerate; the renderer then draws an empty plot, never NaN positions.
#[derive(Debug, Clone, Serialize)]
pub struct ChartViewModel {
    pub markers: Vec<MarkerViewModel>,
    pub x_label: String,
    pub y_label: String,
}

/// Detail panel for the selected marker
#[derive(Debug, Clone, Serialize)]
pub struct DetailViewModel {
    pub creator_handle: String,
    pub caption: String,
    pub views: String,
    pub likes: String,
}
