//! Chart scaling engine.
//!
//! Maps each post's (outlier score, viral score, views) onto a fixed
//! abstract plot as (x, y, marker size), and encodes rank as a badge color
//! and badge size tier. Stateless per render: extremes are computed once
//! from the current sequence and every placement derives from them.

use serde::{Deserialize, Serialize};

use flock_types::Post;

/// Plot width in abstract pixels
pub const PLOT_WIDTH: f64 = 800.0;
/// Plot height in abstract pixels
pub const PLOT_HEIGHT: f64 = 600.0;
/// Inset between the plot edge and the nearest marker center
pub const PLOT_PADDING: f64 = 40.0;

/// Smallest marker diameter
pub const MARKER_MIN_SIZE: f64 = 40.0;
/// Largest marker diameter
pub const MARKER_MAX_SIZE: f64 = 80.0;

/// Scale applied to a hovered or selected marker
pub const SELECTED_SCALE: f64 = 1.1;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Accent for the rank-1 badge (hot pink)
pub const ACCENT_FIRST: Rgb = Rgb(0xFF, 0x3D, 0x71);
/// Accent for the rank-2 badge (blue)
pub const ACCENT_SECOND: Rgb = Rgb(0x00, 0x95, 0xFF);

/// Ordered gradient for ranks three and up, warm to cool
const RANK_GRADIENT: [Rgb; 7] = [
    Rgb(0xFF, 0x3D, 0x71), // pink
    Rgb(0xFF, 0x5C, 0x3A), // orange-red
    Rgb(0xFF, 0x87, 0x00), // orange
    Rgb(0xFF, 0xBA, 0x00), // yellow
    Rgb(0xA1, 0xE8, 0x2C), // lime
    Rgb(0x00, 0xD6, 0x8F), // teal
    Rgb(0x00, 0x95, 0xFF), // blue
];

/// Per-sequence maxima the scale functions divide by.
///
/// `from_posts` returns None for an empty sequence or when any relevant
/// maximum is zero; the caller renders nothing in that case instead of
/// propagating NaN positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotExtremes {
    pub max_viral_score: f64,
    pub max_outlier_score: f64,
    pub max_views: f64,
}

impl PlotExtremes {
    pub fn from_posts(posts: &[Post]) -> Option<Self> {
        if posts.is_empty() {
            return None;
        }

        let max_viral_score = posts.iter().map(|p| p.viral_score).max().unwrap_or(0) as f64;
        let max_outlier_score = posts.iter().map(|p| p.outlier_score).max().unwrap_or(0) as f64;
        let max_views = posts.iter().map(|p| p.views).max().unwrap_or(0) as f64;

        if max_viral_score == 0.0 || max_outlier_score == 0.0 || max_views == 0.0 {
            return None;
        }

        Some(Self {
            max_viral_score,
            max_outlier_score,
            max_views,
        })
    }

    /// Horizontal position for an outlier score: padding at zero,
    /// width minus padding at the maximum.
    pub fn scale_x(&self, outlier_score: u32) -> f64 {
        (outlier_score as f64 / self.max_outlier_score) * (PLOT_WIDTH - 2.0 * PLOT_PADDING)
            + PLOT_PADDING
    }

    /// Vertical position for a viral score, inverted so higher scores plot
    /// higher on screen.
    pub fn scale_y(&self, viral_score: u32) -> f64 {
        PLOT_HEIGHT
            - ((viral_score as f64 / self.max_viral_score) * (PLOT_HEIGHT - 2.0 * PLOT_PADDING)
                + PLOT_PADDING)
    }

    /// Marker diameter, lerped between the min and max size by view count.
    pub fn scale_size(&self, views: u64) -> f64 {
        MARKER_MIN_SIZE + (views as f64 / self.max_views) * (MARKER_MAX_SIZE - MARKER_MIN_SIZE)
    }

    /// Full placement for one post
    pub fn place(&self, post: &Post) -> Marker {
        Marker {
            x: self.scale_x(post.outlier_score),
            y: self.scale_y(post.viral_score),
            size: self.scale_size(post.views),
        }
    }
}

/// A positioned scatter marker in plot space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    /// Diameter, before any selection scaling
    pub size: f64,
}

/// Badge color for a rank: fixed accents for the top two, then the
/// gradient bucketed over roughly the top twenty, clamped to the coolest
/// color beyond that.
pub fn badge_color(rank: u32) -> Rgb {
    if rank == 1 {
        return ACCENT_FIRST;
    }
    if rank == 2 {
        return ACCENT_SECOND;
    }

    let bucket_width = 20.0 / RANK_GRADIENT.len() as f64;
    let index = ((rank.saturating_sub(1)) as f64 / bucket_width) as usize;
    RANK_GRADIENT[index.min(RANK_GRADIENT.len() - 1)]
}

/// Discrete badge size tiers by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    First,
    Podium,
    TopTen,
    Field,
}

/// Fixed badge dimensions for a tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BadgeMetrics {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
}

impl BadgeTier {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => BadgeTier::First,
            2..=3 => BadgeTier::Podium,
            4..=10 => BadgeTier::TopTen,
            _ => BadgeTier::Field,
        }
    }

    pub fn metrics(self) -> BadgeMetrics {
        match self {
            BadgeTier::First => BadgeMetrics {
                width: 40.0,
                height: 24.0,
                font_size: 13.0,
            },
            BadgeTier::Podium => BadgeMetrics {
                width: 36.0,
                height: 22.0,
                font_size: 12.0,
            },
            BadgeTier::TopTen => BadgeMetrics {
                width: 32.0,
                height: 20.0,
                font_size: 11.0,
            },
            BadgeTier::Field => BadgeMetrics {
                width: 28.0,
                height: 18.0,
                font_size: 10.0,
            },
        }
    }
}

/// Color for a viral score value itself (grid and table badges): red for
/// weak scores, warming through orange into a green-to-yellow ramp.
pub fn viral_score_color(score: u32) -> Rgb {
    match score {
        0..=5 => Rgb(0xB9, 0x1C, 0x1C),   // dark red
        6..=10 => Rgb(0x9A, 0x34, 0x12),  // dark orange
        11..=15 => Rgb(0xF9, 0x73, 0x16), // light orange
        16..=25 => Rgb(0x16, 0xA3, 0x4A), // green
        26..=40 => Rgb(0x22, 0xC5, 0x5E), // lighter green
        41..=60 => Rgb(0x84, 0xCC, 0x16), // lime
        61..=80 => Rgb(0xEA, 0xB3, 0x08), // yellow
        _ => Rgb(0xFA, 0xCC, 0x15),       // bright yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_testing::PostBuilder;

    fn sample() -> Vec<Post> {
        vec![
            PostBuilder::new("a")
                .viral(100)
                .outlier(100)
                .views(1_000)
                .build(),
            PostBuilder::new("b").viral(50).outlier(25).views(500).build(),
            PostBuilder::new("c").viral(1).outlier(1).views(10).build(),
        ]
    }

    #[test]
    fn test_extremes_from_sequence() {
        let extremes = PlotExtremes::from_posts(&sample()).unwrap();
        assert_eq!(extremes.max_viral_score, 100.0);
        assert_eq!(extremes.max_outlier_score, 100.0);
        assert_eq!(extremes.max_views, 1_000.0);
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        assert!(PlotExtremes::from_posts(&[]).is_none());
    }

    #[test]
    fn test_all_zero_sequence_renders_nothing() {
        let posts = vec![PostBuilder::new("a").viral(0).outlier(0).views(0).build()];
        assert!(PlotExtremes::from_posts(&posts).is_none());
    }

    #[test]
    fn test_x_spans_padding_to_width_minus_padding() {
        let extremes = PlotExtremes::from_posts(&sample()).unwrap();
        // Max outlier lands on the right inset, zero on the left inset
        assert_eq!(extremes.scale_x(100), PLOT_WIDTH - PLOT_PADDING);
        assert_eq!(extremes.scale_x(0), PLOT_PADDING);
    }

    #[test]
    fn test_y_is_inverted() {
        let extremes = PlotExtremes::from_posts(&sample()).unwrap();
        // Highest viral score plots at the top inset
        assert_eq!(extremes.scale_y(100), PLOT_PADDING);
        assert_eq!(extremes.scale_y(0), PLOT_HEIGHT - PLOT_PADDING);
    }

    #[test]
    fn test_size_lerps_between_bounds() {
        let extremes = PlotExtremes::from_posts(&sample()).unwrap();
        assert_eq!(extremes.scale_size(1_000), MARKER_MAX_SIZE);
        assert_eq!(extremes.scale_size(0), MARKER_MIN_SIZE);
        assert_eq!(extremes.scale_size(500), 60.0);
    }

    #[test]
    fn test_badge_color_accents_for_top_two() {
        assert_eq!(badge_color(1), ACCENT_FIRST);
        assert_eq!(badge_color(2), ACCENT_SECOND);
    }

    #[test]
    fn test_badge_color_gradient_buckets() {
        // Rank 3 falls in the first bucket, rank 20 in the last
        assert_eq!(badge_color(3), RANK_GRADIENT[0]);
        assert_eq!(badge_color(20), RANK_GRADIENT[6]);
    }

    #[test]
    fn test_badge_color_clamps_for_deep_ranks() {
        assert_eq!(badge_color(100), RANK_GRADIENT[6]);
        assert_eq!(badge_color(u32::MAX), RANK_GRADIENT[6]);
    }

    #[test]
    fn test_badge_tiers_by_rank_thresholds() {
        assert_eq!(BadgeTier::for_rank(1), BadgeTier::First);
        assert_eq!(BadgeTier::for_rank(2), BadgeTier::Podium);
        assert_eq!(BadgeTier::for_rank(3), BadgeTier::Podium);
        assert_eq!(BadgeTier::for_rank(4), BadgeTier::TopTen);
        assert_eq!(BadgeTier::for_rank(10), BadgeTier::TopTen);
        assert_eq!(BadgeTier::for_rank(11), BadgeTier::Field);
    }

    #[test]
    fn test_badge_metrics_shrink_with_rank() {
        let first = BadgeTier::First.metrics();
        let field = BadgeTier::Field.metrics();
        assert!(first.width > field.width);
        assert!(first.font_size > field.font_size);
    }

    #[test]
    fn test_viral_score_color_thresholds() {
        // Threshold edges from the score ramp
        assert_eq!(viral_score_color(5), viral_score_color(1));
        assert_ne!(viral_score_color(5), viral_score_color(6));
        assert_ne!(viral_score_color(15), viral_score_color(16));
        assert_eq!(viral_score_color(81), viral_score_color(100));
    }
}
