use flock_engine::{
    badge_color, viral_score_color, BadgeTier, GridPreset, PlotExtremes, SELECTED_SCALE,
};
use flock_types::{Post, SortDirection, SortField, SortState};

use crate::presentation::formatters::{number, text, time};
use crate::presentation::view_models::{
    ChartViewModel, DetailViewModel, LeaderboardViewModel, MarkerViewModel, PostRowViewModel,
};

const CAPTION_MAX_LENGTH: usize = 48;

/// Display label for a table sort column
pub fn field_label(field: SortField) -> &'static str {
    match field {
        SortField::ViralScore => "Viral",
        SortField::OutlierScore => "Outlier",
        SortField::Views => "Views",
        SortField::Engagement => "Engagement",
        SortField::Date => "Date",
        SortField::Default => "Rank",
    }
}

pub fn direction_arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "^",
        SortDirection::Desc => "v",
    }
}

/// Build the leaderboard ViewModel from an already-sorted sequence.
pub fn build_leaderboard(
    posts: &[Post],
    sort: SortState,
    preset: GridPreset,
    board_name: Option<&str>,
) -> LeaderboardViewModel {
    let rows = posts.iter().map(build_row).collect();

    LeaderboardViewModel {
        rows,
        sort_label: format!("{} {}", field_label(sort.field), direction_arrow(sort.direction)),
        preset_label: preset.label().to_string(),
        board_name: board_name.map(|n| n.to_string()),
        total_count: posts.len(),
    }
}

fn build_row(post: &Post) -> PostRowViewModel {
    PostRowViewModel {
        rank: post.rank,
        id: post.id.to_string(),
        caption: text::truncate(&post.caption, CAPTION_MAX_LENGTH),
        creator_handle: post.creator.handle.clone(),
        views: number::format_count(post.views),
        likes: number::format_count(post.likes),
        comments: number::format_count(post.comments),
        shares: number::format_count(post.shares),
        viral_score: post.viral_score,
        outlier_score: post.outlier_score,
        viral_color: viral_score_color(post.viral_score),
        engagement: format!("{}%", post.engagement_rate.as_str()),
        date: time::format_date(post.created_at),
    }
}

/// Build the scatter plot ViewModel. A degenerate sequence (empty, or
/// all-zero extremes) yields no markers rather than NaN positions.
pub fn build_chart(posts: &[Post], selected: Option<usize>) -> ChartViewModel {
    let markers = match PlotExtremes::from_posts(posts) {
        None => Vec::new(),
        Some(extremes) => posts
            .iter()
            .enumerate()
            .map(|(index, post)| {
                let marker = extremes.place(post);
                let is_selected = selected == Some(index);
                let size = if is_selected {
                    marker.size * SELECTED_SCALE
                } else {
                    marker.size
                };

                MarkerViewModel {
                    index,
                    rank: post.rank,
                    x: marker.x,
                    y: marker.y,
                    size,
                    color: badge_color(post.rank),
                    badge: BadgeTier::for_rank(post.rank).metrics(),
                    selected: is_selected,
                }
            })
            .collect(),
    };

    ChartViewModel {
        markers,
        x_label: "Outlier Score ->".to_string(),
        y_label: "Viral Score ->".to_string(),
    }
}

pub fn build_detail(post: &Post) -> DetailViewModel {
    DetailViewModel {
        creator_handle: post.creator.handle.clone(),
        caption: post.caption.clone(),
        views: number::format_count(post.views),
        likes: number::format_count(post.likes),
    }
}
