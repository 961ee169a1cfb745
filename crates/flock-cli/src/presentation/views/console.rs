//! Plain-text rendering for the non-interactive commands.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{BoardListViewModel, LeaderboardViewModel};

/// Render the leaderboard as a fixed-width console table.
pub fn render_leaderboard(vm: &LeaderboardViewModel, use_color: bool) -> String {
    let mut out = String::new();

    if let Some(board_name) = &vm.board_name {
        let _ = writeln!(out, "Board: {}", board_name);
    }
    let _ = writeln!(
        out,
        "{} posts, sorted by {} ({})",
        vm.total_count, vm.sort_label, vm.preset_label
    );

    if vm.rows.is_empty() {
        let _ = writeln!(out, "No posts found.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>4}  {:>5}  {:>7}  {:<16}  {:>8}  {:>10}  {:<8}  CAPTION",
        "RANK", "VIRAL", "OUTLIER", "CREATOR", "VIEWS", "ENGAGEMENT", "DATE"
    );
    let _ = writeln!(out, "{}", "-".repeat(100));

    for row in &vm.rows {
        let viral = if use_color {
            let c = row.viral_color;
            row.viral_score.truecolor(c.0, c.1, c.2).to_string()
        } else {
            row.viral_score.to_string()
        };

        let _ = writeln!(
            out,
            "{:>4}  {:>5}  {:>7}  {:<16}  {:>8}  {:>10}  {:<8}  {}",
            row.rank,
            viral,
            row.outlier_score,
            row.creator_handle,
            row.views,
            row.engagement,
            row.date,
            row.caption
        );
    }

    out
}

/// Render the board list, one board per line.
pub fn render_board_list(vm: &BoardListViewModel, use_color: bool) -> String {
    let mut out = String::new();

    if vm.boards.is_empty() {
        let _ = writeln!(out, "No boards yet.");
        return out;
    }

    let _ = writeln!(out, "{:<10}  {:<20}  POSTS", "ID", "NAME");
    let _ = writeln!(out, "{}", "-".repeat(44));

    for board in &vm.boards {
        let name = if use_color {
            board.name.bold().to_string()
        } else {
            board.name.clone()
        };
        let _ = writeln!(out, "{:<10}  {:<20}  {}", board.id, name, board.post_count);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{build_board_list, build_leaderboard};
    use flock_engine::GridPreset;
    use flock_testing::sample_posts;
    use flock_types::{Board, BoardId, SortState};

    #[test]
    fn test_render_leaderboard_contains_every_row() {
        let posts = sample_posts();
        let vm = build_leaderboard(&posts, SortState::default(), GridPreset::MostViral, None);
        let text = render_leaderboard(&vm, false);

        assert!(text.contains("4 posts"));
        for post in &posts {
            assert!(text.contains(post.creator.handle.as_str()));
        }
    }

    #[test]
    fn test_render_leaderboard_empty() {
        let vm = build_leaderboard(&[], SortState::default(), GridPreset::MostViral, None);
        let text = render_leaderboard(&vm, false);
        assert!(text.contains("No posts found."));
    }

    #[test]
    fn test_render_board_list() {
        let boards = vec![Board {
            id: BoardId::new("board-1"),
            name: "Favorites".to_string(),
            post_count: 15,
        }];
        let text = render_board_list(&build_board_list(&boards), false);
        assert!(text.contains("board-1"));
        assert!(text.contains("Favorites"));
        assert!(text.contains("15"));
    }
}
