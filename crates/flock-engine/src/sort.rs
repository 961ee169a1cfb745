//! Sort engine: pure ordering over a post sequence.
//!
//! `sort_posts` never mutates its input and always uses a stable sort, so
//! posts with equal keys keep their relative input order under every field
//! and direction. Callers re-rank with `assign_ranks` after sorting; the
//! engine itself never touches `rank` except to read it for default order.

use std::cmp::Ordering;

use flock_types::{Post, SortDirection, SortField, SortState};

/// Return a new sequence ordered by `field` in `direction`.
///
/// The default field ignores direction and restores rank-ascending
/// (original input) order.
pub fn sort_posts(posts: &[Post], field: SortField, direction: SortDirection) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    match field {
        SortField::Default => sorted.sort_by_key(|p| p.rank),
        _ => sorted.sort_by(|a, b| {
            let ord = compare_field(a, b, field);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }),
    }
    sorted
}

fn compare_field(a: &Post, b: &Post, field: SortField) -> Ordering {
    match field {
        SortField::ViralScore => a.viral_score.cmp(&b.viral_score),
        SortField::OutlierScore => a.outlier_score.cmp(&b.outlier_score),
        SortField::Views => a.views.cmp(&b.views),
        // Engagement is stored as percentage text; compare the parsed value
        SortField::Engagement => a
            .engagement_rate
            .value()
            .total_cmp(&b.engagement_rate.value()),
        SortField::Date => a.created_at.cmp(&b.created_at),
        SortField::Default => a.rank.cmp(&b.rank),
    }
}

/// Relabel `rank` as the 1-based position within the sequence.
///
/// Must run after every re-sort: rank is derived from order, never stored
/// independently of it.
pub fn assign_ranks(posts: &mut [Post]) {
    for (index, post) in posts.iter_mut().enumerate() {
        post.rank = index as u32 + 1;
    }
}

/// Sort by the shared state and re-rank in one step.
pub fn resort(posts: &[Post], state: SortState) -> Vec<Post> {
    let mut sorted = sort_posts(posts, state.field, state.direction);
    assign_ranks(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_testing::PostBuilder;
    use std::collections::HashSet;

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let posts = vec![
            PostBuilder::new("a").viral(90).views(100).build(),
            PostBuilder::new("b").viral(10).views(900).build(),
            PostBuilder::new("c").viral(50).views(500).build(),
        ];

        for field in [
            SortField::ViralScore,
            SortField::OutlierScore,
            SortField::Views,
            SortField::Engagement,
            SortField::Date,
            SortField::Default,
        ] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let sorted = sort_posts(&posts, field, direction);
                let before: HashSet<&str> = ids(&posts).into_iter().collect();
                let after: HashSet<&str> = ids(&sorted).into_iter().collect();
                assert_eq!(before, after);
                assert_eq!(sorted.len(), posts.len());
            }
        }
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let posts = vec![
            PostBuilder::new("a").viral(90).build(),
            PostBuilder::new("b").viral(10).build(),
        ];
        let _ = sort_posts(&posts, SortField::ViralScore, SortDirection::Desc);
        assert_eq!(ids(&posts), vec!["a", "b"]);
    }

    #[test]
    fn test_viral_desc_and_views_desc_scenario() {
        // Given posts [{a, viral 90, views 100}, {b, viral 10, views 900}]
        let posts = vec![
            PostBuilder::new("a").viral(90).views(100).build(),
            PostBuilder::new("b").viral(10).views(900).build(),
        ];

        // Sorting by viral desc yields [a, b]
        let by_viral = sort_posts(&posts, SortField::ViralScore, SortDirection::Desc);
        assert_eq!(ids(&by_viral), vec!["a", "b"]);

        // Sorting by views desc yields [b, a]
        let by_views = sort_posts(&posts, SortField::Views, SortDirection::Desc);
        assert_eq!(ids(&by_views), vec!["b", "a"]);
    }

    #[test]
    fn test_asc_reversed_equals_desc() {
        let posts = vec![
            PostBuilder::new("a").views(300).build(),
            PostBuilder::new("b").views(100).build(),
            PostBuilder::new("c").views(200).build(),
        ];

        let asc = sort_posts(&posts, SortField::Views, SortDirection::Asc);
        let desc = sort_posts(&posts, SortField::Views, SortDirection::Desc);

        let mut asc_reversed = asc;
        asc_reversed.reverse();
        assert_eq!(ids(&asc_reversed), ids(&desc));
    }

    #[test]
    fn test_ties_keep_input_order_both_directions() {
        let posts = vec![
            PostBuilder::new("a").viral(50).build(),
            PostBuilder::new("b").viral(50).build(),
            PostBuilder::new("c").viral(50).build(),
        ];

        // All keys equal: a stable sort leaves the input order untouched
        let asc = sort_posts(&posts, SortField::ViralScore, SortDirection::Asc);
        assert_eq!(ids(&asc), vec!["a", "b", "c"]);
        let desc = sort_posts(&posts, SortField::ViralScore, SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_engagement_compares_parsed_values() {
        // "9.50" < "10.25" numerically, though not lexicographically
        let posts = vec![
            PostBuilder::new("a").engagement("9.50").build(),
            PostBuilder::new("b").engagement("10.25").build(),
        ];

        let desc = sort_posts(&posts, SortField::Engagement, SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["b", "a"]);
    }

    #[test]
    fn test_date_compares_chronologically() {
        let posts = vec![
            PostBuilder::new("old").days_ago(5).build(),
            PostBuilder::new("new").days_ago(1).build(),
        ];

        let latest_first = sort_posts(&posts, SortField::Date, SortDirection::Desc);
        assert_eq!(ids(&latest_first), vec!["new", "old"]);
    }

    #[test]
    fn test_default_field_restores_rank_order() {
        let posts = vec![
            PostBuilder::new("second").rank(2).viral(99).build(),
            PostBuilder::new("first").rank(1).viral(1).build(),
        ];

        // Direction is irrelevant for the default field
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_posts(&posts, SortField::Default, direction);
            assert_eq!(ids(&sorted), vec!["first", "second"]);
        }
    }

    #[test]
    fn test_empty_sequence_sorts_to_empty() {
        let sorted = sort_posts(&[], SortField::Views, SortDirection::Desc);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_assign_ranks_is_dense_from_one() {
        let mut posts = vec![
            PostBuilder::new("a").rank(7).build(),
            PostBuilder::new("b").rank(7).build(),
            PostBuilder::new("c").rank(0).build(),
        ];
        assign_ranks(&mut posts);
        let ranks: Vec<u32> = posts.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_resort_reranks_by_new_position() {
        let posts = vec![
            PostBuilder::new("a").rank(1).views(100).build(),
            PostBuilder::new("b").rank(2).views(900).build(),
        ];

        let sorted = resort(&posts, SortState::descending(SortField::Views));
        assert_eq!(ids(&sorted), vec!["b", "a"]);
        assert_eq!(sorted[0].rank, 1);
        assert_eq!(sorted[1].rank, 2);
    }
}
