//! Seeded mock feed.
//!
//! Stands in for the real backend: synthesizes a ranked post sequence and a
//! set of boards from a seed, so every run (and every test) sees the same
//! data for the same seed. Board membership is held in memory; saves are
//! visible to later `list` calls within the process.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use flock_types::{
    Board, BoardId, Creator, CreatorId, EngagementRate, Error, ImageRef, Post, PostId, Result,
};

use crate::repository::{BoardStore, PostFilter, PostRepository};

/// Default number of posts the feed synthesizes
pub const DEFAULT_POST_COUNT: usize = 20;

/// Mock timeline window: posts are dated within the last seven days
const FEED_WINDOW_SECS: i64 = 7 * 24 * 60 * 60;

const CREATORS: [(&str, &str, &str); 6] = [
    ("creator-1", "Alex Johnson", "@alexjohnson"),
    ("creator-2", "Maria Garcia", "@mariagarcia"),
    ("creator-3", "James Smith", "@jamessmith"),
    ("creator-4", "Priya Patel", "@priyacreates"),
    ("creator-5", "Tom Becker", "@tombecker"),
    ("creator-6", "Lena Okafor", "@lenaokafor"),
];

const CAPTIONS: [&str; 8] = [
    "POV: you finally nail the transition #fyp",
    "Day 30 of posting until this blows up",
    "The secret nobody tells you about morning routines",
    "Rating street food until I find the best one",
    "This took 47 takes, worth it",
    "Replying to the most asked question on my page",
    "Behind the scenes of yesterday's viral clip",
    "Trying the trend everyone is talking about",
];

const SEED_BOARDS: [(&str, &str, u32); 5] = [
    ("board-1", "Favorites", 15),
    ("board-2", "Inspiration", 8),
    ("board-3", "Research", 24),
    ("board-4", "Campaign Ideas", 5),
    ("board-5", "Competitors", 12),
];

struct StoreState {
    boards: Vec<Board>,
    memberships: HashMap<BoardId, Vec<PostId>>,
    saves: Vec<(PostId, BoardId)>,
    next_board_id: u32,
}

/// In-process feed of posts and boards, deterministic per seed.
pub struct MockFeed {
    posts: Vec<Post>,
    state: Mutex<StoreState>,
}

impl MockFeed {
    /// Feed anchored at the current time.
    pub fn with_seed(seed: u64, post_count: usize) -> Self {
        Self::anchored(seed, post_count, Utc::now())
    }

    /// Feed with an explicit timeline anchor, for fully reproducible data.
    pub fn anchored(seed: u64, post_count: usize, anchor: DateTime<Utc>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut posts: Vec<Post> = (0..post_count)
            .map(|index| synth_post(index, &mut rng, anchor))
            .collect();

        // The feed delivers the sequence already ranked by viral score
        posts.sort_by(|a, b| b.viral_score.cmp(&a.viral_score));
        for (index, post) in posts.iter_mut().enumerate() {
            post.rank = index as u32 + 1;
        }

        let boards: Vec<Board> = SEED_BOARDS
            .iter()
            .map(|(id, name, post_count)| Board {
                id: BoardId::new(*id),
                name: (*name).to_string(),
                post_count: *post_count,
            })
            .collect();

        // Spread posts round-robin over the seeded boards
        let mut memberships: HashMap<BoardId, Vec<PostId>> = HashMap::new();
        for (index, post) in posts.iter().enumerate() {
            let board = &boards[index % boards.len()];
            memberships
                .entry(board.id.clone())
                .or_default()
                .push(post.id.clone());
        }

        Self {
            posts,
            state: Mutex::new(StoreState {
                next_board_id: boards.len() as u32 + 1,
                boards,
                memberships,
                saves: Vec::new(),
            }),
        }
    }

    /// Every (post, board) pair registered through `save_post`, in order.
    pub fn saves(&self) -> Vec<(PostId, BoardId)> {
        self.state.lock().expect("feed state poisoned").saves.clone()
    }
}

fn synth_post(index: usize, rng: &mut StdRng, anchor: DateTime<Utc>) -> Post {
    let (creator_id, name, handle) = CREATORS[index % CREATORS.len()];
    let creator = Creator {
        id: CreatorId::new(creator_id),
        name: name.to_string(),
        handle: handle.to_string(),
        avatar: ImageRef::new(format!("assets/avatars/{}.jpg", creator_id)),
    };

    let age = Duration::seconds(rng.random_range(0..FEED_WINDOW_SECS));

    Post {
        id: PostId::new(format!("post-{}", index + 1)),
        rank: index as u32 + 1,
        creator,
        thumbnail: ImageRef::new(format!("assets/thumbs/post-{}.jpg", index + 1)),
        views: rng.random_range(10_000..=1_010_000),
        likes: rng.random_range(1_000..=101_000),
        comments: rng.random_range(100..=10_100),
        shares: rng.random_range(50..=5_050),
        viral_score: rng.random_range(1..=100),
        outlier_score: rng.random_range(1..=100),
        engagement_rate: EngagementRate::from_value(rng.random_range(1.0..11.0)),
        caption: CAPTIONS[index % CAPTIONS.len()].to_string(),
        created_at: anchor - age,
        board_id: None,
    }
}

impl PostRepository for MockFeed {
    fn list(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        let mut posts = match &filter.board {
            None => self.posts.clone(),
            Some(board) => {
                let state = self.state.lock().expect("feed state poisoned");
                let members = state
                    .memberships
                    .get(board)
                    .ok_or_else(|| Error::UnknownBoard(board.to_string()))?;

                self.posts
                    .iter()
                    .filter(|p| members.contains(&p.id))
                    .cloned()
                    .map(|mut p| {
                        p.board_id = Some(board.clone());
                        p
                    })
                    .collect()
            }
        };

        if let Some(limit) = filter.limit {
            posts.truncate(limit);
        }

        // Rank is dense within whatever context was listed
        for (index, post) in posts.iter_mut().enumerate() {
            post.rank = index as u32 + 1;
        }

        Ok(posts)
    }
}

impl BoardStore for MockFeed {
    fn boards(&self) -> Result<Vec<Board>> {
        Ok(self.state.lock().expect("feed state poisoned").boards.clone())
    }

    fn create_board(&self, name: &str) -> Result<Board> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Config("board name must not be blank".to_string()));
        }

        let mut state = self.state.lock().expect("feed state poisoned");
        let board = Board {
            id: BoardId::new(format!("board-{}", state.next_board_id)),
            name: name.to_string(),
            post_count: 0,
        };
        state.next_board_id += 1;
        state.boards.push(board.clone());
        state.memberships.insert(board.id.clone(), Vec::new());
        Ok(board)
    }

    fn save_post(&self, post: &PostId, board: &BoardId) -> Result<()> {
        let mut state = self.state.lock().expect("feed state poisoned");
        if !state.boards.iter().any(|b| &b.id == board) {
            return Err(Error::UnknownBoard(board.to_string()));
        }

        state.saves.push((post.clone(), board.clone()));
        let members = state.memberships.entry(board.clone()).or_default();
        if !members.contains(post) {
            members.push(post.clone());
        }
        // Board post_count is a display estimate and intentionally not
        // recomputed here.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_same_seed_same_feed() {
        let a = MockFeed::anchored(7, 20, anchor());
        let b = MockFeed::anchored(7, 20, anchor());
        assert_eq!(
            a.list(&PostFilter::all()).unwrap(),
            b.list(&PostFilter::all()).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = MockFeed::anchored(7, 20, anchor());
        let b = MockFeed::anchored(8, 20, anchor());
        assert_ne!(
            a.list(&PostFilter::all()).unwrap(),
            b.list(&PostFilter::all()).unwrap()
        );
    }

    #[test]
    fn test_scores_stay_in_mock_range() {
        let feed = MockFeed::anchored(42, 50, anchor());
        for post in feed.list(&PostFilter::all()).unwrap() {
            assert!((1..=100).contains(&post.viral_score));
            assert!((1..=100).contains(&post.outlier_score));
        }
    }

    #[test]
    fn test_feed_arrives_ranked_dense() {
        let feed = MockFeed::anchored(42, 20, anchor());
        let posts = feed.list(&PostFilter::all()).unwrap();
        for (index, post) in posts.iter().enumerate() {
            assert_eq!(post.rank, index as u32 + 1);
        }
        // Ranked by viral score, highest first
        for pair in posts.windows(2) {
            assert!(pair[0].viral_score >= pair[1].viral_score);
        }
    }

    #[test]
    fn test_limit_truncates() {
        let feed = MockFeed::anchored(42, 20, anchor());
        let posts = feed.list(&PostFilter::all().with_limit(5)).unwrap();
        assert_eq!(posts.len(), 5);
    }

    #[test]
    fn test_board_filter_sets_board_id_and_reranks() {
        let feed = MockFeed::anchored(42, 20, anchor());
        let board = BoardId::new("board-2");
        let posts = feed.list(&PostFilter::board(board.clone())).unwrap();

        assert!(!posts.is_empty());
        assert!(posts.len() < 20);
        for (index, post) in posts.iter().enumerate() {
            assert_eq!(post.board_id.as_ref(), Some(&board));
            assert_eq!(post.rank, index as u32 + 1);
        }
    }

    #[test]
    fn test_unknown_board_errors() {
        let feed = MockFeed::anchored(42, 20, anchor());
        let result = feed.list(&PostFilter::board(BoardId::new("board-99")));
        assert!(matches!(result, Err(Error::UnknownBoard(_))));
    }

    #[test]
    fn test_save_post_is_visible_to_later_lists() {
        let feed = MockFeed::anchored(42, 20, anchor());
        let board = BoardId::new("board-4");

        let before = feed.list(&PostFilter::board(board.clone())).unwrap();
        let outsider = feed
            .list(&PostFilter::all())
            .unwrap()
            .into_iter()
            .find(|p| !before.iter().any(|b| b.id == p.id))
            .unwrap();

        feed.save_post(&outsider.id, &board).unwrap();

        let after = feed.list(&PostFilter::board(board.clone())).unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(feed.saves(), vec![(outsider.id, board)]);
    }

    #[test]
    fn test_save_does_not_touch_post_count() {
        let feed = MockFeed::anchored(42, 20, anchor());
        let board = BoardId::new("board-1");
        let count_before = feed
            .boards()
            .unwrap()
            .iter()
            .find(|b| b.id == board)
            .unwrap()
            .post_count;

        let post = feed.list(&PostFilter::all()).unwrap().remove(0);
        feed.save_post(&post.id, &board).unwrap();

        let count_after = feed
            .boards()
            .unwrap()
            .iter()
            .find(|b| b.id == board)
            .unwrap()
            .post_count;
        assert_eq!(count_before, count_after);
    }

    #[test]
    fn test_create_board_assigns_sequential_ids() {
        let feed = MockFeed::anchored(42, 20, anchor());
        let first = feed.create_board("Mood Board").unwrap();
        let second = feed.create_board("Clients").unwrap();
        assert_eq!(first.id.as_str(), "board-6");
        assert_eq!(second.id.as_str(), "board-7");
        assert_eq!(first.post_count, 0);
        assert_eq!(feed.boards().unwrap().len(), 7);
    }

    #[test]
    fn test_create_board_rejects_blank_names() {
        let feed = MockFeed::anchored(42, 20, anchor());
        assert!(feed.create_board("").is_err());
        assert!(feed.create_board("   ").is_err());
    }

    #[test]
    fn test_created_at_within_feed_window() {
        let feed = MockFeed::anchored(42, 20, anchor());
        for post in feed.list(&PostFilter::all()).unwrap() {
            assert!(post.created_at <= anchor());
            assert!(post.created_at > anchor() - Duration::seconds(FEED_WINDOW_SECS));
        }
    }
}
