//! Fixture builders for domain records.

use chrono::{DateTime, Duration, TimeZone, Utc};

use flock_types::{BoardId, Creator, CreatorId, EngagementRate, ImageRef, Post, PostId};

/// Fixed anchor so fixture timestamps are reproducible
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
}

/// Builder for a single post fixture. Every field has a plausible default;
/// tests set only what they assert on.
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    pub fn new(id: &str) -> Self {
        let creator = Creator {
            id: CreatorId::new("creator-1"),
            name: "Alex Johnson".to_string(),
            handle: "@alexjohnson".to_string(),
            avatar: ImageRef::new("assets/avatars/creator-1.jpg"),
        };

        Self {
            post: Post {
                id: PostId::new(id),
                rank: 1,
                creator,
                thumbnail: ImageRef::new(format!("assets/thumbs/{}.jpg", id)),
                views: 1_000,
                likes: 100,
                comments: 10,
                shares: 5,
                viral_score: 50,
                outlier_score: 50,
                engagement_rate: EngagementRate::new("5.00"),
                caption: format!("fixture post {}", id),
                created_at: base_time(),
                board_id: None,
            },
        }
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.post.rank = rank;
        self
    }

    pub fn creator(mut self, id: &str, handle: &str) -> Self {
        self.post.creator.id = CreatorId::new(id);
        self.post.creator.handle = handle.to_string();
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.post.views = views;
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.post.likes = likes;
        self
    }

    pub fn viral(mut self, score: u32) -> Self {
        self.post.viral_score = score;
        self
    }

    pub fn outlier(mut self, score: u32) -> Self {
        self.post.outlier_score = score;
        self
    }

    pub fn engagement(mut self, rate: &str) -> Self {
        self.post.engagement_rate = EngagementRate::new(rate);
        self
    }

    pub fn caption(mut self, caption: &str) -> Self {
        self.post.caption = caption.to_string();
        self
    }

    pub fn days_ago(mut self, days: i64) -> Self {
        self.post.created_at = base_time() - Duration::days(days);
        self
    }

    pub fn board(mut self, board: &str) -> Self {
        self.post.board_id = Some(BoardId::new(board));
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}

/// A small ranked leaderboard covering distinct score/view/date orderings.
pub fn sample_posts() -> Vec<Post> {
    vec![
        PostBuilder::new("post-1")
            .rank(1)
            .viral(90)
            .outlier(40)
            .views(120_000)
            .engagement("8.40")
            .days_ago(1)
            .build(),
        PostBuilder::new("post-2")
            .rank(2)
            .viral(75)
            .outlier(95)
            .views(640_000)
            .engagement("3.15")
            .days_ago(4)
            .creator("creator-2", "@mariagarcia")
            .build(),
        PostBuilder::new("post-3")
            .rank(3)
            .viral(40)
            .outlier(10)
            .views(980_000)
            .engagement("10.05")
            .days_ago(2)
            .creator("creator-3", "@jamessmith")
            .build(),
        PostBuilder::new("post-4")
            .rank(4)
            .viral(12)
            .outlier(70)
            .views(45_000)
            .engagement("1.75")
            .days_ago(6)
            .build(),
    ]
}
