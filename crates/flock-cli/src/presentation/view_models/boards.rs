use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BoardRowViewModel {
    pub id: String,
    pub name: String,
    /// Display estimate from the feed, not a live membership count
    pub post_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardListViewModel {
    pub boards: Vec<BoardRowViewModel>,
}
