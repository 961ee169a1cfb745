use serde::{Deserialize, Serialize};

/// Field the leaderboard is ordered by.
///
/// `Default` means the feed's original rank order; unrecognized control
/// input maps here rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ViralScore,
    OutlierScore,
    Views,
    Engagement,
    Date,
    Default,
}

/// Sort direction for the active field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The one logical sort configuration shared by every view renderer.
///
/// Exactly one instance exists per leaderboard, owned above the views; the
/// views receive it read-only and request changes through callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl Default for SortState {
    /// The leaderboard lands on viral score, highest first.
    fn default() -> Self {
        Self::descending(SortField::ViralScore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_toggles_both_ways() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }

    #[test]
    fn test_default_state_is_viral_desc() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::ViralScore);
        assert_eq!(state.direction, SortDirection::Desc);
    }
}
