use serde::{Deserialize, Serialize};

/// Presentation mode for the leaderboard.
///
/// The three modes are fully connected: any mode can be selected from any
/// other. The switcher control shows the two non-current modes as
/// quick-switch targets rather than a dropdown of all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Chart,
    Grid,
    Table,
}

impl ViewMode {
    /// All modes in fixed priority order
    pub const ALL: [ViewMode; 3] = [ViewMode::Chart, ViewMode::Grid, ViewMode::Table];

    /// The two non-current modes, in priority order, for the two-button
    /// quick switcher. Never contains `self`.
    pub fn quick_switch_targets(self) -> [ViewMode; 2] {
        match self {
            ViewMode::Chart => [ViewMode::Grid, ViewMode::Table],
            ViewMode::Grid => [ViewMode::Chart, ViewMode::Table],
            ViewMode::Table => [ViewMode::Chart, ViewMode::Grid],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Chart => "Chart",
            ViewMode::Grid => "Grid",
            ViewMode::Table => "Table",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_switch_targets_exclude_current() {
        for mode in ViewMode::ALL {
            let targets = mode.quick_switch_targets();
            assert!(!targets.contains(&mode));
        }
    }

    #[test]
    fn test_quick_switch_targets_cover_other_two() {
        for mode in ViewMode::ALL {
            let targets = mode.quick_switch_targets();
            assert_ne!(targets[0], targets[1]);
            for other in ViewMode::ALL {
                if other != mode {
                    assert!(targets.contains(&other));
                }
            }
        }
    }

    #[test]
    fn test_quick_switch_order_is_deterministic() {
        assert_eq!(
            ViewMode::Chart.quick_switch_targets(),
            [ViewMode::Grid, ViewMode::Table]
        );
        assert_eq!(
            ViewMode::Grid.quick_switch_targets(),
            [ViewMode::Chart, ViewMode::Table]
        );
        assert_eq!(
            ViewMode::Table.quick_switch_targets(),
            [ViewMode::Chart, ViewMode::Grid]
        );
    }
}
