//! Cross-view sort synchronizer.
//!
//! The table exposes a two-axis control (field + direction), the grid a
//! one-axis named preset. Both are projections of one canonical
//! [`SortState`], owned here by [`SharedSort`]. A change on either control
//! surface goes through SharedSort, so the other surface always displays a
//! state consistent with the resulting order.

use serde::{Deserialize, Serialize};

use flock_types::{SortDirection, SortField, SortState};

/// Named sort preset exposed by the grid view's dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridPreset {
    MostRelevant,
    MostViral,
    MostViews,
    Latest,
}

impl GridPreset {
    pub const ALL: [GridPreset; 4] = [
        GridPreset::MostRelevant,
        GridPreset::MostViral,
        GridPreset::MostViews,
        GridPreset::Latest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GridPreset::MostRelevant => "Most Relevant",
            GridPreset::MostViral => "Most Viral",
            GridPreset::MostViews => "Most Views",
            GridPreset::Latest => "Latest",
        }
    }
}

/// Preset implied by a table sort field.
///
/// Fields without a named preset display as "most relevant".
pub fn preset_for(field: SortField) -> GridPreset {
    match field {
        SortField::ViralScore => GridPreset::MostViral,
        SortField::Views => GridPreset::MostViews,
        SortField::Date => GridPreset::Latest,
        _ => GridPreset::MostRelevant,
    }
}

/// Table state installed when a preset is chosen. Presets always sort
/// descending; the relevance fallback is viral score.
pub fn sort_state_for(preset: GridPreset) -> SortState {
    match preset {
        GridPreset::MostViral => SortState::descending(SortField::ViralScore),
        GridPreset::MostViews => SortState::descending(SortField::Views),
        GridPreset::Latest => SortState::descending(SortField::Date),
        GridPreset::MostRelevant => SortState::descending(SortField::ViralScore),
    }
}

/// Owner of the single canonical sort state.
///
/// Each mutation corresponds to exactly one user action on one control
/// surface and must trigger exactly one re-sort in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SharedSort {
    state: SortState,
}

impl SharedSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: SortState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Preset the grid dropdown should display for the current state
    pub fn preset(&self) -> GridPreset {
        preset_for(self.state.field)
    }

    /// Table header click: a new field starts ascending, a repeated click
    /// on the active field toggles direction.
    pub fn click_header(&mut self, field: SortField) -> SortState {
        self.state = if self.state.field == field {
            SortState::new(field, self.state.direction.toggled())
        } else {
            SortState::new(field, SortDirection::Asc)
        };
        self.state
    }

    /// Grid dropdown change: install the preset's (field, direction) pair.
    pub fn select_preset(&mut self, preset: GridPreset) -> SortState {
        self.state = sort_state_for(preset);
        self.state
    }
}
