use clap::ValueEnum;
use flock_types::{SortDirection, SortField, ViewMode};

/// Console output format for non-interactive commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortFieldArg {
    ViralScore,
    OutlierScore,
    Views,
    Engagement,
    Date,
    Default,
}

impl From<SortFieldArg> for SortField {
    fn from(arg: SortFieldArg) -> Self {
        match arg {
            SortFieldArg::ViralScore => SortField::ViralScore,
            SortFieldArg::OutlierScore => SortField::OutlierScore,
            SortFieldArg::Views => SortField::Views,
            SortFieldArg::Engagement => SortField::Engagement,
            SortFieldArg::Date => SortField::Date,
            SortFieldArg::Default => SortField::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Chart,
    Grid,
    Table,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Chart => ViewMode::Chart,
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::Table => ViewMode::Table,
        }
    }
}
