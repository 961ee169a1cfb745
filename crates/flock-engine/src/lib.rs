// NOTE: flock-engine Architecture Rationale
//
// Why a pure engine crate (no I/O, no UI)?
// - The same ordering must back three different renderers (chart, grid,
//   table); any view-local sorting would let the surfaces drift apart
// - Pure functions over &[Post] keep every property testable without a
//   terminal or a feed
// - Rank is derived here, immediately after ordering, so no caller can
//   observe a sequence whose ranks disagree with its order
//
// Why a synchronizer type instead of two sort states?
// - The table exposes (field, direction), the grid exposes a named preset;
//   both are projections of ONE SortState owned by SharedSort
// - Either control surface mutates through SharedSort, so a change from one
//   surface is always visible consistently on the other

pub mod chart;
pub mod sort;
pub mod sync;

pub use chart::*;
pub use sort::*;
pub use sync::*;
