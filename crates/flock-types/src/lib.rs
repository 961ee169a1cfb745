pub mod domain;
pub mod error;
pub mod sort;
pub mod view;

pub use domain::*;
pub use error::{Error, Result};
pub use sort::*;
pub use view::*;
