//! Enumerations derived from the tier combinators: lists, sets and maps.

mod lists;
mod sets;

pub use lists::lists;
pub use sets::{maps, sets};
