//! Size-ordered exhaustive enumeration.
//!
//! - [`tiers`]: the tier stream type and its combinators (sum, product,
//!   concat-map, bounded rendering)
//! - [`derived`]: lists, sets and maps built from element enumerations
//! - [`leaves`]: integers, rationals, floats, characters and strings
//! - [`listable`]: enumerations selected by static type

pub mod derived;
pub mod leaves;
pub mod listable;
pub mod tiers;

pub use derived::{lists, maps, sets};
pub use leaves::numeric::{NumericMode, Rational};
pub use listable::Listable;
pub use tiers::{product_all, Tier, TierIter, Tiers};
