pub mod parse;
pub mod types;
pub mod value;

pub use parse::{parse_descriptor, parse_type, ParseError};
pub use types::TypeDesc;
pub use value::Value;
