use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifiers of the types every registry knows about at startup.
pub mod ids {
    pub const BOOL: &str = "bool";
    pub const INT: &str = "int";
    pub const FLOAT: &str = "float";
    pub const STR: &str = "str";
    pub const BYTES: &str = "bytes";
    pub const NONE: &str = "none";
    pub const RANGE: &str = "range";
    pub const LIST: &str = "list";
    pub const TUPLE: &str = "tuple";
    pub const SET: &str = "set";
    pub const DICT: &str = "dict";
    pub const OPTION: &str = "option";
}

/// Description of a type whose values should be enumerated.
///
/// Built by whoever inspects the function under test; the engine treats it
/// as an opaque key and never looks at language type metadata itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDesc {
    /// A plain named type, e.g. `int`.
    Scalar { id: String },
    /// A parametrized type, e.g. `list[int]`.
    Generic {
        origin: String,
        #[serde(default)]
        args: Vec<TypeDesc>,
    },
    /// Values of any of the alternatives, e.g. `int | none`.
    Union { alternatives: Vec<TypeDesc> },
}

impl TypeDesc {
    pub fn scalar(id: impl Into<String>) -> Self {
        TypeDesc::Scalar { id: id.into() }
    }

    pub fn generic(origin: impl Into<String>, args: impl IntoIterator<Item = TypeDesc>) -> Self {
        TypeDesc::Generic {
            origin: origin.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn union(alternatives: impl IntoIterator<Item = TypeDesc>) -> Self {
        TypeDesc::Union {
            alternatives: alternatives.into_iter().collect(),
        }
    }

    // ── Shorthands for the built-in presets ─────────────────────────

    pub fn bool() -> Self {
        Self::scalar(ids::BOOL)
    }

    pub fn int() -> Self {
        Self::scalar(ids::INT)
    }

    pub fn float() -> Self {
        Self::scalar(ids::FLOAT)
    }

    pub fn str() -> Self {
        Self::scalar(ids::STR)
    }

    pub fn none() -> Self {
        Self::scalar(ids::NONE)
    }

    pub fn list(elem: TypeDesc) -> Self {
        Self::generic(ids::LIST, [elem])
    }

    pub fn set(elem: TypeDesc) -> Self {
        Self::generic(ids::SET, [elem])
    }

    pub fn dict(key: TypeDesc, value: TypeDesc) -> Self {
        Self::generic(ids::DICT, [key, value])
    }

    pub fn tuple(elems: impl IntoIterator<Item = TypeDesc>) -> Self {
        Self::generic(ids::TUPLE, elems)
    }

    pub fn option(inner: TypeDesc) -> Self {
        Self::generic(ids::OPTION, [inner])
    }

    /// The scalar id or generic origin; `None` for unions.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeDesc::Scalar { id } => Some(id),
            TypeDesc::Generic { origin, .. } => Some(origin),
            TypeDesc::Union { .. } => None,
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Scalar { id } => write!(f, "{id}"),
            TypeDesc::Generic { origin, args } => {
                write!(f, "{origin}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "]")
            }
            TypeDesc::Union { alternatives } if alternatives.is_empty() => write!(f, "union[]"),
            TypeDesc::Union { alternatives } => {
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    match alt {
                        TypeDesc::Union { .. } => write!(f, "({alt})")?,
                        _ => write!(f, "{alt}")?,
                    }
                }
                Ok(())
            }
        }
    }
}
