//! Registry-driven enumeration and property checking.
//!
//! - [`registry`]: descriptors to enumerations, with built-in presets
//! - [`config`]: engine configuration loaded from JSON
//! - [`check`]: bounded property checks over enumerated arguments

pub mod check;
pub mod config;
mod presets;
pub mod registry;

pub use check::{check, holds, precondition, CheckError, CheckReport, Outcome, Verdict};
pub use config::{ConfigError, EngineConfig};
pub use registry::{Registry, ResolveError};
pub use tierwise_explore::{NumericMode, Tiers};
pub use tierwise_ir::{TypeDesc, Value};
