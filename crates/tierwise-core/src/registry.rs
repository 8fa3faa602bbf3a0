//! Type registry: descriptor → enumeration.
//!
//! Resolution order for a descriptor:
//! - an exact entry registered for the whole descriptor wins
//! - a scalar without an entry is unknown
//! - a generic resolves its origin's builder and each argument, recursively
//! - a union resolves every alternative and merges them with `choice`
//!
//! Nothing is memoized: every `resolve` builds a fresh enumeration, so later
//! registrations and numeric mode switches are always honoured.
//!
//! Constructor types may refer to themselves through their fields. The
//! inner reference is resolved lazily, and each record is one size above its
//! fields, so such types unfold one size at a time.

use std::collections::HashMap;
use std::fmt;
use std::iter;
use std::rc::Rc;

use tierwise_explore::{product_all, NumericMode, TierIter, Tiers};
use tierwise_ir::{TypeDesc, Value};
use tracing::{debug, trace, warn};

use crate::config::EngineConfig;
use crate::presets;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("could not find an enumeration for '{descriptor}'")]
    UnknownType { descriptor: TypeDesc },

    #[error("'{origin}' takes {expected} type argument(s), got {found}")]
    ArityMismatch {
        origin: String,
        expected: usize,
        found: usize,
    },
}

/// Builds the enumeration of a generic type from its arguments' enumerations.
pub type BuildFn = Rc<dyn Fn(&[Tiers<Value>]) -> Tiers<Value>>;

/// Builds a record value from its resolved field values.
pub type ConstructFn = Rc<dyn Fn(Vec<Value>) -> Value>;

#[derive(Clone)]
enum Entry {
    Tiers(Tiers<Value>),
    Constructor {
        args: Vec<TypeDesc>,
        construct: ConstructFn,
    },
}

#[derive(Clone)]
struct Builder {
    /// `None` for variadic builders such as `tuple`.
    arity: Option<usize>,
    build: BuildFn,
}

/// Enumerations known by descriptor, plus builders for generic origins.
///
/// Owned by the caller; there is no process-wide table.
#[derive(Clone)]
pub struct Registry {
    entries: HashMap<TypeDesc, Entry>,
    builders: HashMap<String, Builder>,
    numeric: NumericMode,
    render_len: usize,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut origins: Vec<&String> = self.builders.keys().collect();
        origins.sort();
        f.debug_struct("Registry")
            .field("entries", &self.entries.len())
            .field("builders", &origins)
            .field("numeric", &self.numeric)
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry with the built-in presets installed.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// A registry with the built-in presets, in the config's numeric mode.
    pub fn with_config(config: &EngineConfig) -> Self {
        let mut registry = Self::bare();
        registry.render_len = config.render_len;
        presets::install(&mut registry, config.numeric);
        registry
    }

    /// A registry that knows no types at all.
    pub fn bare() -> Self {
        Self {
            entries: HashMap::new(),
            builders: HashMap::new(),
            numeric: NumericMode::Default,
            render_len: EngineConfig::default().render_len,
        }
    }

    // ── Registration ──

    /// Registers (or replaces) the enumeration for `desc`.
    pub fn register(&mut self, desc: TypeDesc, tiers: Tiers<Value>) {
        debug!(descriptor = %desc, "registered enumeration");
        self.entries.insert(desc, Entry::Tiers(tiers));
    }

    /// Registers (or replaces) the builder for a generic origin.
    ///
    /// The arity is checked when the builder is used, not here.
    pub fn register_builder<F>(&mut self, origin: impl Into<String>, arity: Option<usize>, build: F)
    where
        F: Fn(&[Tiers<Value>]) -> Tiers<Value> + 'static,
    {
        let origin = origin.into();
        debug!(origin = %origin, ?arity, "registered builder");
        self.builders.insert(
            origin,
            Builder {
                arity,
                build: Rc::new(build),
            },
        );
    }

    /// Registers a product type: the fair product of `args`, passed through
    /// `construct`.
    ///
    /// `args` are looked up each time `desc` is resolved, and may mention
    /// `desc` itself. A record is one size above its fields.
    pub fn register_cons<F>(&mut self, desc: TypeDesc, args: Vec<TypeDesc>, construct: F)
    where
        F: Fn(Vec<Value>) -> Value + 'static,
    {
        debug!(descriptor = %desc, fields = args.len(), "registered constructor");
        self.entries.insert(
            desc,
            Entry::Constructor {
                args,
                construct: Rc::new(construct),
            },
        );
    }

    pub fn is_registered(&self, desc: &TypeDesc) -> bool {
        self.entries.contains_key(desc)
    }

    pub fn has_builder(&self, origin: &str) -> bool {
        self.builders.contains_key(origin)
    }

    // ── Numeric mode ──

    pub fn numeric_mode(&self) -> NumericMode {
        self.numeric
    }

    /// Re-registers `int`, `float` and `range` for `mode`.
    pub fn set_numeric_mode(&mut self, mode: NumericMode) {
        debug!(from = ?self.numeric, to = ?mode, "switching numeric mode");
        presets::install_numeric(self, mode);
        self.numeric = mode;
    }

    pub fn only_positives(&mut self) {
        self.set_numeric_mode(NumericMode::OnlyPositives);
    }

    pub fn only_non_negatives(&mut self) {
        self.set_numeric_mode(NumericMode::OnlyNonNegatives);
    }

    pub fn default_numbers(&mut self) {
        self.set_numeric_mode(NumericMode::Default);
    }

    // ── Resolution ──

    /// The enumeration for `desc`.
    ///
    /// On failure, the error names the innermost descriptor that could not be
    /// resolved; the registry is left untouched.
    pub fn resolve(&self, desc: &TypeDesc) -> Result<Tiers<Value>, ResolveError> {
        self.resolve_within(desc, &mut Vec::new())
    }

    /// `active` holds the constructor descriptors being resolved further up;
    /// meeting one again ties a lazy knot instead of recursing.
    fn resolve_within(
        &self,
        desc: &TypeDesc,
        active: &mut Vec<TypeDesc>,
    ) -> Result<Tiers<Value>, ResolveError> {
        trace!(descriptor = %desc, "resolving");
        if let Some(entry) = self.entries.get(desc) {
            return match entry {
                Entry::Tiers(tiers) => Ok(tiers.clone()),
                Entry::Constructor { .. } if active.contains(desc) => {
                    trace!(descriptor = %desc, "recursive reference");
                    Ok(self.knot(desc))
                }
                Entry::Constructor { args, construct } => {
                    active.push(desc.clone());
                    let fields = self.resolve_each(args, active);
                    active.pop();
                    Ok(construct_tiers(fields?, Rc::clone(construct)))
                }
            };
        }

        match desc {
            TypeDesc::Scalar { .. } => Err(ResolveError::UnknownType {
                descriptor: desc.clone(),
            }),
            TypeDesc::Generic { origin, args } => {
                let builder = self
                    .builders
                    .get(origin)
                    .ok_or_else(|| ResolveError::UnknownType {
                        descriptor: desc.clone(),
                    })?;
                if let Some(expected) = builder.arity {
                    if expected != args.len() {
                        return Err(ResolveError::ArityMismatch {
                            origin: origin.clone(),
                            expected,
                            found: args.len(),
                        });
                    }
                }
                let resolved = self.resolve_each(args, active)?;
                Ok((builder.build)(&resolved))
            }
            TypeDesc::Union { alternatives } => {
                let resolved = self.resolve_each(alternatives, active)?;
                Ok(Tiers::sum(resolved))
            }
        }
    }

    fn resolve_each(
        &self,
        descs: &[TypeDesc],
        active: &mut Vec<TypeDesc>,
    ) -> Result<Vec<Tiers<Value>>, ResolveError> {
        descs
            .iter()
            .map(|desc| self.resolve_within(desc, active))
            .collect()
    }

    /// A back-reference to a constructor type: resolved again, from a
    /// snapshot of this registry, only when its tiers are iterated.
    fn knot(&self, desc: &TypeDesc) -> Tiers<Value> {
        let registry = self.clone();
        let desc = desc.clone();
        Tiers::new(move || match registry.resolve(&desc) {
            Ok(tiers) => tiers.tiers(),
            Err(err) => {
                warn!(descriptor = %desc, %err, "recursive reference no longer resolves");
                Box::new(iter::empty()) as TierIter<Value>
            }
        })
    }

    /// Fair product of the enumerations for every descriptor, in order.
    pub fn resolve_all(&self, descs: &[TypeDesc]) -> Result<Tiers<Vec<Value>>, ResolveError> {
        Ok(product_all(self.resolve_each(descs, &mut Vec::new())?))
    }

    /// Resolves `args` now and builds values with `construct`, one size
    /// above their fields.
    pub fn cons(
        &self,
        args: &[TypeDesc],
        construct: ConstructFn,
    ) -> Result<Tiers<Value>, ResolveError> {
        let fields = self.resolve_each(args, &mut Vec::new())?;
        Ok(construct_tiers(fields, construct))
    }

    /// The first values of `desc`'s enumeration, `...` if more exist.
    pub fn render(&self, desc: &TypeDesc) -> Result<String, ResolveError> {
        let tiers = self.resolve(desc)?;
        Ok(tiers.render_values_with(self.render_len, Value::to_string))
    }
}

/// Records sit one size above their fields, which keeps recursive
/// constructor types productive.
fn construct_tiers(fields: Vec<Tiers<Value>>, construct: ConstructFn) -> Tiers<Value> {
    product_all(fields)
        .map(move |values| (*construct)(values))
        .delay()
}
