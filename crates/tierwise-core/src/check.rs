//! Running a property over the enumerated argument tuples.
//!
//! Tuples are tried in enumeration order, smallest first, so the first
//! counterexample found is also one of the smallest.

use std::fmt;

use tierwise_ir::{TypeDesc, Value};
use tracing::{debug, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::registry::{Registry, ResolveError};

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What a property said about one argument tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    /// The tuple did not meet the property's precondition; not counted as a
    /// test.
    Skip(String),
    /// The property could not be evaluated; stops the check.
    Error(String),
}

impl Outcome {
    /// Runs `next` only if this outcome is a pass.
    pub fn and_then(self, next: impl FnOnce() -> Outcome) -> Outcome {
        match self {
            Outcome::Pass => next(),
            other => other,
        }
    }
}

impl From<bool> for Outcome {
    fn from(ok: bool) -> Self {
        if ok {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

impl<E: fmt::Display> From<Result<bool, E>> for Outcome {
    fn from(result: Result<bool, E>) -> Self {
        match result {
            Ok(ok) => ok.into(),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }
}

/// `Pass` when `cond` holds, otherwise a skip. Chain the property body
/// with [`Outcome::and_then`].
pub fn precondition(cond: bool) -> Outcome {
    if cond {
        Outcome::Pass
    } else {
        Outcome::Skip("precondition unmet".to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Passed,
    /// `after` counts the tuples drawn, skipped ones and the failing one
    /// included.
    Falsified { args: Vec<Value>, after: usize },
    Raised {
        args: Vec<Value>,
        cause: String,
        after: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub name: String,
    /// Tuples the property was evaluated on, skips excluded.
    pub tests_run: usize,
    pub skipped: usize,
    /// The enumeration ran out before `max_tests` tuples were drawn.
    pub exhausted: bool,
    pub verdict: Verdict,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

fn show_call(f: &mut fmt::Formatter<'_>, name: &str, args: &[Value]) -> fmt::Result {
    let shown: Vec<String> = args.iter().map(Value::to_string).collect();
    write!(f, "    {name}({})", shown.join(", "))
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Passed => {
                write!(f, "+++ OK, passed {} tests", self.tests_run)?;
                if self.exhausted {
                    write!(f, " (exhausted)")?;
                }
                if self.skipped > 0 {
                    write!(f, ", {} skipped", self.skipped)?;
                }
                write!(f, ": {}", self.name)
            }
            Verdict::Falsified { args, after } => {
                writeln!(f, "*** Failed! Falsifiable after {after} tests:")?;
                show_call(f, &self.name, args)
            }
            Verdict::Raised { args, cause, after } => {
                writeln!(f, "*** Failed! Error after {after} tests:")?;
                show_call(f, &self.name, args)?;
                write!(f, "\n    {cause}")
            }
        }
    }
}

/// Evaluates `prop` on at most `config.max_tests` argument tuples drawn
/// from the fair product of `params`.
///
/// Only `config.max_tests` is read here: the numeric mode and render length
/// are the registry's, fixed when it was built with
/// [`Registry::with_config`] or switched later.
///
/// Skipped tuples count against `max_tests`. The check stops at the first
/// `Fail` or `Error`.
pub fn check<F, O>(
    registry: &Registry,
    name: &str,
    params: &[TypeDesc],
    config: &EngineConfig,
    mut prop: F,
) -> Result<CheckReport, CheckError>
where
    F: FnMut(&[Value]) -> O,
    O: Into<Outcome>,
{
    config.validate()?;
    let cases = registry.resolve_all(params)?;
    debug!(property = name, params = params.len(), max_tests = config.max_tests, "checking");

    let mut tests_run = 0;
    let mut skipped = 0;
    let mut drawn = 0;
    let mut verdict = Verdict::Passed;

    for args in cases.iter().take(config.max_tests) {
        drawn += 1;
        match prop(&args).into() {
            Outcome::Pass => tests_run += 1,
            Outcome::Skip(_) => skipped += 1,
            Outcome::Fail => {
                tests_run += 1;
                verdict = Verdict::Falsified { args, after: drawn };
                break;
            }
            Outcome::Error(cause) => {
                tests_run += 1;
                warn!(property = name, after = drawn, %cause, "property raised");
                verdict = Verdict::Raised {
                    args,
                    cause,
                    after: drawn,
                };
                break;
            }
        }
    }

    let exhausted = verdict == Verdict::Passed && drawn < config.max_tests;
    debug!(property = name, tests_run, skipped, exhausted, "check finished");
    Ok(CheckReport {
        name: name.to_string(),
        tests_run,
        skipped,
        exhausted,
        verdict,
    })
}

/// Whether `prop` survives [`check`].
pub fn holds<F, O>(
    registry: &Registry,
    params: &[TypeDesc],
    config: &EngineConfig,
    prop: F,
) -> Result<bool, CheckError>
where
    F: FnMut(&[Value]) -> O,
    O: Into<Outcome>,
{
    Ok(check(registry, "holds", params, config, prop)?.passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Pass);
        assert_eq!(Outcome::from(false), Outcome::Fail);
    }

    #[test]
    fn test_outcome_from_result() {
        let err: Result<bool, String> = Err("division by zero".to_string());
        assert_eq!(Outcome::from(err), Outcome::Error("division by zero".to_string()));
        assert_eq!(Outcome::from(Ok::<bool, String>(true)), Outcome::Pass);
    }

    #[test]
    fn test_precondition_chains() {
        assert_eq!(precondition(true).and_then(|| Outcome::Fail), Outcome::Fail);
        assert!(matches!(precondition(false).and_then(|| Outcome::Fail), Outcome::Skip(_)));
    }

    #[test]
    fn test_report_display_falsified() {
        let report = CheckReport {
            name: "prop_increase".to_string(),
            tests_run: 1,
            skipped: 0,
            exhausted: false,
            verdict: Verdict::Falsified {
                args: vec![Value::Int(0), Value::Int(0)],
                after: 1,
            },
        };
        assert_eq!(
            report.to_string(),
            "*** Failed! Falsifiable after 1 tests:\n    prop_increase(0, 0)"
        );
    }

    #[test]
    fn test_report_display_exhausted() {
        let report = CheckReport {
            name: "prop_not_not".to_string(),
            tests_run: 2,
            skipped: 0,
            exhausted: true,
            verdict: Verdict::Passed,
        };
        assert_eq!(report.to_string(), "+++ OK, passed 2 tests (exhausted): prop_not_not");
    }
}
