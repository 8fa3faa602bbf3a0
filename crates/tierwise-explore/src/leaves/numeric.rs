//! Numeric leaves: integers, exact rationals and floats.
//!
//! Rationals follow the Calkin–Wilf order, read off Stern's diatomic
//! sequence (`fusc`): every positive rational appears exactly once, already
//! in lowest terms.

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

use super::interleave;
use crate::tiers::Tiers;

/// Which numbers the numeric enumerations produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericMode {
    /// Zero, then positives and negatives interleaved.
    #[default]
    Default,
    /// Strictly positive numbers only.
    OnlyPositives,
    /// Zero and the positive numbers.
    OnlyNonNegatives,
}

/// Stern's diatomic sequence: `fusc(0) = 0`, `fusc(1) = 1`,
/// `fusc(2n) = fusc(n)`, `fusc(2n + 1) = fusc(n) + fusc(n + 1)`.
pub fn fusc(mut n: u64) -> u64 {
    let (mut a, mut b) = (1u64, 0u64);
    while n != 0 {
        if n & 1 == 0 {
            a += b;
        } else {
            b += a;
        }
        n >>= 1;
    }
    b
}

/// An exact rational number in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i64,
    denom: u64,
}

impl Rational {
    pub const ZERO: Rational = Rational { numer: 0, denom: 1 };

    /// Builds `numer / denom` reduced to lowest terms. `None` when `denom` is 0.
    pub fn new(numer: i64, denom: u64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        if numer == 0 {
            return Some(Self::ZERO);
        }
        let g = gcd(numer.unsigned_abs(), denom);
        let denom = denom / g;
        let numer = numer / i64::try_from(g).ok()?;
        Some(Self { numer, denom })
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> u64 {
        self.denom
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numer) * i128::from(other.denom);
        let rhs = i128::from(other.numer) * i128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// `1, 1/2, 2, 1/3, 3/2, 2/3, 3, 1/4, …`
fn calkin_wilf() -> impl Iterator<Item = Rational> {
    (1u64..).map(|n| Rational {
        numer: fusc(n) as i64,
        denom: fusc(n + 1),
    })
}

// ── Enumerations ──

/// Integers, one per tier: `0, 1, -1, 2, -2, …` by default.
pub fn ints(mode: NumericMode) -> Tiers<i64> {
    match mode {
        NumericMode::Default => Tiers::from_sequence(|| {
            iter::once(0).chain(interleave(1i64.., (1i64..).map(Neg::neg)))
        }),
        NumericMode::OnlyPositives => Tiers::from_sequence(|| 1i64..),
        NumericMode::OnlyNonNegatives => Tiers::from_sequence(|| 0i64..),
    }
}

/// Every rational exactly once, one per tier.
pub fn rationals(mode: NumericMode) -> Tiers<Rational> {
    match mode {
        NumericMode::Default => Tiers::from_sequence(|| {
            iter::once(Rational::ZERO).chain(interleave(calkin_wilf(), calkin_wilf().map(Neg::neg)))
        }),
        NumericMode::OnlyPositives => Tiers::from_sequence(calkin_wilf),
        NumericMode::OnlyNonNegatives => {
            Tiers::from_sequence(|| iter::once(Rational::ZERO).chain(calkin_wilf()))
        }
    }
}

/// The rationals, converted to floating point.
pub fn floats(mode: NumericMode) -> Tiers<f64> {
    rationals(mode).map(|q| q.to_f64())
}
