//! Enumerations chosen by static type.
//!
//! [`Listable`] mirrors the registry presets for callers that know their
//! argument types at compile time and want typed values rather than
//! dynamically typed ones.

use std::collections::{BTreeMap, BTreeSet};
use std::iter;
use std::ops::Neg;

use crate::derived::{lists, maps, sets};
use crate::leaves::interleave;
use crate::leaves::numeric::{floats, ints, rationals, NumericMode, Rational};
use crate::leaves::text::{chars, strings};
use crate::tiers::Tiers;

/// A type with a canonical size-ordered enumeration.
pub trait Listable: Clone + Sized + 'static {
    fn tiers() -> Tiers<Self>;
}

impl Listable for () {
    fn tiers() -> Tiers<Self> {
        Tiers::from_value(())
    }
}

impl Listable for bool {
    fn tiers() -> Tiers<Self> {
        Tiers::from_choices(vec![false, true])
    }
}

impl Listable for i64 {
    fn tiers() -> Tiers<Self> {
        ints(NumericMode::Default)
    }
}

/// Zero, then positives and negatives interleaved, then `MIN`: every value
/// of the type exactly once.
macro_rules! listable_bounded_signed {
    ($($t:ty),*) => {$(
        impl Listable for $t {
            fn tiers() -> Tiers<Self> {
                Tiers::from_sequence(|| {
                    iter::once(0)
                        .chain(interleave(1..=<$t>::MAX, (1..=<$t>::MAX).map(Neg::neg)))
                        .chain(iter::once(<$t>::MIN))
                })
            }
        }
    )*};
}

listable_bounded_signed!(i8, i32);

impl Listable for u64 {
    fn tiers() -> Tiers<Self> {
        Tiers::from_sequence(|| 0u64..)
    }
}

impl Listable for f64 {
    fn tiers() -> Tiers<Self> {
        floats(NumericMode::Default)
    }
}

impl Listable for Rational {
    fn tiers() -> Tiers<Self> {
        rationals(NumericMode::Default)
    }
}

impl Listable for char {
    fn tiers() -> Tiers<Self> {
        chars()
    }
}

impl Listable for String {
    fn tiers() -> Tiers<Self> {
        strings()
    }
}

/// `None` first, then every `Some(x)` one size above `x`.
impl<T: Listable> Listable for Option<T> {
    fn tiers() -> Tiers<Self> {
        Tiers::from_value(None).choice(&T::tiers().map(Some).delay())
    }
}

impl<T: Listable> Listable for Vec<T> {
    fn tiers() -> Tiers<Self> {
        lists(&T::tiers())
    }
}

impl<T: Listable + Ord> Listable for BTreeSet<T> {
    fn tiers() -> Tiers<Self> {
        sets(&T::tiers())
    }
}

impl<K: Listable + Ord, V: Listable> Listable for BTreeMap<K, V> {
    fn tiers() -> Tiers<Self> {
        maps(&K::tiers(), &V::tiers())
    }
}

impl<A: Listable, B: Listable> Listable for (A, B) {
    fn tiers() -> Tiers<Self> {
        A::tiers().product(&B::tiers())
    }
}

impl<A: Listable, B: Listable, C: Listable> Listable for (A, B, C) {
    fn tiers() -> Tiers<Self> {
        A::tiers().product_with(&B::tiers().product(&C::tiers()), |a, (b, c)| {
            (a.clone(), b.clone(), c.clone())
        })
    }
}
