//! Tier streams: lazy, size-ordered enumerations.
//!
//! A [`Tiers`] value is a recipe, not a cursor. Every call to
//! [`Tiers::tiers`] builds a fresh iterator that starts at tier 0, so the
//! same enumeration can be consumed any number of times without one
//! consumer disturbing another.
//!
//! Tier `k` holds the values of size `k`. Combinators must stay online:
//! producing tier `k` may only pull finitely many tiers of their inputs.

mod concat;
pub(crate) mod product;
mod render;
mod sum;

use std::iter;
use std::rc::Rc;

pub use product::product_all;
pub use render::ELLIPSIS;

/// A finite group of values of one size.
pub type Tier<T> = Vec<T>;

/// A (possibly infinite) iterator over tiers.
pub type TierIter<T> = Box<dyn Iterator<Item = Tier<T>>>;

/// A size-ordered enumeration of `T`.
pub struct Tiers<T> {
    recipe: Rc<dyn Fn() -> TierIter<T>>,
}

impl<T> Clone for Tiers<T> {
    fn clone(&self) -> Self {
        Self {
            recipe: Rc::clone(&self.recipe),
        }
    }
}

impl<T> std::fmt::Debug for Tiers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tiers").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Tiers<T> {
    /// Raw constructor from a factory of tier iterators.
    pub fn new<F, I>(make: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = Tier<T>> + 'static,
    {
        Self {
            recipe: Rc::new(move || Box::new(make()) as TierIter<T>),
        }
    }

    /// An enumeration with no tiers at all.
    pub fn empty() -> Self {
        Self::new(iter::empty)
    }

    /// A single tier of size 0 holding `value`.
    pub fn from_value(value: T) -> Self {
        Self::new(move || iter::once(vec![value.clone()]))
    }

    /// A single tier of size 0 holding every choice; all are equally small.
    pub fn from_choices(values: Vec<T>) -> Self {
        Self::new(move || iter::once(values.clone()))
    }

    /// One value per tier, earlier values being smaller.
    pub fn from_list(values: Vec<T>) -> Self {
        Self::new(move || values.clone().into_iter().map(|v| vec![v]))
    }

    /// Lifts a plain sequence into tiered form: tier `i` is `[seq[i]]`.
    pub fn from_sequence<F, I>(make: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = T> + 'static,
    {
        Self::new(move || make().map(|v| vec![v]))
    }

    /// A fresh iterator over the tiers, starting at tier 0.
    pub fn tiers(&self) -> TierIter<T> {
        (self.recipe)()
    }

    /// All values in tier order. Infinite if the enumeration is.
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.tiers().flatten()
    }

    /// The first `n` tiers, realized.
    pub fn take_tiers(&self, n: usize) -> Vec<Tier<T>> {
        self.tiers().take(n).collect()
    }

    /// The first `n` values, realized.
    pub fn take(&self, n: usize) -> Vec<T> {
        self.iter().take(n).collect()
    }

    /// Applies `f` to every value, keeping sizes.
    pub fn map<U, F>(&self, f: F) -> Tiers<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        let src = self.clone();
        let f = Rc::new(f);
        Tiers::new(move || {
            let f = Rc::clone(&f);
            src.tiers()
                .map(move |tier| tier.into_iter().map(|x| (*f)(x)).collect::<Tier<U>>())
        })
    }

    /// Keeps the values satisfying `p`.
    ///
    /// Tiers that lose all their values stay in place as empty tiers, so a
    /// sparse predicate over an infinite enumeration yields long runs of
    /// empty tiers before the next value.
    pub fn filter<P>(&self, p: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let src = self.clone();
        let p = Rc::new(p);
        Tiers::new(move || {
            let p = Rc::clone(&p);
            src.tiers()
                .map(move |tier| tier.into_iter().filter(|x| (*p)(x)).collect::<Tier<T>>())
        })
    }

    /// Shifts every value one size up by prepending an empty tier.
    ///
    /// The source is not touched until tier 1 is requested, so a recursive
    /// enumeration guarded by `delay` unfolds one size at a time.
    pub fn delay(&self) -> Self {
        let src = self.clone();
        Tiers::new(move || Delayed {
            src: Some(src.clone()),
            inner: None,
        })
    }
}

struct Delayed<T> {
    src: Option<Tiers<T>>,
    inner: Option<TierIter<T>>,
}

impl<T: Clone + 'static> Iterator for Delayed<T> {
    type Item = Tier<T>;

    fn next(&mut self) -> Option<Tier<T>> {
        if let Some(inner) = &mut self.inner {
            return inner.next();
        }
        let src = self.src.take()?;
        self.inner = Some(src.tiers());
        Some(Vec::new())
    }
}
