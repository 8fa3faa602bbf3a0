//! Fair (diagonal) products.
//!
//! Size of a pair is the sum of the sizes of its parts, so tier `k` of
//! `xs * ys` is the union over `i + j = k` of `xs[i] × ys[j]`. Each output
//! tier pulls at most one new tier from each side, which keeps the product
//! online even when both sides are infinite.

use std::iter;
use std::rc::Rc;

use super::{Tier, TierIter, Tiers};

/// Cross products along the `size`-th anti-diagonal, splits in increasing
/// `xss` index, `xss` values outer and `yss` values inner.
pub(crate) fn diagonal<A, B, C>(
    xss: &[Tier<A>],
    yss: &[Tier<B>],
    size: usize,
    pair: &dyn Fn(&A, &B) -> C,
) -> Tier<C> {
    let mut tier = Vec::new();
    for i in 0..=size {
        let (Some(xs), Some(ys)) = (xss.get(i), yss.get(size - i)) else {
            continue;
        };
        for x in xs {
            for y in ys {
                tier.push(pair(x, y));
            }
        }
    }
    tier
}

/// One side of a product: the tiers pulled so far plus the live iterator.
pub(crate) struct Pulled<T> {
    source: Option<TierIter<T>>,
    pub(crate) seen: Vec<Tier<T>>,
}

impl<T> Pulled<T> {
    pub(crate) fn new(source: TierIter<T>) -> Self {
        Self {
            source: Some(source),
            seen: Vec::new(),
        }
    }

    /// Pulls one more tier unless the source already ended.
    pub(crate) fn pull(&mut self) {
        if let Some(source) = &mut self.source {
            match source.next() {
                Some(tier) => self.seen.push(tier),
                None => self.source = None,
            }
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.source.is_none()
    }

    /// Ended without producing a single value.
    pub(crate) fn is_barren(&self) -> bool {
        self.is_done() && self.seen.iter().all(Vec::is_empty)
    }

    /// Total size of all values seen, each value weighing its size plus one.
    pub(crate) fn weight(&self) -> usize {
        self.seen
            .iter()
            .enumerate()
            .map(|(i, tier)| (i + 1) * tier.len())
            .sum()
    }
}

struct Diagonal<A, B, C> {
    xs: Pulled<A>,
    ys: Pulled<B>,
    size: usize,
    pair: Rc<dyn Fn(&A, &B) -> C>,
}

impl<A, B, C> Iterator for Diagonal<A, B, C> {
    type Item = Tier<C>;

    fn next(&mut self) -> Option<Tier<C>> {
        self.xs.pull();
        self.ys.pull();

        if self.xs.is_barren() || self.ys.is_barren() {
            return None;
        }
        // Finite sides of m and n tiers give m + n - 1 tiers.
        if self.xs.is_done()
            && self.ys.is_done()
            && self.size + 2 > self.xs.seen.len() + self.ys.seen.len()
        {
            return None;
        }

        let tier = diagonal(&self.xs.seen, &self.ys.seen, self.size, &*self.pair);
        self.size += 1;
        Some(tier)
    }
}

impl<T: Clone + 'static> Tiers<T> {
    /// Fair product into pairs.
    pub fn product<U: Clone + 'static>(&self, other: &Tiers<U>) -> Tiers<(T, U)> {
        self.product_with(other, |x, y| (x.clone(), y.clone()))
    }

    /// Fair product combining each pair with `f`.
    pub fn product_with<U, V, F>(&self, other: &Tiers<U>, f: F) -> Tiers<V>
    where
        U: Clone + 'static,
        V: Clone + 'static,
        F: Fn(&T, &U) -> V + 'static,
    {
        let xs = self.clone();
        let ys = other.clone();
        let pair: Rc<dyn Fn(&T, &U) -> V> = Rc::new(f);
        Tiers::new(move || Diagonal {
            xs: Pulled::new(xs.tiers()),
            ys: Pulled::new(ys.tiers()),
            size: 0,
            pair: Rc::clone(&pair),
        })
    }
}

/// N-ary fair product into vectors.
///
/// Folds the binary product from the right; the product of nothing is a
/// single tier holding the empty vector.
pub fn product_all<T: Clone + 'static>(factors: Vec<Tiers<T>>) -> Tiers<Vec<T>> {
    let unit: Tiers<Vec<T>> = Tiers::new(|| iter::once(vec![Vec::new()]));
    factors.into_iter().rev().fold(unit, |rest, factor| {
        factor.product_with(&rest, |x, xs| {
            let mut v = Vec::with_capacity(xs.len() + 1);
            v.push(x.clone());
            v.extend(xs.iter().cloned());
            v
        })
    })
}
