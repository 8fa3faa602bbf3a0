use std::collections::{BTreeMap, BTreeSet};

use super::lists::lists;
use crate::tiers::product::Pulled;
use crate::tiers::{product_all, Tier, TierIter, Tiers};

/// Increasing lists, cut off past the largest possible set when the
/// element enumeration is finite.
struct SetTiers<T> {
    increasing: TierIter<Vec<T>>,
    elems: Pulled<T>,
    size: usize,
}

impl<T> Iterator for SetTiers<T> {
    type Item = Tier<Vec<T>>;

    fn next(&mut self) -> Option<Tier<Vec<T>>> {
        self.elems.pull();
        // The set of every element has size `weight()`; nothing is larger.
        if self.elems.is_done() && self.size > self.elems.weight() {
            return None;
        }
        self.size += 1;
        self.increasing.next()
    }
}

/// Every finite set of values from `elems`.
///
/// Built by keeping only the strictly increasing lists, which drops
/// permutations and repeats. Correct but wasteful: most generated lists are
/// thrown away, and whole tiers may come out empty. Over a finite element
/// enumeration the stream ends after the tier holding the full set.
pub fn sets<T: Clone + Ord + 'static>(elems: &Tiers<T>) -> Tiers<BTreeSet<T>> {
    let elems = elems.clone();
    let increasing = lists(&elems).filter(|xs| xs.windows(2).all(|w| w[0] < w[1]));
    Tiers::new(move || SetTiers {
        increasing: increasing.tiers(),
        elems: Pulled::new(elems.tiers()),
        size: 0,
    })
    .map(|xs| xs.into_iter().collect())
}

/// Every finite map from keys of `keys` to values of `values`.
///
/// For each key set of `n` keys, all `n`-tuples of values are zipped onto
/// the keys; the size of a map is the size of its key set plus the sizes of
/// its values.
pub fn maps<K, V>(keys: &Tiers<K>, values: &Tiers<V>) -> Tiers<BTreeMap<K, V>>
where
    K: Clone + Ord + 'static,
    V: Clone + 'static,
{
    let values = values.clone();
    sets(keys).concat_map(move |key_set| {
        let key_list: Vec<K> = key_set.iter().cloned().collect();
        product_all(vec![values.clone(); key_list.len()]).map(move |picked| {
            key_list.iter().cloned().zip(picked).collect::<BTreeMap<K, V>>()
        })
    })
}
