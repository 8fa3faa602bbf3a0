use std::rc::Rc;

use super::{Tier, TierIter, Tiers};

/// Merges the sub-enumerations spawned by each source value.
///
/// A value found at source tier `i` starts its sub-enumeration at output
/// tier `i`, so its tier `j` lands at output tier `i + j`: the same diagonal
/// as the product. Live sub-enumerations are kept in spawn order.
struct ConcatMap<T, U> {
    source: Option<TierIter<T>>,
    live: Vec<TierIter<U>>,
    spawn: Rc<dyn Fn(&T) -> Tiers<U>>,
}

impl<T, U: Clone + 'static> Iterator for ConcatMap<T, U> {
    type Item = Tier<U>;

    fn next(&mut self) -> Option<Tier<U>> {
        if let Some(source) = &mut self.source {
            match source.next() {
                Some(tier) => {
                    for x in &tier {
                        self.live.push((self.spawn)(x).tiers());
                    }
                }
                None => self.source = None,
            }
        }
        if self.source.is_none() && self.live.is_empty() {
            return None;
        }

        let mut tier = Vec::new();
        self.live.retain_mut(|sub| match sub.next() {
            Some(values) => {
                tier.extend(values);
                true
            }
            None => false,
        });

        if self.source.is_none() && self.live.is_empty() && tier.is_empty() {
            return None;
        }
        Some(tier)
    }
}

impl<T: Clone + 'static> Tiers<T> {
    /// Maps every value to an enumeration and merges them fairly.
    pub fn concat_map<U, F>(&self, f: F) -> Tiers<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> Tiers<U> + 'static,
    {
        let src = self.clone();
        let spawn: Rc<dyn Fn(&T) -> Tiers<U>> = Rc::new(f);
        Tiers::new(move || ConcatMap {
            source: Some(src.tiers()),
            live: Vec::new(),
            spawn: Rc::clone(&spawn),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_map_shifts_by_source_size() {
        let src = Tiers::from_list(vec![1u32, 2]);
        let t = src.concat_map(|&n| Tiers::from_list(vec![n * 10, n * 10 + 1]));
        assert_eq!(
            t.take_tiers(10),
            vec![vec![10], vec![11, 20], vec![21]]
        );
    }

    #[test]
    fn test_concat_map_over_infinite_source() {
        let src = Tiers::from_sequence(|| 0u32..);
        let t = src.concat_map(|&n| Tiers::from_choices(vec![(n, 'x'), (n, 'y')]));
        assert_eq!(
            t.take(6),
            vec![(0, 'x'), (0, 'y'), (1, 'x'), (1, 'y'), (2, 'x'), (2, 'y')]
        );
    }

    #[test]
    fn test_concat_map_with_infinite_subs() {
        let src = Tiers::from_choices(vec![0u32, 100]);
        let t = src.concat_map(|&n| Tiers::from_sequence(move || n..));
        assert_eq!(t.take(6), vec![0, 100, 1, 101, 2, 102]);
    }

    #[test]
    fn test_concat_map_of_empty() {
        let t = Tiers::<u8>::empty().concat_map(|&n| Tiers::from_value(n));
        assert!(t.take_tiers(3).is_empty());
    }
}
