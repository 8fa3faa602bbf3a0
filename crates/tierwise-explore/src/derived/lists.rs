use crate::tiers::product::Pulled;
use crate::tiers::{Tier, Tiers};

/// Tiers of lists, defined as a fixed point of itself.
///
/// A list of size `k > 0` is one element of size `i` prepended to a list of
/// size `k - 1 - i`. Only tiers below `k` of the element enumeration and of
/// this enumeration itself are needed, so tier `k` pulls exactly one new
/// element tier and reads back its own already produced tiers.
struct ListTiers<T> {
    elems: Pulled<T>,
    produced: Vec<Tier<Vec<T>>>,
}

impl<T: Clone> Iterator for ListTiers<T> {
    type Item = Tier<Vec<T>>;

    fn next(&mut self) -> Option<Tier<Vec<T>>> {
        if self.produced.is_empty() {
            self.produced.push(vec![Vec::new()]);
            return Some(vec![Vec::new()]);
        }

        self.elems.pull();
        if self.elems.is_barren() {
            return None;
        }

        let size = self.produced.len();
        let mut tier = Vec::new();
        for i in 0..size {
            let Some(xs) = self.elems.seen.get(i) else {
                continue;
            };
            for rest in &self.produced[size - 1 - i] {
                for x in xs {
                    let mut list = Vec::with_capacity(rest.len() + 1);
                    list.push(x.clone());
                    list.extend(rest.iter().cloned());
                    tier.push(list);
                }
            }
        }
        self.produced.push(tier.clone());
        Some(tier)
    }
}

/// Every finite list of values from `elems`, by increasing size.
///
/// The size of a list is its length plus the sizes of its elements.
pub fn lists<T: Clone + 'static>(elems: &Tiers<T>) -> Tiers<Vec<T>> {
    let elems = elems.clone();
    Tiers::new(move || ListTiers {
        elems: Pulled::new(elems.tiers()),
        produced: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_of_bits() {
        let bits = Tiers::from_choices(vec![0, 1]);
        assert_eq!(
            lists(&bits).take(6),
            vec![vec![], vec![0], vec![1], vec![0, 0], vec![1, 0], vec![0, 1]]
        );
    }

    #[test]
    fn test_lists_of_naturals() {
        let nats = Tiers::from_sequence(|| 0u32..);
        assert_eq!(
            lists(&nats).take_tiers(3),
            vec![vec![vec![]], vec![vec![0]], vec![vec![0, 0], vec![1]]]
        );
    }

    #[test]
    fn test_lists_of_nothing() {
        assert_eq!(lists(&Tiers::<u8>::empty()).take_tiers(4), vec![vec![vec![]]]);
        assert_eq!(
            lists(&Tiers::<u8>::from_choices(vec![])).take(4),
            vec![Vec::<u8>::new()]
        );
    }

    #[test]
    fn test_lists_of_unit_one_per_length() {
        let unit = Tiers::from_value(());
        let tiers = lists(&unit).take_tiers(5);
        for (k, tier) in tiers.iter().enumerate() {
            assert_eq!(tier, &vec![vec![(); k]]);
        }
    }
}
