use super::{Tier, TierIter, Tiers};

/// Tier-wise concatenation of several tier iterators.
///
/// Tier `i` of the result is tier `i` of every input in input order; inputs
/// that ran out contribute nothing. Ends once every input has ended.
struct Zippend<T> {
    inputs: Vec<Option<TierIter<T>>>,
}

impl<T> Iterator for Zippend<T> {
    type Item = Tier<T>;

    fn next(&mut self) -> Option<Tier<T>> {
        let mut tier = Vec::new();
        let mut live = false;
        for slot in &mut self.inputs {
            let Some(input) = slot else { continue };
            match input.next() {
                Some(values) => {
                    live = true;
                    tier.extend(values);
                }
                None => *slot = None,
            }
        }
        live.then_some(tier)
    }
}

impl<T: Clone + 'static> Tiers<T> {
    /// Sum of two enumerations.
    pub fn choice(&self, other: &Tiers<T>) -> Tiers<T> {
        Tiers::sum(vec![self.clone(), other.clone()])
    }

    /// Sum of any number of enumerations. The empty sum has no tiers.
    pub fn sum(alternatives: Vec<Tiers<T>>) -> Tiers<T> {
        Tiers::new(move || Zippend {
            inputs: alternatives.iter().map(|t| Some(t.tiers())).collect(),
        })
    }
}
