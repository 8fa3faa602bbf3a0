use std::collections::BTreeSet;

use proptest::prelude::*;
use tierwise_explore::leaves::numeric::{ints, NumericMode};
use tierwise_explore::{lists, product_all, sets, Listable, Tiers};

fn naturals() -> Tiers<u32> {
    Tiers::from_sequence(|| 0u32..)
}

fn bits() -> Tiers<u8> {
    Tiers::from_choices(vec![0, 1])
}

// ── Concrete orderings ──

#[test]
fn test_product_of_choices() {
    let t = Tiers::from_choices(vec![0, 1]).product(&Tiers::from_choices(vec![10, 20]));
    assert_eq!(t.take(10), vec![(0, 10), (0, 20), (1, 10), (1, 20)]);
}

#[test]
fn test_choice_zips_tiers() {
    let left = Tiers::from_list(vec!['a', 'b']);
    let right = Tiers::from_choices(vec!['c', 'd']);
    assert_eq!(left.choice(&right).take_tiers(5), vec![vec!['a', 'c', 'd'], vec!['b']]);
}

#[test]
fn test_integers_prefix() {
    assert_eq!(ints(NumericMode::Default).take(7), vec![0, 1, -1, 2, -2, 3, -3]);
}

#[test]
fn test_set_of_ints_prefix() {
    let shown: Vec<Vec<i64>> = sets(&ints(NumericMode::Default))
        .take(6)
        .into_iter()
        .map(|s| s.into_iter().collect())
        .collect();
    assert_eq!(
        shown,
        vec![vec![], vec![0], vec![1], vec![0, 1], vec![-1], vec![-1, 0]]
    );
}

#[test]
fn test_product_all_of_three_naturals() {
    let t = product_all(vec![naturals(), naturals(), naturals()]);
    assert_eq!(t.take_tiers(2)[1], vec![vec![0, 0, 1], vec![0, 1, 0], vec![1, 0, 0]]);
}

// ── Rendering ──

#[test]
fn test_render_lists_of_bools() {
    let t = Vec::<bool>::tiers();
    assert_eq!(
        t.render_values(6),
        "[[], [false], [true], [false, false], [true, false], [false, true], ...]"
    );
}

// ── Structural properties ──

#[test]
fn test_no_duplicates_in_nested_enumeration() {
    let found = Vec::<(bool, i64)>::tiers().take(500);
    let unique: BTreeSet<_> = found.iter().cloned().collect();
    assert_eq!(unique.len(), found.len());
}

#[test]
fn test_finite_product_has_m_plus_n_minus_one_tiers() {
    let xs = Tiers::from_list(vec![0, 1, 2]);
    let ys = Tiers::from_list(vec![0, 1]);
    assert_eq!(xs.product(&ys).take_tiers(100).len(), 4);
}

#[test]
fn test_consumers_are_independent() {
    let t = lists(&bits());
    let mut a = t.tiers();
    let _ = a.next();
    let _ = a.next();
    assert_eq!(t.take(2), vec![vec![], vec![0]]);
    assert_eq!(a.next(), Some(vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]));
}

proptest! {
    #[test]
    fn test_pair_lands_on_its_diagonal(a in 0u32..30, b in 0u32..30) {
        let size = (a + b) as usize;
        let tiers = naturals().product(&naturals()).take_tiers(size + 1);
        prop_assert!(tiers[size].contains(&(a, b)));
    }

    #[test]
    fn test_every_bit_list_is_enumerated(xs in proptest::collection::vec(0u8..2, 0..6)) {
        let tiers = lists(&bits()).take_tiers(xs.len() + 1);
        prop_assert!(tiers[xs.len()].contains(&xs));
    }

    #[test]
    fn test_choice_keeps_both_sides(a in 0u32..40, b in 0u32..40) {
        let evens = naturals().map(|n| 2 * n);
        let odds = naturals().map(|n| 2 * n + 1);
        let merged = evens.choice(&odds).take_tiers(a.max(b) as usize + 1);
        prop_assert!(merged[a as usize].contains(&(2 * a)));
        prop_assert!(merged[b as usize].contains(&(2 * b + 1)));
    }

    #[test]
    fn test_sets_have_no_duplicates(n in 1usize..60) {
        let chosen = sets(&naturals()).take(n);
        let unique: BTreeSet<_> = chosen.iter().cloned().collect();
        prop_assert_eq!(unique.len(), chosen.len());
    }
}
