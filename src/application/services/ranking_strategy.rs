//! # Ranking Strategy
//!
//! Merging per-company lists and ordering the candidate set.
//!
//! [`merge_candidates`] concatenates the lists in the order given.
//! [`FieldRanking`] then sorts by the requested [`SortKey`] with a stable
//! sort, so candidates that compare equal keep their merge order and
//! ranking the same input twice gives the same output.

use crate::domain::entities::Product;
use crate::domain::value_objects::{RankingKey, SortKey};
use std::cmp::Ordering;
use std::fmt;

/// Concatenates per-company lists into one candidate set.
///
/// The result length is the sum of the input lengths.
#[must_use]
pub fn merge_candidates(lists: Vec<Vec<Product>>) -> Vec<Product> {
    let total = lists.iter().map(Vec::len).sum();
    let mut candidates = Vec::with_capacity(total);
    for list in lists {
        candidates.extend(list);
    }
    candidates
}

/// Trait for ranking strategies.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Orders `candidates` according to `key`.
    fn rank(&self, candidates: Vec<Product>, key: RankingKey) -> Vec<Product>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Stable sort on a single product field.
///
/// - `price`, `rating`, `discount`: numeric comparison
/// - `company`: lexicographic comparison of the company code
/// - `Unordered`: input order is returned unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRanking;

impl FieldRanking {
    /// Creates a new field ranking.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the ascending comparator for `sort_by`, or `None` for
    /// `Unordered`.
    fn comparator(sort_by: SortKey) -> Option<fn(&Product, &Product) -> Ordering> {
        match sort_by {
            SortKey::Price => Some(by_price),
            SortKey::Rating => Some(by_rating),
            SortKey::Discount => Some(by_discount),
            SortKey::Company => Some(by_company),
            SortKey::Unordered => None,
        }
    }
}

impl RankingStrategy for FieldRanking {
    fn rank(&self, mut candidates: Vec<Product>, key: RankingKey) -> Vec<Product> {
        let Some(compare) = Self::comparator(key.sort_by) else {
            return candidates;
        };

        // `sort_by` is stable; reversing keeps ties as `Equal`.
        if key.order.is_ascending() {
            candidates.sort_by(compare);
        } else {
            candidates.sort_by(|a, b| compare(a, b).reverse());
        }
        candidates
    }

    fn name(&self) -> &'static str {
        "FieldRanking"
    }
}

fn by_price(a: &Product, b: &Product) -> Ordering {
    a.price().total_cmp(&b.price())
}

fn by_rating(a: &Product, b: &Product) -> Ordering {
    a.rating().total_cmp(&b.rating())
}

fn by_discount(a: &Product, b: &Product) -> Ordering {
    a.discount().total_cmp(&b.discount())
}

fn by_company(a: &Product, b: &Product) -> Ordering {
    a.company().cmp(b.company())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::RawProduct;
    use crate::domain::value_objects::{CompanyId, ProductId, SortOrder};
    use proptest::prelude::*;

    fn product(id: u128, company: &str, price: f64, rating: f64, discount: f64) -> Product {
        Product::enrich(
            RawProduct::new(format!("p{}", id), price, rating, discount),
            ProductId::from_u128(id),
            CompanyId::new(company),
        )
    }

    fn ids(products: &[Product]) -> Vec<u128> {
        products.iter().map(|p| p.id().get().as_u128()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "SP", 300.0, 4.0, 10.0),
            product(2, "AMZ", 100.0, 4.5, 0.0),
            product(3, "HYN", 200.0, 3.0, 25.0),
        ]
    }

    fn rank(candidates: Vec<Product>, sort_by: SortKey, order: SortOrder) -> Vec<Product> {
        FieldRanking::new().rank(candidates, RankingKey::new(sort_by, order))
    }

    #[test]
    fn merge_concatenates_in_list_order() {
        let merged = merge_candidates(vec![
            vec![product(1, "AMZ", 1.0, 1.0, 1.0), product(2, "AMZ", 1.0, 1.0, 1.0)],
            vec![],
            vec![product(3, "SP", 1.0, 1.0, 1.0)],
        ]);
        assert_eq!(ids(&merged), vec![1, 2, 3]);
    }

    #[test]
    fn price_ascending() {
        let ranked = rank(sample(), SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn price_descending() {
        let ranked = rank(sample(), SortKey::Price, SortOrder::Desc);
        assert_eq!(ids(&ranked), vec![1, 3, 2]);
    }

    #[test]
    fn rating_and_discount() {
        assert_eq!(ids(&rank(sample(), SortKey::Rating, SortOrder::Desc)), vec![2, 1, 3]);
        assert_eq!(ids(&rank(sample(), SortKey::Discount, SortOrder::Asc)), vec![2, 1, 3]);
    }

    #[test]
    fn company_is_lexicographic() {
        assert_eq!(ids(&rank(sample(), SortKey::Company, SortOrder::Asc)), vec![2, 3, 1]);
        assert_eq!(ids(&rank(sample(), SortKey::Company, SortOrder::Desc)), vec![1, 3, 2]);
    }

    #[test]
    fn unordered_passes_through() {
        assert_eq!(ids(&rank(sample(), SortKey::Unordered, SortOrder::Asc)), vec![1, 2, 3]);
        assert_eq!(ids(&rank(sample(), SortKey::Unordered, SortOrder::Desc)), vec![1, 2, 3]);
    }

    #[test]
    fn unknown_order_value_sorts_descending() {
        let by_desc = rank(sample(), SortKey::Price, SortOrder::from_query("desc"));
        let by_typo = rank(sample(), SortKey::Price, SortOrder::from_query("xyz"));
        let by_asc = rank(sample(), SortKey::Price, SortOrder::from_query("asc"));

        assert_eq!(ids(&by_desc), vec![1, 3, 2]);
        assert_eq!(ids(&by_typo), ids(&by_desc));
        assert_eq!(ids(&by_asc), vec![2, 3, 1]);
    }

    #[test]
    fn ties_keep_merge_order_in_both_directions() {
        let candidates = vec![
            product(1, "AMZ", 50.0, 1.0, 0.0),
            product(2, "FLP", 10.0, 1.0, 0.0),
            product(3, "AMZ", 50.0, 1.0, 0.0),
            product(4, "SP", 50.0, 1.0, 0.0),
        ];

        let asc = rank(candidates.clone(), SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![2, 1, 3, 4]);

        let desc = rank(candidates.clone(), SortKey::Price, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![1, 3, 4, 2]);

        let by_company = rank(candidates, SortKey::Company, SortOrder::Asc);
        assert_eq!(ids(&by_company), vec![1, 3, 2, 4]);
    }

    #[test]
    fn nan_prices_sort_last_without_panicking() {
        let mut candidates: Vec<Product> = (0u32..40)
            .map(|i| {
                let price = if i % 3 == 0 { f64::NAN } else { f64::from(40 - i) };
                product(u128::from(i), "AMZ", price, 1.0, 0.0)
            })
            .collect();
        candidates.push(product(99, "SP", -0.0, 1.0, 0.0));

        let ranked = rank(candidates, SortKey::Price, SortOrder::Asc);

        assert_eq!(ranked.len(), 41);
        assert_eq!(ranked[0].id().get().as_u128(), 99);
        let first_nan = ranked.iter().position(|p| p.price().is_nan()).unwrap();
        assert!(ranked[first_nan..].iter().all(|p| p.price().is_nan()));
        assert!(ranked[..first_nan].windows(2).all(|w| w[0].price() <= w[1].price()));
    }

    #[test]
    fn empty_input() {
        assert!(rank(Vec::new(), SortKey::Price, SortOrder::Asc).is_empty());
    }

    #[test]
    fn strategy_name() {
        assert_eq!(FieldRanking::new().name(), "FieldRanking");
    }

    fn sort_key() -> impl Strategy<Value = SortKey> {
        prop_oneof![
            Just(SortKey::Price),
            Just(SortKey::Rating),
            Just(SortKey::Discount),
            Just(SortKey::Company),
            Just(SortKey::Unordered),
        ]
    }

    fn sort_order() -> impl Strategy<Value = SortOrder> {
        prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
    }

    proptest! {
        #[test]
        fn ranking_is_deterministic_and_stable(
            rows in proptest::collection::vec((0u8..4, 0u8..5, 0u8..5, 0u8..5), 0..60),
            sort_by in sort_key(),
            order in sort_order(),
        ) {
            let companies = ["AMZ", "FLP", "SP", "HYN"];
            let candidates: Vec<Product> = rows
                .iter()
                .enumerate()
                .map(|(i, (c, p, r, d))| {
                    product(i as u128, companies[usize::from(*c)], f64::from(*p), f64::from(*r), f64::from(*d))
                })
                .collect();

            let first = rank(candidates.clone(), sort_by, order);
            let second = rank(candidates.clone(), sort_by, order);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), candidates.len());

            // Among equal keys, merge order (= id order here) is preserved.
            let compare = FieldRanking::comparator(sort_by);
            for pair in first.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let ordering = match compare {
                    Some(cmp) => cmp(a, b),
                    None => Ordering::Equal,
                };
                if ordering == Ordering::Equal {
                    prop_assert!(a.id() < b.id());
                } else if order.is_ascending() {
                    prop_assert_eq!(ordering, Ordering::Less);
                } else {
                    prop_assert_eq!(ordering, Ordering::Greater);
                }
            }
        }
    }
}
