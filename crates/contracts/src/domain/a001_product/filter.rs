use serde::{Deserialize, Serialize};

use super::aggregate::Product;

/// Search results longer than this get the seeded reshuffle applied.
pub const SHUFFLE_MIN_RESULTS: usize = 10;

// ============================================================================
// Selection state
// ============================================================================
/// Active filter selections of the catalog page. `subcategories` and `types`
/// both match against `Product::subcategory`: the sidebar historically fed
/// the same values through two channels and both are honoured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub types: Vec<String>,
    pub manufacturers: Vec<String>,
    pub query: String,
}

impl FilterSelection {
    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty()
            || !self.subcategories.is_empty()
            || !self.types.is_empty()
            || !self.manufacturers.is_empty()
    }

    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }

    /// All predicates are AND-combined; an empty set means "no restriction".
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty()
            && !self.categories.iter().any(|c| c == product.category_label())
        {
            return false;
        }
        if !self.subcategories.is_empty() {
            match product.subcategory.as_deref() {
                Some(sub) if self.subcategories.iter().any(|s| s == sub) => {}
                _ => return false,
            }
        }
        if !self.types.is_empty() {
            match product.subcategory.as_deref() {
                Some(sub) if self.types.iter().any(|t| t == sub) => {}
                _ => return false,
            }
        }
        if !self.manufacturers.is_empty() {
            match product.producer.as_deref() {
                Some(producer) if self.manufacturers.iter().any(|m| m == producer) => {}
                _ => return false,
            }
        }
        if !self.query.is_empty() && !product.matches_query(&self.query.to_lowercase()) {
            return false;
        }
        true
    }
}

// ============================================================================
// Filtering + deterministic reshuffle
// ============================================================================
/// Apply the selection to an ordered catalog. When a free-text query is
/// active and more than [`SHUFFLE_MIN_RESULTS`] products match, the result is
/// reshuffled deterministically with the query as seed, so the same search
/// always shows the same (varied) order.
pub fn apply_filters(products: &[Product], selection: &FilterSelection) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| selection.matches(p))
        .cloned()
        .collect();
    if !selection.query.is_empty() && result.len() > SHUFFLE_MIN_RESULTS {
        seeded_shuffle(&mut result, &selection.query);
    }
    result
}

/// Fisher–Yates permutation driven by a 32-bit fold of the seed string.
///
/// The hash folds UTF-16 code units with `hash = (hash << 5) - hash + unit`
/// in wrapping i32 arithmetic and keeps folding the loop index between swaps;
/// this reproduces the historical ordering bit-for-bit, so cached or shared
/// search links keep showing the same sequence.
pub fn seeded_shuffle<T>(items: &mut [T], seed: &str) {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    for i in (1..items.len()).rev() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i as i32);
        let j = (hash.unsigned_abs() as usize) % (i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::product;
    use super::*;

    fn sample() -> Vec<Product> {
        let mut list = Vec::new();
        for i in 0..20 {
            let mut p = product(&i.to_string());
            p.name = format!("Лампа настольная {i}");
            p.category = if i % 2 == 0 {
                Some("Свет".to_string())
            } else {
                None
            };
            p.subcategory = (i % 4 == 0).then(|| "Настольные".to_string());
            p.producer = (i % 3 == 0).then(|| "Эра".to_string());
            list.push(p);
        }
        list
    }

    #[test]
    fn empty_selection_matches_everything() {
        let products = sample();
        let selection = FilterSelection::default();
        assert_eq!(apply_filters(&products, &selection), products);
    }

    #[test]
    fn category_filter_uses_sentinel_label() {
        let products = sample();
        let selection = FilterSelection {
            categories: vec!["Без категории".to_string()],
            ..FilterSelection::default()
        };
        let result = apply_filters(&products, &selection);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.category.is_none()));
    }

    #[test]
    fn absent_subcategory_never_matches_active_type_filter() {
        let products = sample();
        let selection = FilterSelection {
            types: vec!["Настольные".to_string()],
            ..FilterSelection::default()
        };
        let result = apply_filters(&products, &selection);
        assert!(result
            .iter()
            .all(|p| p.subcategory.as_deref() == Some("Настольные")));
    }

    #[test]
    fn predicates_are_and_combined_and_result_is_subset() {
        let products = sample();
        let selection = FilterSelection {
            categories: vec!["Свет".to_string()],
            manufacturers: vec!["Эра".to_string()],
            ..FilterSelection::default()
        };
        let result = apply_filters(&products, &selection);
        assert!(!result.is_empty());
        for p in &result {
            assert!(selection.matches(p));
            assert!(products.contains(p));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let products = sample();
        let selection = FilterSelection {
            categories: vec!["Свет".to_string()],
            query: "лампа".to_string(),
            ..FilterSelection::default()
        };
        let once = apply_filters(&products, &selection);
        let twice = apply_filters(&once, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn search_shuffle_is_reproducible() {
        let products = sample();
        let selection = FilterSelection {
            query: "лампа".to_string(),
            ..FilterSelection::default()
        };
        let first = apply_filters(&products, &selection);
        let second = apply_filters(&products, &selection);
        assert!(first.len() > SHUFFLE_MIN_RESULTS);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_give_different_permutations_of_same_set() {
        let products = sample();
        let a = apply_filters(
            &products,
            &FilterSelection {
                query: "лампа".to_string(),
                ..FilterSelection::default()
            },
        );
        let b = apply_filters(
            &products,
            &FilterSelection {
                query: "настольная".to_string(),
                ..FilterSelection::default()
            },
        );
        let mut a_ids: Vec<&str> = a.iter().map(|p| p.id.as_str()).collect();
        let mut b_ids: Vec<&str> = b.iter().map(|p| p.id.as_str()).collect();
        assert_ne!(a_ids, b_ids);
        a_ids.sort();
        b_ids.sort();
        assert_eq!(a_ids, b_ids);
    }

    #[test]
    fn short_results_keep_catalog_order() {
        let mut products = sample();
        products.truncate(8);
        let selection = FilterSelection {
            query: "лампа".to_string(),
            ..FilterSelection::default()
        };
        assert_eq!(apply_filters(&products, &selection), products);
    }

    #[test]
    fn shuffle_matches_reference_permutation() {
        // Reference permutation produced by the historical implementation
        // for the seed "лампа" over 12 items.
        let mut items: Vec<usize> = (0..12).collect();
        seeded_shuffle(&mut items, "лампа");
        assert_eq!(items, [1, 10, 6, 3, 4, 0, 9, 8, 7, 2, 5, 11]);
    }

    #[test]
    fn clear_resets_selections_and_query() {
        let mut selection = FilterSelection {
            categories: vec!["Свет".to_string()],
            types: vec!["Настольные".to_string()],
            manufacturers: vec!["Эра".to_string()],
            query: "лампа".to_string(),
            ..FilterSelection::default()
        };
        selection.clear();
        assert!(!selection.has_active_filters());
        assert!(selection.query.is_empty());
    }
}
