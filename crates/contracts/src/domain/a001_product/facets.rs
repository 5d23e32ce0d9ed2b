use std::collections::HashMap;

use super::aggregate::Product;

// ============================================================================
// Facet structures
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub name: String,
    pub count: usize,
}

/// One entry of the category tree: per-category product count with the
/// subcategory ("type") counts nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub name: String,
    pub count: usize,
    pub types: Vec<FacetCount>,
}

impl CategoryNode {
    pub fn has_types(&self) -> bool {
        !self.types.is_empty()
    }
}

// Приближение localeCompare(..., 'ru'): сравнение в нижнем регистре
fn locale_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Product count per producer, name-ordered. Products without a producer do
/// not contribute a facet entry.
pub fn manufacturer_facets(products: &[Product]) -> Vec<FacetCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for p in products {
        if let Some(producer) = p.producer.as_deref() {
            if !producer.is_empty() {
                *counts.entry(producer).or_insert(0) += 1;
            }
        }
    }
    let mut facets: Vec<FacetCount> = counts
        .into_iter()
        .map(|(name, count)| FacetCount {
            name: name.to_string(),
            count,
        })
        .collect();
    facets.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    facets
}

/// Category tree for the sidebar. The manufacturer selection sits above the
/// category hierarchy, so its filter is applied before counting. Categories
/// that carry subcategories come first, then the rest, name-ordered within
/// each group.
pub fn category_tree(products: &[Product], selected_manufacturers: &[String]) -> Vec<CategoryNode> {
    let mut map: HashMap<&str, (usize, HashMap<&str, usize>)> = HashMap::new();
    for p in products {
        if !selected_manufacturers.is_empty() {
            match p.producer.as_deref() {
                Some(producer) if selected_manufacturers.iter().any(|m| m == producer) => {}
                _ => continue,
            }
        }
        let node = map.entry(p.category_label()).or_default();
        node.0 += 1;
        if let Some(sub) = p.subcategory.as_deref() {
            *node.1.entry(sub).or_insert(0) += 1;
        }
    }

    let mut tree: Vec<CategoryNode> = map
        .into_iter()
        .map(|(name, (count, types))| {
            let mut types: Vec<FacetCount> = types
                .into_iter()
                .map(|(name, count)| FacetCount {
                    name: name.to_string(),
                    count,
                })
                .collect();
            types.sort_by(|a, b| locale_cmp(&a.name, &b.name));
            CategoryNode {
                name: name.to_string(),
                count,
                types,
            }
        })
        .collect();
    tree.sort_by(|a, b| {
        b.has_types()
            .cmp(&a.has_types())
            .then_with(|| locale_cmp(&a.name, &b.name))
    });
    tree
}

#[cfg(test)]
mod tests {
    use super::super::aggregate::fixtures::product;
    use super::super::aggregate::NO_CATEGORY_LABEL;
    use super::*;

    fn sample() -> Vec<Product> {
        let spec: [(&str, Option<&str>, Option<&str>, Option<&str>); 6] = [
            ("1", Some("Свет"), Some("Настольные"), Some("Эра")),
            ("2", Some("Свет"), Some("Подвесные"), Some("Artline")),
            ("3", Some("Свет"), None, Some("Эра")),
            ("4", Some("Посуда"), None, None),
            ("5", None, None, Some("Artline")),
            ("6", Some("Посуда"), None, Some("Эра")),
        ];
        spec.into_iter()
            .map(|(id, cat, sub, producer)| {
                let mut p = product(id);
                p.category = cat.map(str::to_string);
                p.subcategory = sub.map(str::to_string);
                p.producer = producer.map(str::to_string);
                p
            })
            .collect()
    }

    #[test]
    fn manufacturer_facets_count_and_sort() {
        let facets = manufacturer_facets(&sample());
        assert_eq!(
            facets,
            vec![
                FacetCount {
                    name: "Artline".to_string(),
                    count: 2
                },
                FacetCount {
                    name: "Эра".to_string(),
                    count: 3
                },
            ]
        );
    }

    #[test]
    fn category_tree_nests_types_and_orders_typed_first() {
        let tree = category_tree(&sample(), &[]);
        let names: Vec<&str> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Свет", NO_CATEGORY_LABEL, "Посуда"]);

        let svet = &tree[0];
        assert_eq!(svet.count, 3);
        assert!(svet.has_types());
        let types: Vec<(&str, usize)> = svet
            .types
            .iter()
            .map(|t| (t.name.as_str(), t.count))
            .collect();
        assert_eq!(types, [("Настольные", 1), ("Подвесные", 1)]);
    }

    #[test]
    fn category_tree_respects_manufacturer_selection() {
        let tree = category_tree(&sample(), &["Эра".to_string()]);
        let names: Vec<(&str, usize)> = tree.iter().map(|n| (n.name.as_str(), n.count)).collect();
        assert_eq!(names, [("Свет", 2), ("Посуда", 1)]);
    }
}
