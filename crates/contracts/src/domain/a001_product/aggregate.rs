use serde::{Deserialize, Serialize};

// Товары без категории группируются под этой меткой
pub const NO_CATEGORY_LABEL: &str = "Без категории";

/// Sort key assigned to products without an explicit `order`, so they land
/// after everything that was ordered by hand.
pub const ORDER_LAST: i64 = 999_999;

// ============================================================================
// Aggregate Root
// ============================================================================
/// A catalog record as delivered by the remote store. Everything except
/// `id` and `name` is optional on the wire; absent and `null` are treated
/// the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub img: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub subcategory: Option<String>,

    #[serde(default)]
    pub producer: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(rename = "inBox", default)]
    pub in_box: Option<String>,

    #[serde(default)]
    pub archived: Option<bool>,

    #[serde(default)]
    pub order: Option<i64>,
}

impl Product {
    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }

    /// Category name with the "no category" sentinel applied.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(NO_CATEGORY_LABEL)
    }

    pub fn sort_order(&self) -> i64 {
        self.order.unwrap_or(ORDER_LAST)
    }

    /// Case-insensitive substring match against name, category, description
    /// and producer. `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        let contains = |field: Option<&str>| {
            field
                .map(|f| f.to_lowercase().contains(query))
                .unwrap_or(false)
        };
        self.name.to_lowercase().contains(query)
            || contains(self.category.as_deref())
            || contains(self.description.as_deref())
            || contains(self.producer.as_deref())
    }
}

/// Turn the raw page-concatenated gateway output into the working catalog:
/// archived records are dropped and the rest is sorted ascending by `order`
/// (missing order sorts last, ties keep their relative order).
pub fn prepare_catalog(mut products: Vec<Product>) -> Vec<Product> {
    products.retain(|p| !p.is_archived());
    products.sort_by_key(Product::sort_order);
    products
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Product;

    pub fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Товар {id}"),
            price: None,
            img: None,
            category: None,
            subcategory: None,
            producer: None,
            description: None,
            slug: None,
            in_box: None,
            archived: None,
            order: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn catalog_is_sorted_by_order_with_missing_last() {
        let mut a = product("1");
        a.order = Some(2);
        a.category = Some("A".to_string());
        let mut b = product("2");
        b.order = Some(1);
        b.category = Some("B".to_string());
        let mut c = product("3");
        c.category = Some("A".to_string());

        let catalog = prepare_catalog(vec![a, b, c]);
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }

    #[test]
    fn archived_products_are_excluded() {
        let mut a = product("1");
        a.archived = Some(true);
        let b = product("2");

        let catalog = prepare_catalog(vec![a, b]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "2");
    }

    #[test]
    fn deserializes_nulls_and_missing_fields() {
        let p: Product = serde_json::from_str(
            r#"{"id":"42","name":"Лампа","price":null,"inBox":"12 шт.","order":null}"#,
        )
        .unwrap();
        assert_eq!(p.price, None);
        assert_eq!(p.in_box.as_deref(), Some("12 шт."));
        assert_eq!(p.order, None);
        assert!(!p.is_archived());
        assert_eq!(p.category_label(), NO_CATEGORY_LABEL);
        assert_eq!(p.sort_order(), ORDER_LAST);
    }

    #[test]
    fn query_match_is_case_insensitive_across_fields() {
        let mut p = product("1");
        p.name = "Настольная лампа".to_string();
        p.producer = Some("Philips".to_string());
        assert!(p.matches_query("лампа"));
        assert!(p.matches_query("philips"));
        assert!(!p.matches_query("стул"));
    }
}
