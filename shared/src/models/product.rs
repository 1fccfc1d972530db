//! Product Model

use serde::{Deserialize, Serialize};

/// Product variant (size/presentation; replaces the base price)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    /// Unit price when this variant is selected, currency units
    pub price: f64,
}

/// A selectable option inside a group (adds a modifier to the unit price)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionItem {
    pub id: String,
    pub name: String,
    pub price_modifier: f64,
}

/// Option group (e.g. "Extras", "Salsa")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionGroup {
    pub id: String,
    pub name: String,
    /// Maximum selections allowed from this group; None = unlimited
    pub max_select: Option<i32>,
    pub options: Vec<OptionItem>,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub store_id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Unit price when no variant is selected, currency units
    pub base_price: f64,
    pub sort_order: i64,
    pub is_active: bool,
    #[sqlx(json)]
    pub variants: Vec<ProductVariant>,
    #[sqlx(json)]
    pub option_groups: Vec<OptionGroup>,
}

impl Product {
    /// Resolve the unit price for a variant id (None = base price)
    pub fn variant_price(&self, variant_id: Option<&str>) -> Option<f64> {
        match variant_id {
            None => Some(self.base_price),
            Some(id) => self.variants.iter().find(|v| v.id == id).map(|v| v.price),
        }
    }

    /// Find an option across all groups by id
    pub fn find_option(&self, option_id: &str) -> Option<&OptionItem> {
        self.option_groups
            .iter()
            .flat_map(|g| g.options.iter())
            .find(|o| o.id == option_id)
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub base_price: f64,
    pub sort_order: Option<i64>,
    pub variants: Option<Vec<ProductVariant>>,
    pub option_groups: Option<Vec<OptionGroup>>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub base_price: Option<f64>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
    pub variants: Option<Vec<ProductVariant>>,
    pub option_groups: Option<Vec<OptionGroup>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_variants() -> Product {
        Product {
            id: 1,
            store_id: 1,
            category_id: 1,
            name: "Pizza".into(),
            description: None,
            image_url: None,
            base_price: 100.0,
            sort_order: 0,
            is_active: true,
            variants: vec![
                ProductVariant {
                    id: "v-small".into(),
                    name: "Chica".into(),
                    price: 80.0,
                },
                ProductVariant {
                    id: "v-large".into(),
                    name: "Grande".into(),
                    price: 140.0,
                },
            ],
            option_groups: vec![OptionGroup {
                id: "g-extras".into(),
                name: "Extras".into(),
                max_select: None,
                options: vec![OptionItem {
                    id: "o-cheese".into(),
                    name: "Queso extra".into(),
                    price_modifier: 15.0,
                }],
            }],
        }
    }

    #[test]
    fn variant_price_falls_back_to_base() {
        let p = product_with_variants();
        assert_eq!(p.variant_price(None), Some(100.0));
        assert_eq!(p.variant_price(Some("v-large")), Some(140.0));
        assert_eq!(p.variant_price(Some("missing")), None);
    }

    #[test]
    fn find_option_searches_all_groups() {
        let p = product_with_variants();
        assert_eq!(p.find_option("o-cheese").unwrap().price_modifier, 15.0);
        assert!(p.find_option("o-missing").is_none());
    }
}
