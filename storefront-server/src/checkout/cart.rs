//! Cart aggregation
//!
//! Client carts arrive as product/variant/option selections plus
//! quantities. Lines are merged on identical selections, then re-priced
//! from the catalog; client-sent prices are never trusted.

use serde::Deserialize;
use shared::models::{OrderItemLine, Product};
use shared::{AppError, AppResult, ErrorCode};

use super::money;

/// One cart line as submitted by the storefront client
#[derive(Debug, Clone, Deserialize)]
pub struct CartLineInput {
    pub product_id: i64,
    #[serde(default)]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub option_ids: Vec<String>,
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CartLineInput {
    /// Merge key: same product with the same selections is the same line
    fn merge_key(&self) -> (i64, Option<String>, Vec<String>) {
        let mut options = self.option_ids.clone();
        options.sort();
        (self.product_id, self.variant_id.clone(), options)
    }
}

/// Merge duplicate selections into single lines and drop non-positive
/// quantities. No zero-quantity lines survive.
pub fn merge_lines(lines: Vec<CartLineInput>) -> Vec<CartLineInput> {
    let mut merged: Vec<CartLineInput> = Vec::new();
    for line in lines {
        if line.quantity <= 0 {
            continue;
        }
        match merged.iter_mut().find(|m| m.merge_key() == line.merge_key()) {
            Some(existing) => existing.quantity += line.quantity,
            None => merged.push(line),
        }
    }
    merged
}

/// Price one merged line against its catalog product, snapshotting names
/// and prices by value.
pub fn price_line(product: &Product, line: &CartLineInput) -> AppResult<OrderItemLine> {
    if !product.is_active {
        return Err(AppError::precondition(ErrorCode::ProductInactive)
            .with_detail("product_id", product.id));
    }

    let base = product.variant_price(line.variant_id.as_deref()).ok_or_else(|| {
        AppError::precondition(ErrorCode::VariantNotFound)
            .with_detail("product_id", product.id)
            .with_detail("variant_id", line.variant_id.clone().unwrap_or_default())
    })?;
    let variant_name = line
        .variant_id
        .as_deref()
        .and_then(|id| product.variants.iter().find(|v| v.id == id))
        .map(|v| v.name.clone());

    let mut option_names = Vec::with_capacity(line.option_ids.len());
    let mut modifiers = 0.0;
    for option_id in &line.option_ids {
        let option = product.find_option(option_id).ok_or_else(|| {
            AppError::precondition(ErrorCode::OptionNotFound)
                .with_detail("product_id", product.id)
                .with_detail("option_id", option_id.clone())
        })?;
        option_names.push(option.name.clone());
        modifiers += option.price_modifier;
    }

    let unit_price = money::round2(base + modifiers);
    let line_total = money::line_total(unit_price, line.quantity)?;

    Ok(OrderItemLine {
        product_id: product.id,
        product_name: product.name.clone(),
        variant_id: line.variant_id.clone(),
        variant_name,
        option_names,
        unit_price,
        quantity: line.quantity,
        line_total,
        notes: line.notes.clone(),
    })
}

/// Order subtotal over priced lines
pub fn subtotal(lines: &[OrderItemLine]) -> f64 {
    money::sum(lines.iter().map(|l| l.line_total))
}
