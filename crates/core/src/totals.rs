//! Order totals: per-line amounts, subtotal, and flat-rate shipping.
//!
//! Cart entries whose product id is missing from the catalog are silently
//! skipped: they contribute nothing to the totals and are NOT removed from
//! the cart. The catalog may be stale relative to the cart, and the cart is
//! not repaired on its behalf.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::types::{Cart, Money, ProductId};

/// Flat shipping charge applied to every order.
pub const FLAT_SHIPPING: Money = Money::from_cents(1_000);

/// One priced cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalLine {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Priced order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub lines: Vec<TotalLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub grand_total: Money,
}

/// Price a cart against a catalog.
///
/// Shipping is charged unconditionally, matching the storefront checkout
/// page (an empty cart still shows subtotal + shipping).
#[must_use]
pub fn compute_totals(cart: &Cart, catalog: &impl Catalog) -> Totals {
    let mut lines = Vec::with_capacity(cart.len());
    let mut subtotal = Money::ZERO;

    for item in cart.items() {
        let Some(product) = catalog.get(item.product_id) else {
            continue;
        };
        let line_total = product.price.times(item.quantity);
        subtotal = subtotal.saturating_add(line_total);
        lines.push(TotalLine {
            product_id: item.product_id,
            unit_price: product.price,
            quantity: item.quantity,
            line_total,
        });
    }

    Totals {
        lines,
        subtotal,
        shipping: FLAT_SHIPPING,
        grand_total: subtotal.saturating_add(FLAT_SHIPPING),
    }
}
