//! Parts Cart Core - Shared types and cart logic.
//!
//! This crate provides the domain model used across all Parts Cart
//! components:
//!
//! - `store` - Persistent cart store (key-value backed)
//! - `cli` - Command-line front end standing in for the storefront view
//!
//! # Architecture
//!
//! The core crate contains only types, traits, and pure logic - no I/O, no
//! persistence, no clocks. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money, products, cart, and favorites
//! - [`catalog`] - The read-only product catalog trait
//! - [`totals`] - Order totals computation with flat shipping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod totals;
pub mod types;

pub use catalog::Catalog;
pub use totals::{FLAT_SHIPPING, TotalLine, Totals, compute_totals};
pub use types::*;
