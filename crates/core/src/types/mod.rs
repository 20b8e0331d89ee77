//! Core types for Parts Cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod favorites;
pub mod id;
pub mod money;
pub mod product;

pub use cart::{Cart, LineItem};
pub use favorites::FavoritesSet;
pub use id::*;
pub use money::{Money, MoneyError};
pub use product::{Category, Product};
