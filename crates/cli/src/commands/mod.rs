//! Command implementations.
//!
//! Each module owns one subcommand family. These are the view layer: they
//! call into the cart store and print, and nothing here touches persistence
//! directly.

pub mod cart;
pub mod checkout;
pub mod favorites;
pub mod products;
pub mod snapshot;
