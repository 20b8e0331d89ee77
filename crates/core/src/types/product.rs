//! Product metadata as served by the catalog.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::Money;

/// Storefront section a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Processors,
    Graphics,
    Motherboards,
    Memory,
    Storage,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Processors,
        Self::Graphics,
        Self::Motherboards,
        Self::Memory,
        Self::Storage,
    ];

    /// Human-readable section title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Processors => "Processors",
            Self::Graphics => "Graphics Cards",
            Self::Motherboards => "Motherboards",
            Self::Memory => "Memory",
            Self::Storage => "Storage",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processors => write!(f, "processors"),
            Self::Graphics => write!(f, "graphics"),
            Self::Motherboards => write!(f, "motherboards"),
            Self::Memory => write!(f, "memory"),
            Self::Storage => write!(f, "storage"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processors" => Ok(Self::Processors),
            "graphics" => Ok(Self::Graphics),
            "motherboards" => Ok(Self::Motherboards),
            "memory" => Ok(Self::Memory),
            "storage" => Ok(Self::Storage),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    /// Reference to the product image (relative path or URL).
    pub image: String,
    pub category: Category,
}
