use crate::shared::serde_num::f64_lenient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PriceTierId = i64;
pub type ProductId = i64;
pub type ProductTierPriceId = i64;

/// Pricing segment ("Wholesale", "VIP") with its default percentage adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub id: PriceTierId,
    pub name: String,
    #[serde(deserialize_with = "f64_lenient")]
    pub default_percentage: f64,
    pub is_active: bool,
}

/// How a product rule overrides the tier default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    #[default]
    Percentage,
    Fixed,
}

impl RuleKind {
    pub const ALL: [RuleKind; 2] = [RuleKind::Percentage, RuleKind::Fixed];

    /// Wire name, same as the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Percentage => "percentage",
            RuleKind::Fixed => "fixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Percentage => "Percentage (%)",
            RuleKind::Fixed => "Fixed amount",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(RuleKind::Percentage),
            "fixed" => Ok(RuleKind::Fixed),
            other => Err(format!("Unknown rule kind: {}", other)),
        }
    }
}

/// Per-product override of a tier's default percentage
///
/// At most one rule exists per (product, tier); the server enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTierPrice {
    pub id: ProductTierPriceId,
    pub product: ProductId,
    pub tier: PriceTierId,
    /// Denormalized tier name for display
    #[serde(default)]
    pub tier_name: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    #[serde(deserialize_with = "f64_lenient")]
    pub value: f64,
}

impl ProductTierPrice {
    /// Negative values lower the price (discount)
    pub fn is_discount(&self) -> bool {
        self.value < 0.0
    }
}

/// Create payload for `POST /product-tier-prices/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductTierPrice {
    pub product: ProductId,
    pub tier: PriceTierId,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub value: f64,
}
