pub mod aggregate;

pub use aggregate::{
    CreateProductTierPrice, PriceTier, PriceTierId, ProductId, ProductTierPrice,
    ProductTierPriceId, RuleKind,
};
