pub mod a025_price_tier;
