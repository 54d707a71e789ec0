use crate::shared::components::table::{format_money, format_signed_percent};
use contracts::domain::a025_price_tier::{
    CreateProductTierPrice, PriceTier, PriceTierId, ProductId, ProductTierPrice, RuleKind,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Keep only tiers that can receive rules
pub fn active_tiers(tiers: Vec<PriceTier>) -> Vec<PriceTier> {
    tiers.into_iter().filter(|t| t.is_active).collect()
}

/// Active tiers that do not have a rule yet, in server order
pub fn available_tiers(tiers: &[PriceTier], rules: &[ProductTierPrice]) -> Vec<PriceTier> {
    let taken: HashSet<PriceTierId> = rules.iter().map(|r| r.tier).collect();
    tiers
        .iter()
        .filter(|t| t.is_active && !taken.contains(&t.id))
        .cloned()
        .collect()
}

/// Selector value to tier id; the placeholder option is the empty string
pub fn parse_tier_choice(value: &str) -> Option<PriceTierId> {
    value.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please fill all fields")]
    Incomplete,

    #[error("Value must be a number")]
    NotANumber,
}

/// Add-form input as typed by the operator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleDraft {
    pub tier: Option<PriceTierId>,
    pub kind: RuleKind,
    pub value: String,
}

impl RuleDraft {
    /// Validate and build the create payload. No range checks: negative
    /// values are discounts.
    pub fn to_request(&self, product: ProductId) -> Result<CreateProductTierPrice, DraftError> {
        let raw = self.value.trim();
        let tier = match self.tier {
            Some(tier) if !raw.is_empty() => tier,
            _ => return Err(DraftError::Incomplete),
        };

        let value = raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(DraftError::NotANumber)?;

        Ok(CreateProductTierPrice {
            product,
            tier,
            kind: self.kind,
            value,
        })
    }
}

/// Display text for a rule's value column
pub fn format_rule_value(rule: &ProductTierPrice) -> String {
    match rule.kind {
        RuleKind::Percentage => format_signed_percent(rule.value),
        RuleKind::Fixed => format_money(rule.value),
    }
}

/// Orders loads and ties request results to the component's lifetime.
///
/// Every load takes a ticket; only the newest ticket may write state.
/// After `close()` nothing may write.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
    closed: Arc<AtomicBool>,
}

impl RequestTracker {
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        !self.is_closed() && self.latest.load(Ordering::SeqCst) == ticket
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
