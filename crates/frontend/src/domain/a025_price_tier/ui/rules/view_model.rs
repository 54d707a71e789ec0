//! ViewModel for the price-tier rules editor
//!
//! Holds the loaded tiers and rules, the add-form draft and the busy flags as
//! individual signals. Each command has an awaitable form (used by tests and
//! by the add command's follow-up reload) and a fire-and-forget `*_command`
//! form for event handlers.

use super::model::PriceRulesApi;
use super::state::{self, RequestTracker, RuleDraft};
use crate::shared::notifications::Notification;
use contracts::domain::a025_price_tier::{
    PriceTier, PriceTierId, ProductId, ProductTierPrice, ProductTierPriceId, RuleKind,
};
use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

const LOAD_FAILED: &str = "Failed to load price rules";
const ADD_FAILED: &str = "Failed to add rule";
const DELETE_FAILED: &str = "Failed to delete rule";
const RULE_ADDED: &str = "Price rule added";
const RULE_DELETED: &str = "Price rule deleted";

#[derive(Clone)]
pub struct PriceTierRulesVm {
    pub product_id: RwSignal<Option<ProductId>>,

    // === Loaded data ===
    /// Active tiers only
    pub tiers: RwSignal<Vec<PriceTier>>,
    /// `None` until the first load for the current product settles
    pub rules: RwSignal<Option<Vec<ProductTierPrice>>>,

    // === Draft rule ===
    pub draft_tier: RwSignal<Option<PriceTierId>>,
    pub draft_kind: RwSignal<RuleKind>,
    pub draft_value: RwSignal<String>,

    // === UI state ===
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    /// Rules with a delete request in flight
    pub deleting: RwSignal<HashSet<ProductTierPriceId>>,

    api: Arc<dyn PriceRulesApi>,
    notify: Callback<Notification>,
    tracker: RequestTracker,
}

impl PriceTierRulesVm {
    pub fn new(api: Arc<dyn PriceRulesApi>, notify: Callback<Notification>) -> Self {
        Self {
            product_id: RwSignal::new(None),
            tiers: RwSignal::new(Vec::new()),
            rules: RwSignal::new(None),
            draft_tier: RwSignal::new(None),
            draft_kind: RwSignal::new(RuleKind::default()),
            draft_value: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            deleting: RwSignal::new(HashSet::new()),
            api,
            notify,
            tracker: RequestTracker::default(),
        }
    }

    // === Derived signals ===

    /// Tiers the add form may offer: active and without a rule
    pub fn available_tiers(&self) -> Signal<Vec<PriceTier>> {
        let tiers = self.tiers;
        let rules = self.rules;
        Signal::derive(move || {
            tiers.with(|tiers| {
                rules.with(|rules| state::available_tiers(tiers, rules.as_deref().unwrap_or(&[])))
            })
        })
    }

    /// True once rules for the current product are known (possibly empty)
    pub fn rules_known(&self) -> Signal<bool> {
        let rules = self.rules;
        Signal::derive(move || rules.with(Option::is_some))
    }

    pub fn is_add_disabled(&self) -> Signal<bool> {
        let submitting = self.submitting;
        Signal::derive(move || submitting.get())
    }

    pub fn is_delete_disabled(&self, rule_id: ProductTierPriceId) -> Signal<bool> {
        let deleting = self.deleting;
        Signal::derive(move || deleting.with(|d| d.contains(&rule_id)))
    }

    // === Draft ===

    pub fn draft(&self) -> RuleDraft {
        RuleDraft {
            tier: self.draft_tier.get_untracked(),
            kind: self.draft_kind.get_untracked(),
            value: self.draft_value.get_untracked(),
        }
    }

    pub fn reset_draft(&self) {
        self.draft_tier.set(None);
        self.draft_kind.set(RuleKind::default());
        self.draft_value.set(String::new());
    }

    // === Lifetime ===

    /// Handle for `on_cleanup`; closing it drops every pending result
    pub fn teardown_handle(&self) -> RequestTracker {
        self.tracker.clone()
    }

    fn publish(&self, notification: Notification) {
        if !self.tracker.is_closed() {
            self.notify.run(notification);
        }
    }

    // === Data loading ===

    /// Fetch tiers and the product's rules concurrently and replace both.
    ///
    /// A response is applied only if no newer load started meanwhile.
    pub async fn load(&self, product_id: ProductId) {
        if self.tracker.is_closed() {
            return;
        }
        let ticket = self.tracker.begin();

        if self.product_id.get_untracked() != Some(product_id) {
            self.product_id.set(Some(product_id));
            self.rules.set(None);
            self.reset_draft();
        }
        self.loading.set(true);
        log::debug!("price rules: loading product {} (ticket {})", product_id, ticket);

        let (tiers, rules) =
            tokio::join!(self.api.list_tiers(), self.api.list_rules(product_id));

        if !self.tracker.is_current(ticket) {
            log::debug!("price rules: dropping stale response (ticket {})", ticket);
            return;
        }
        self.loading.set(false);

        match (tiers, rules) {
            (Ok(tiers), Ok(rules)) => {
                log::debug!(
                    "price rules: product {} has {} rules, {} tiers",
                    product_id,
                    rules.len(),
                    tiers.len()
                );
                self.tiers.set(state::active_tiers(tiers));
                self.rules.set(Some(rules));
            }
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("price rules: load for product {} failed: {}", product_id, e);
                self.rules.set(Some(Vec::new()));
                self.publish(Notification::error(LOAD_FAILED));
            }
        }
    }

    /// Load for the selected product; nothing is requested without one
    pub async fn load_selected(&self, product_id: Option<ProductId>) {
        if let Some(product_id) = product_id {
            self.load(product_id).await;
        }
    }

    pub fn load_selected_command(&self, product_id: Option<ProductId>) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            this.load_selected(product_id).await;
        });
    }

    // === Commands ===

    /// Submit the draft; on success reset it and reload from the server
    pub async fn add_rule(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(product_id) = self.product_id.get_untracked() else {
            return;
        };

        let mut draft = self.draft();
        // A selection that is no longer offered counts as no selection
        if let Some(tier) = draft.tier {
            let offered = self.tiers.with_untracked(|tiers| {
                self.rules.with_untracked(|rules| {
                    state::available_tiers(tiers, rules.as_deref().unwrap_or(&[]))
                        .iter()
                        .any(|t| t.id == tier)
                })
            });
            if !offered {
                draft.tier = None;
            }
        }

        let payload = match draft.to_request(product_id) {
            Ok(payload) => payload,
            Err(e) => {
                self.publish(Notification::error(e.to_string()));
                return;
            }
        };

        self.submitting.set(true);
        let result = self.api.create_rule(&payload).await;
        if self.tracker.is_closed() {
            return;
        }
        self.submitting.set(false);

        match result {
            Ok(rule) => {
                log::debug!("price rules: created rule {} for tier {}", rule.id, rule.tier);
                self.publish(Notification::success(RULE_ADDED));
                // Switching product already reset the draft and reloaded
                if self.product_id.get_untracked() == Some(product_id) {
                    self.reset_draft();
                    self.load(product_id).await;
                }
            }
            Err(e) => {
                log::warn!("price rules: create failed: {:?}", e);
                self.publish(Notification::error(e.user_message(ADD_FAILED)));
            }
        }
    }

    pub fn add_command(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            this.add_rule().await;
        });
    }

    /// Delete a rule; on success drop it from the list without reloading
    pub async fn delete_rule(&self, rule_id: ProductTierPriceId) {
        if self.tracker.is_closed() {
            return;
        }
        let mut started = false;
        self.deleting.update(|d| started = d.insert(rule_id));
        if !started {
            return;
        }

        let result = self.api.delete_rule(rule_id).await;
        if self.tracker.is_closed() {
            return;
        }
        self.deleting.update(|d| {
            d.remove(&rule_id);
        });

        match result {
            Ok(()) => {
                self.publish(Notification::success(RULE_DELETED));
                self.rules.update(|rules| {
                    if let Some(rules) = rules {
                        rules.retain(|r| r.id != rule_id);
                    }
                });
            }
            Err(e) => {
                log::warn!("price rules: delete of rule {} failed: {}", rule_id, e);
                self.publish(Notification::error(DELETE_FAILED));
            }
        }
    }

    pub fn delete_command(&self, rule_id: ProductTierPriceId) {
        let this = self.clone();
        leptos::task::spawn_local(async move {
            this.delete_rule(rule_id).await;
        });
    }
}
