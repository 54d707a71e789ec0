//! Price-tier rules editor for one product
//!
//! MVVM layout:
//! - model.rs: API client (list tiers, list/create/delete product rules)
//! - state.rs: pure helpers (draft validation, tier availability, request tracking)
//! - view_model.rs: ViewModel with signals and commands
//! - view.rs: Leptos components (pure UI)

mod model;
mod state;
mod view;
mod view_model;

pub use model::{ApiError, HttpPriceRulesApi, PriceRulesApi};
pub use state::{available_tiers, DraftError, RuleDraft};
pub use view::PriceTierRules;
pub use view_model::PriceTierRulesVm;
