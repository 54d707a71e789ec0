use crate::domain::a025_price_tier::ui::rules::PriceTierRules;
use crate::shared::components::ui::Input;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationCenter, NotificationStack};
use contracts::domain::a025_price_tier::ProductId;
use leptos::prelude::*;
use thaw::*;

/// Product id typed into the picker; only positive integers count
pub fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.trim().parse::<ProductId>().ok().filter(|id| *id > 0)
}

#[component]
pub fn App() -> impl IntoView {
    // Notifications are shared by every page
    provide_context(NotificationCenter::new(config().notifications.timeout_ms));

    let product_input = RwSignal::new(String::new());
    let product_id = Memo::new(move |_| parse_product_id(&product_input.get()));

    view! {
        <ConfigProvider>
            <div class="page page--detail">
                <div class="page__header">
                    <h2 class="page__title">{icon("products")}" Product pricing"</h2>
                </div>
                <div class="page__content">
                    <Input
                        id="product-id".to_string()
                        label="Product ID".to_string()
                        input_type="number".to_string()
                        value=product_input
                        on_input=Callback::new(move |v: String| product_input.set(v))
                        placeholder="Enter a product id".to_string()
                    />
                    <Show
                        when=move || product_id.get().is_some()
                        fallback=|| view! {
                            <div style="padding: var(--spacing-md); color: var(--color-text-tertiary);">
                                "Select a product to edit its tier pricing rules."
                            </div>
                        }
                    >
                        // Stays mounted while the id changes; the editor reloads itself
                        <PriceTierRules product_id=product_id />
                    </Show>
                </div>
            </div>
            <NotificationStack />
        </ConfigProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("42"), Some(42));
        assert_eq!(parse_product_id(" 7 "), Some(7));
        assert_eq!(parse_product_id("0"), None);
        assert_eq!(parse_product_id("-3"), None);
        assert_eq!(parse_product_id(""), None);
        assert_eq!(parse_product_id("abc"), None);
    }
}
