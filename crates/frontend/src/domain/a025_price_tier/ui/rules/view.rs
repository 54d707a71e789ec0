use super::model::HttpPriceRulesApi;
use super::state::{format_rule_value, parse_tier_choice};
use super::view_model::PriceTierRulesVm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a025_price_tier::{ProductId, ProductTierPrice, RuleKind};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Tier pricing rules for one product: add form plus rules table
#[component]
pub fn PriceTierRules(#[prop(into)] product_id: Signal<Option<ProductId>>) -> impl IntoView {
    let notify = use_notifications().callback();
    let vm = PriceTierRulesVm::new(Arc::new(HttpPriceRulesApi), notify);

    // Reload on mount and whenever the product changes
    Effect::new({
        let vm = vm.clone();
        move |_| vm.load_selected_command(product_id.get())
    });

    on_cleanup({
        let tracker = vm.teardown_handle();
        move || tracker.close()
    });

    let rules_known = vm.rules_known();
    let loading = vm.loading;
    let vm_form = vm.clone();
    let vm_table = vm.clone();

    view! {
        <div class="details-section price-tier-rules">
            <h4 class="details-section__title">
                "Tier pricing rules"
                <Show when=move || loading.get() && rules_known.get()>
                    <span style="margin-left: var(--spacing-sm); color: var(--color-text-tertiary); font-weight: normal;">
                        "Refreshing..."
                    </span>
                </Show>
            </h4>

            <Show
                when=move || rules_known.get()
                fallback=|| view! {
                    <div style="padding: var(--spacing-md); display: flex; align-items: center; gap: var(--spacing-sm);">
                        <Spinner size=SpinnerSize::Small />
                        <span style="color: var(--color-text-tertiary);">"Loading price rules..."</span>
                    </div>
                }
            >
                <AddRuleForm vm=vm_form.clone() />
                <RulesTable vm=vm_table.clone() />
            </Show>
        </div>
    }
}

#[component]
fn AddRuleForm(vm: PriceTierRulesVm) -> impl IntoView {
    let available = vm.available_tiers();
    let is_add_disabled = vm.is_add_disabled();
    let draft_tier = vm.draft_tier;
    let draft_kind = vm.draft_kind;
    let draft_value = vm.draft_value;

    let tier_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Select tier".to_string())];
        options.extend(available.get().into_iter().map(|t| {
            (
                t.id.to_string(),
                format!("{} (default {}%)", t.name, t.default_percentage),
            )
        }));
        options
    });

    let kind_options = Signal::derive(|| {
        RuleKind::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), k.label().to_string()))
            .collect::<Vec<_>>()
    });

    let handle_add = move |_| vm.add_command();

    view! {
        <div class="price-tier-rules__form" style="display: flex; align-items: flex-end; gap: var(--spacing-sm); flex-wrap: wrap; margin-bottom: var(--spacing-md);">
            <Select
                id="price-rule-tier".to_string()
                label="Tier".to_string()
                value=Signal::derive(move || {
                    draft_tier.get().map(|id| id.to_string()).unwrap_or_default()
                })
                on_change=Callback::new(move |v: String| draft_tier.set(parse_tier_choice(&v)))
                options=tier_options
            />
            <Select
                id="price-rule-kind".to_string()
                label="Type".to_string()
                value=Signal::derive(move || draft_kind.get().as_str().to_string())
                on_change=Callback::new(move |v: String| {
                    if let Ok(kind) = v.parse::<RuleKind>() {
                        draft_kind.set(kind);
                    }
                })
                options=kind_options
            />
            <Input
                id="price-rule-value".to_string()
                label="Value".to_string()
                input_type="number".to_string()
                step="any".to_string()
                value=draft_value
                on_input=Callback::new(move |v: String| draft_value.set(v))
                placeholder="Negative for a discount".to_string()
            />
            <Button
                appearance=ButtonAppearance::Primary
                on_click=handle_add
                disabled=is_add_disabled
            >
                {icon("add")}
                " Add rule"
            </Button>
        </div>
    }
}

#[component]
fn RulesTable(vm: PriceTierRulesVm) -> impl IntoView {
    let rules = vm.rules;
    let vm_rows = StoredValue::new(vm);
    let has_rules = move || rules.with(|r| r.as_ref().is_some_and(|r| !r.is_empty()));

    view! {
        <Show
            when=has_rules
            fallback=|| view! {
                <div class="price-tier-rules__empty" style="padding: var(--spacing-md); color: var(--color-text-tertiary);">
                    "No custom rules. Default tier percentages will apply."
                </div>
            }
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=160.0>"Tier"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=120.0>"Type"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=120.0>"Value"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rules.get().unwrap_or_default()
                        key=|rule: &ProductTierPrice| rule.id
                        children=move |rule| view! { <RuleRow vm=vm_rows.get_value() rule=rule /> }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}

#[component]
fn RuleRow(vm: PriceTierRulesVm, rule: ProductTierPrice) -> impl IntoView {
    let id = rule.id;
    let (badge_color, badge_text) = match rule.kind {
        RuleKind::Percentage => (BadgeColor::Brand, "%"),
        RuleKind::Fixed => (BadgeColor::Informative, "Fixed"),
    };
    let value_style = if rule.is_discount() {
        "text-align: right; width: 100%; color: var(--color-error-700);"
    } else {
        "text-align: right; width: 100%;"
    };
    let value_text = format_rule_value(&rule);
    let delete_disabled = vm.is_delete_disabled(id);

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    {rule.tier_name}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <Badge appearance=BadgeAppearance::Tint color=badge_color>
                    {badge_text}
                </Badge>
            </TableCell>
            <TableCell>
                <div class="price-tier-rules__value" style=value_style>
                    {value_text}
                </div>
            </TableCell>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=delete_disabled
                    on_click=move |_| vm.delete_command(id)
                >
                    {icon("delete")}
                </Button>
            </TableCell>
        </TableRow>
    }
}
