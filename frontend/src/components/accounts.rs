use yew::prelude::*;
use web_sys::MouseEvent;
use shared::render::AccountCardView;
use shared::{AccountsSectionView, UserIntent};
use super::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct AccountsSectionProps {
    pub view: AccountsSectionView,
    pub on_intent: Callback<UserIntent>,
}

#[function_component(AccountsSection)]
pub fn accounts_section(props: &AccountsSectionProps) -> Html {
    let on_toggle = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(UserIntent::ToggleBalances))
    };

    html! {
        <section class="accounts-section">
            <div class="section-header">
                <h2>{"Your Accounts"}</h2>
                <button type="button" class="btn btn-ghost balance-toggle" onclick={on_toggle}>
                    <Icon icon={props.view.balance_toggle.icon} />
                    <span>{&props.view.balance_toggle.label}</span>
                </button>
            </div>
            <div class="accounts-grid">
                {for props.view.cards.iter().map(|card| html! {
                    <AccountCard
                        key={card.account_id.clone()}
                        card={card.clone()}
                        on_intent={props.on_intent.clone()}
                    />
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountCardProps {
    pub card: AccountCardView,
    pub on_intent: Callback<UserIntent>,
}

#[function_component(AccountCard)]
pub fn account_card(props: &AccountCardProps) -> Html {
    let card = &props.card;
    let balance_class = classes!("account-balance", card.balance_masked.then_some("masked"));

    html! {
        <div class="account-card">
            <div class="account-card-header">
                <div class={classes!("account-icon", card.icon_class.clone())}>
                    <Icon icon={card.icon} />
                </div>
                <div class="account-info">
                    <h3 class="account-name">{&card.name}</h3>
                    <p class="account-number">{&card.account_number}</p>
                </div>
            </div>
            <div class="account-balance-block">
                <span class="account-balance-label">{&card.balance_label}</span>
                <span class={balance_class}>{&card.balance_display}</span>
                {for card.pending_line.iter().map(|line| html! {
                    <span class="account-pending">{line}</span>
                })}
                {for card.available_credit_line.iter().map(|line| html! {
                    <span class="account-available">{line}</span>
                })}
            </div>
            <div class="account-actions">
                {for card.actions.iter().map(|action| {
                    let onclick = {
                        let on_intent = props.on_intent.clone();
                        let intent = action.intent.clone();
                        Callback::from(move |_: MouseEvent| on_intent.emit(intent.clone()))
                    };
                    let class = if action.primary { "btn btn-primary" } else { "btn btn-secondary" };
                    html! {
                        <button type="button" {class} {onclick}>
                            <Icon icon={action.icon} />
                            <span>{&action.label}</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
