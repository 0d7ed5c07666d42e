use yew::prelude::*;
use web_sys::MouseEvent;
use shared::render::TransactionGroupView;
use shared::UserIntent;
use crate::components::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub groups: Vec<TransactionGroupView>,
    pub on_intent: Callback<UserIntent>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Recent Transactions"}</h2>

            {if props.groups.is_empty() {
                html! { <div class="transactions-empty">{"No recent transactions"}</div> }
            } else {
                html! {
                    <div class="transaction-groups">
                        {for props.groups.iter().map(|group| html! {
                            <div class="transaction-group" key={group.label.clone()}>
                                <h3 class="transaction-group-label">{&group.label}</h3>
                                {for group.rows.iter().map(|row| {
                                    let onclick = {
                                        let on_intent = props.on_intent.clone();
                                        let intent = row.on_click.clone();
                                        Callback::from(move |_: MouseEvent| on_intent.emit(intent.clone()))
                                    };

                                    html! {
                                        <div class="transaction-item" key={row.transaction_id.clone()} {onclick}>
                                            <div
                                                class="transaction-icon"
                                                style={format!("background: {}; color: {}", row.tone.background(), row.tone.foreground())}
                                            >
                                                <Icon icon={row.icon} />
                                            </div>
                                            <div class="transaction-details">
                                                <div class="transaction-merchant">{&row.merchant}</div>
                                                <div class="transaction-meta">
                                                    <span class="transaction-category">{&row.category}</span>
                                                    <span class="transaction-time">{&row.time}</span>
                                                </div>
                                            </div>
                                            <div class="transaction-right">
                                                <div class={classes!("transaction-amount", row.amount_type.css_class())}>
                                                    {&row.amount_display}
                                                </div>
                                                <div class="transaction-status">
                                                    <Icon icon={row.status_icon} />
                                                    <span>{&row.status_label}</span>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>
                        })}
                    </div>
                }
            }}
        </section>
    }
}
