use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{QuickAction, UserIntent};
use super::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct QuickActionsProps {
    pub on_intent: Callback<UserIntent>,
}

#[function_component(QuickActions)]
pub fn quick_actions(props: &QuickActionsProps) -> Html {
    html! {
        <section class="quick-actions">
            <h2>{"Quick Actions"}</h2>
            <div class="quick-actions-grid">
                {for QuickAction::GRID.iter().map(|action| {
                    let action = *action;
                    let onclick = {
                        let on_intent = props.on_intent.clone();
                        Callback::from(move |_: MouseEvent| on_intent.emit(UserIntent::QuickAction(action)))
                    };
                    html! {
                        <button type="button" class="quick-action-btn" {onclick}>
                            <Icon icon={action.icon()} />
                            <span>{action.label()}</span>
                        </button>
                    }
                })}
            </div>
        </section>
    }
}
