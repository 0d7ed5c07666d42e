use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{Notice, UserIntent};
use super::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct NoticeStackProps {
    pub notices: Vec<Notice>,
    pub on_intent: Callback<UserIntent>,
}

/// Toasts in insertion order, newest last
#[function_component(NoticeStack)]
pub fn notice_stack(props: &NoticeStackProps) -> Html {
    html! {
        <div class="toast-container">
            {for props.notices.iter().map(|notice| {
                let on_dismiss = {
                    let on_intent = props.on_intent.clone();
                    let id = notice.id;
                    Callback::from(move |_: MouseEvent| on_intent.emit(UserIntent::DismissNotice(id)))
                };

                html! {
                    <div class={classes!("toast", notice.kind.css_class())} key={notice.id.to_string()}>
                        <Icon icon={notice.icon()} class="toast-icon" />
                        <div class="toast-content">
                            <div class="toast-message">{&notice.message}</div>
                            {for notice.description.iter().map(|description| html! {
                                <div class="toast-description">{description}</div>
                            })}
                        </div>
                        <button type="button" class="toast-close" onclick={on_dismiss}>
                            <Icon icon={shared::IconKey::Close} />
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
