use yew::prelude::*;
use web_sys::MouseEvent;
use shared::render::HeaderView;
use shared::UserIntent;
use super::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub view: HeaderView,
    pub on_intent: Callback<UserIntent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    // Stop here so the page-level click handler doesn't close the menu again
    let on_toggle_menu = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_intent.emit(UserIntent::ToggleUserMenu);
        })
    };

    let on_menu_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <header class="header">
            <div class="container">
                <h1 class="greeting">{&props.view.greeting}</h1>
                <div class="header-right">
                    <div class="user-menu-wrapper">
                        <button type="button" class="user-menu-btn" onclick={on_toggle_menu}>
                            <Icon icon={shared::IconKey::MoreVertical} />
                        </button>
                        {if let Some(menu) = &props.view.user_menu {
                            let on_log_out = {
                                let on_intent = props.on_intent.clone();
                                let intent = menu.log_out.clone();
                                Callback::from(move |_: MouseEvent| on_intent.emit(intent.clone()))
                            };
                            html! {
                                <div class="user-menu" onclick={on_menu_click}>
                                    <div class="user-menu-profile">
                                        <div class="user-menu-name">{&menu.display_name}</div>
                                        <div class="user-menu-tier">{&menu.tier}</div>
                                    </div>
                                    <button type="button" class="user-menu-item" onclick={on_log_out}>
                                        <Icon icon={shared::IconKey::LogOut} />
                                        <span>{"Log out"}</span>
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
