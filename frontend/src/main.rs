use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{DashboardConfig, UserIntent};

mod components;
mod hooks;
mod services;

use components::{
    AccountsSection, GoalsSection, Header, ModalOverlay, NoticeStack, QuickActions, SpendingChart,
    TransactionList,
};
use hooks::use_dashboard;
use services::config::FrontendConfig;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: DashboardConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let dashboard = use_dashboard(props.config.clone());
    let on_intent = dashboard.dispatch.clone();

    // Any click that reaches the page closes the user menu
    let on_page_click = {
        let on_intent = on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(UserIntent::CloseUserMenu))
    };

    html! {
        <div class="app" onclick={on_page_click}>
            <Header view={dashboard.view.header.clone()} on_intent={on_intent.clone()} />

            <main class="main">
                <div class="container">
                    <AccountsSection view={dashboard.view.accounts.clone()} on_intent={on_intent.clone()} />
                    <QuickActions on_intent={on_intent.clone()} />
                    <GoalsSection goals={dashboard.view.goals.clone()} />
                    <div class="dashboard-lower">
                        <TransactionList groups={dashboard.view.transactions.clone()} on_intent={on_intent.clone()} />
                        <SpendingChart chart={dashboard.view.chart.clone()} />
                    </div>
                </div>
            </main>

            {if let Some(modal) = &dashboard.modal {
                html! { <ModalOverlay modal={modal.clone()} on_intent={on_intent.clone()} /> }
            } else {
                html! {}
            }}

            <NoticeStack notices={dashboard.notices.clone()} on_intent={on_intent} />
        </div>
    }
}

fn main() {
    let config = match FrontendConfig::bundled() {
        Ok(config) => config,
        Err(e) => {
            gloo::console::error!(format!("Falling back to default configuration: {:#}", e));
            FrontendConfig::default()
        }
    };

    if let Err(e) = Logger::init(&config.log_level) {
        gloo::console::error!(format!("Logging disabled: {:#}", e));
    }
    Logger::info_with_component("app", "Starting dashboard");

    yew::Renderer::<App>::with_props(AppProps { config: config.dashboard }).render();
}
