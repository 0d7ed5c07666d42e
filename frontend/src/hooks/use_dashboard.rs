use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::{Dashboard, DashboardConfig, DashboardView, Effect, Modal, NavigationIntent, Notice, UserIntent};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Snapshot handed to the components plus the one way to change it
#[derive(Clone, PartialEq)]
pub struct UseDashboardHandle {
    pub view: DashboardView,
    pub modal: Option<Modal>,
    pub notices: Vec<Notice>,
    pub dispatch: Callback<UserIntent>,
}

#[hook]
pub fn use_dashboard(config: DashboardConfig) -> UseDashboardHandle {
    let dashboard = use_mut_ref(move || Dashboard::sample(config, shared::system_clock));
    let trigger = use_force_update();

    use_effect_with((), {
        let dashboard = dashboard.clone();
        move |_| {
            dashboard.borrow().initialize();
            || ()
        }
    });

    let dispatch = {
        let dashboard = dashboard.clone();
        let trigger = trigger.clone();
        Callback::from(move |intent: UserIntent| run_intent(&dashboard, &trigger, intent))
    };

    let state = dashboard.borrow();
    UseDashboardHandle {
        view: state.view(),
        modal: state.modal().cloned(),
        notices: state.notifications().notices().to_vec(),
        dispatch,
    }
}

fn run_intent(dashboard: &Rc<RefCell<Dashboard>>, trigger: &UseForceUpdateHandle, intent: UserIntent) {
    // The borrow must end before any effect re-enters the dashboard
    let effects = dashboard.borrow_mut().dispatch(intent);
    if effects.is_empty() {
        return;
    }

    let mut repaint = false;
    for effect in effects {
        match effect {
            Effect::Rerender(region) => {
                Logger::debug_with_component("dashboard", &format!("Repainting {:?}", region));
                repaint = true;
            }
            Effect::ScheduleNoticeExpiry { id, after_ms } => {
                let dashboard = dashboard.clone();
                let trigger = trigger.clone();
                let delay = u32::try_from(after_ms).unwrap_or(u32::MAX);
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    run_intent(&dashboard, &trigger, UserIntent::DismissNotice(id));
                });
            }
            Effect::Navigate(intent) => navigate(&intent),
        }
    }

    if repaint {
        trigger.force_update();
    }
}

fn navigate(intent: &NavigationIntent) {
    Logger::info_with_component("dashboard", &format!("Navigating to {}", intent.href));
    let Some(window) = web_sys::window() else {
        Logger::error_with_component("dashboard", "No window available for navigation");
        return;
    };
    if let Err(e) = window.location().set_href(&intent.href) {
        Logger::error_with_component("dashboard", &format!("Navigation to {} failed: {:?}", intent.href, e));
    }
}
