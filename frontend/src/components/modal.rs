use yew::prelude::*;
use web_sys::{HtmlFormElement, MouseEvent};
use shared::render::TransactionDetailView;
use shared::{ActionIntent, ButtonStyle, ClickTarget, Modal, ModalContent, FormSubmission, UserIntent};
use super::forms::{read_submission, FormFields};
use super::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub modal: Modal,
    pub on_intent: Callback<UserIntent>,
}

#[function_component(ModalOverlay)]
pub fn modal_overlay(props: &ModalProps) -> Html {
    let form_ref = use_node_ref();

    let on_backdrop_click = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_intent.emit(UserIntent::OverlayClick(ClickTarget::Backdrop));
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| {
            on_intent.emit(UserIntent::ModalAction {
                intent: ActionIntent::CloseModal,
                submission: FormSubmission::new(),
            });
        })
    };

    let body = match &props.modal.content {
        ModalContent::Form(spec) => html! {
            <form ref={form_ref.clone()} class="modal-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <FormFields spec={spec.clone()} />
            </form>
        },
        ModalContent::TransactionDetail(detail) => render_detail(detail),
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{&props.modal.title}</h3>
                    <button type="button" class="modal-close" onclick={on_close_click}>
                        <Icon icon={shared::IconKey::Close} />
                    </button>
                </div>
                <div class="modal-body">{body}</div>
                <div class="modal-footer">
                    {for props.modal.actions.iter().map(|action| {
                        let onclick = {
                            let on_intent = props.on_intent.clone();
                            let intent = action.intent.clone();
                            let form_ref = form_ref.clone();
                            let spec = props.modal.form().cloned();
                            Callback::from(move |_: MouseEvent| {
                                let submission = match (form_ref.cast::<HtmlFormElement>(), &spec) {
                                    (Some(form), Some(spec)) => read_submission(&form, spec),
                                    _ => FormSubmission::new(),
                                };
                                on_intent.emit(UserIntent::ModalAction { intent: intent.clone(), submission });
                            })
                        };
                        let class = match action.style {
                            ButtonStyle::Primary => "btn btn-primary",
                            ButtonStyle::Secondary => "btn btn-secondary",
                            ButtonStyle::Danger => "btn btn-danger",
                        };
                        html! {
                            <button type="button" {class} {onclick}>{&action.label}</button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

fn render_detail(detail: &TransactionDetailView) -> Html {
    html! {
        <div class="transaction-detail">
            <div
                class="transaction-detail-icon"
                style={format!("background: {}; color: {}", detail.tone.background(), detail.tone.foreground())}
            >
                <Icon icon={detail.icon} />
            </div>
            <h4 class="transaction-detail-merchant">{&detail.merchant}</h4>
            <p class="transaction-detail-subtitle">{&detail.subtitle}</p>
            <div class={classes!("transaction-detail-amount", detail.amount_type.css_class())}>
                {&detail.amount_display}
            </div>
            <dl class="transaction-detail-rows">
                {for detail.rows.iter().map(|row| html! {
                    <div class="detail-row">
                        <dt>{&row.label}</dt>
                        <dd>{&row.value}</dd>
                    </div>
                })}
            </dl>
        </div>
    }
}
