//! # Modal Controller
//!
//! A single overlay with two states, `Closed` and `Open`. Opening while a
//! modal is already showing replaces it in place, so at most one modal exists
//! at any time. The controller keeps `ViewState::modal_open` in step with its
//! own state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::forms::FormSpec;
use crate::render::TransactionDetailView;
use crate::view_state::ViewState;

/// What a modal button does when clicked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionIntent {
    CloseModal,
    SubmitTransfer { from_account_id: String },
    SubmitPayment { from_account_id: String },
    SubmitAddPayee,
    SubmitAddGoal,
    ReportIssue { transaction_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalAction {
    pub label: String,
    pub style: ButtonStyle,
    pub intent: ActionIntent,
}

impl ModalAction {
    pub fn cancel(label: &str) -> Self {
        Self { label: label.to_string(), style: ButtonStyle::Secondary, intent: ActionIntent::CloseModal }
    }

    pub fn primary(label: &str, intent: ActionIntent) -> Self {
        Self { label: label.to_string(), style: ButtonStyle::Primary, intent }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalContent {
    Form(FormSpec),
    TransactionDetail(TransactionDetailView),
}

/// Fully rendered modal supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modal {
    pub title: String,
    pub content: ModalContent,
    pub actions: Vec<ModalAction>,
}

impl Modal {
    pub fn form(&self) -> Option<&FormSpec> {
        match &self.content {
            ModalContent::Form(form) => Some(form),
            ModalContent::TransactionDetail(_) => None,
        }
    }
}

/// Where a click inside the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// The dimmed area around the modal
    Backdrop,
    Body,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Modal),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `modal`, replacing whatever is currently open.
    pub fn open(&mut self, view_state: &mut ViewState, modal: Modal) {
        if let ModalState::Open(previous) = &self.state {
            debug!("Replacing open modal '{}' with '{}'", previous.title, modal.title);
        }
        self.state = ModalState::Open(modal);
        view_state.modal_open = true;
    }

    /// Close the modal. Safe to call when nothing is open.
    pub fn close(&mut self, view_state: &mut ViewState) {
        self.state = ModalState::Closed;
        view_state.modal_open = false;
        view_state.selected_account_id = None;
    }

    /// Backdrop clicks close the modal; clicks on the modal body do not.
    pub fn click(&mut self, view_state: &mut ViewState, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop if self.is_open() => {
                self.close(view_state);
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn current(&self) -> Option<&Modal> {
        match &self.state {
            ModalState::Open(modal) => Some(modal),
            ModalState::Closed => None,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }
}
