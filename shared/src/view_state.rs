//! # View State
//!
//! The small mutable record the renderers read: whether balances are hidden,
//! which account an action was started from, and whether an overlay is open.
//!
//! Owned by [`crate::dashboard::Dashboard`]; handlers mutate it, renderers
//! only read it.

use serde::{Deserialize, Serialize};

use crate::models::IconKey;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub balances_hidden: bool,
    pub selected_account_id: Option<String>,
    pub modal_open: bool,
    pub user_menu_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip balance masking. The only mutator of `balances_hidden`.
    pub fn toggle_balances(&mut self) -> bool {
        self.balances_hidden = !self.balances_hidden;
        self.balances_hidden
    }

    pub fn toggle_user_menu(&mut self) -> bool {
        self.user_menu_open = !self.user_menu_open;
        self.user_menu_open
    }

    pub fn close_user_menu(&mut self) {
        self.user_menu_open = false;
    }

    /// Label and icon for the "Hide balances" button in the header
    pub fn balance_toggle(&self) -> BalanceToggleView {
        if self.balances_hidden {
            BalanceToggleView { label: "Show balances".to_string(), icon: IconKey::EyeOff }
        } else {
            BalanceToggleView { label: "Hide balances".to_string(), icon: IconKey::Eye }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceToggleView {
    pub label: String,
    pub icon: IconKey,
}
