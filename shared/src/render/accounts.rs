use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::dashboard::UserIntent;
use crate::formatting::format_currency;
use crate::models::{Account, AccountType, IconKey};
use crate::view_state::ViewState;

/// Button on an account card, bound to that card's account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAction {
    pub label: String,
    pub icon: IconKey,
    pub primary: bool,
    pub intent: UserIntent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCardView {
    pub account_id: String,
    pub name: String,
    pub account_number: String,
    pub icon: IconKey,
    pub icon_class: String,
    pub balance_label: String,
    /// Formatted balance, or the mask while balances are hidden
    pub balance_display: String,
    pub balance_masked: bool,
    pub pending_line: Option<String>,
    pub available_credit_line: Option<String>,
    pub actions: Vec<CardAction>,
}

/// One card per account, in the order given.
pub fn render_accounts(
    accounts: &[Account],
    view_state: &ViewState,
    config: &DashboardConfig,
) -> Vec<AccountCardView> {
    accounts
        .iter()
        .map(|account| render_account(account, view_state, config))
        .collect()
}

fn render_account(account: &Account, view_state: &ViewState, config: &DashboardConfig) -> AccountCardView {
    let is_credit = account.account_type == AccountType::Credit;

    let balance_display = if view_state.balances_hidden {
        config.balance_mask.clone()
    } else {
        format_currency(account.balance)
    };

    // Pending and available credit are never masked
    let pending_line = (account.pending > 0.0)
        .then(|| format!("Pending: {}", format_currency(account.pending)));
    let available_credit_line = if is_credit {
        account
            .available_credit
            .map(|available| format!("Available: {}", format_currency(available)))
    } else {
        None
    };

    AccountCardView {
        account_id: account.id.clone(),
        name: account.name.clone(),
        account_number: account.account_number.clone(),
        icon: account.icon,
        icon_class: account.account_type.css_class().to_string(),
        balance_label: if is_credit { "Balance" } else { "Available Balance" }.to_string(),
        balance_display,
        balance_masked: view_state.balances_hidden,
        pending_line,
        available_credit_line,
        actions: vec![
            CardAction {
                label: "Transfer".to_string(),
                icon: IconKey::ArrowLeftRight,
                primary: true,
                intent: UserIntent::OpenTransfer { account_id: account.id.clone() },
            },
            CardAction {
                label: "Pay".to_string(),
                icon: IconKey::Send,
                primary: false,
                intent: UserIntent::OpenPayment { account_id: account.id.clone() },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DashboardData;
    use chrono::NaiveDate;

    fn accounts() -> Vec<Account> {
        let now = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap().and_hms_opt(12, 0, 0).unwrap();
        DashboardData::sample(now).accounts
    }

    #[test]
    fn test_render_preserves_order_and_labels() {
        let cards = render_accounts(&accounts(), &ViewState::new(), &DashboardConfig::default());

        let ids: Vec<&str> = cards.iter().map(|card| card.account_id.as_str()).collect();
        assert_eq!(ids, vec!["acc_001", "acc_002", "acc_003"]);
        assert_eq!(cards[0].balance_label, "Available Balance");
        assert_eq!(cards[1].balance_label, "Available Balance");
        assert_eq!(cards[2].balance_label, "Balance");
        assert_eq!(cards[0].balance_display, "£4,987,543.26");
        assert_eq!(cards[2].balance_display, "£6,456.25");
    }

    #[test]
    fn test_pending_and_credit_lines() {
        let cards = render_accounts(&accounts(), &ViewState::new(), &DashboardConfig::default());

        assert_eq!(cards[0].pending_line.as_deref(), Some("Pending: £420.00"));
        assert_eq!(cards[1].pending_line, None);
        assert_eq!(cards[0].available_credit_line, None);
        assert_eq!(cards[2].available_credit_line.as_deref(), Some("Available: £18,543.75"));
    }

    #[test]
    fn test_hidden_balances_use_constant_mask() {
        let mut view_state = ViewState::new();
        view_state.toggle_balances();
        let config = DashboardConfig::default();

        let cards = render_accounts(&accounts(), &view_state, &config);

        for card in &cards {
            assert_eq!(card.balance_display, "••••••");
            assert!(card.balance_masked);
        }
        assert_eq!(cards[0].pending_line.as_deref(), Some("Pending: £420.00"));
        assert_eq!(cards[2].available_credit_line.as_deref(), Some("Available: £18,543.75"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let view_state = ViewState::new();
        let config = DashboardConfig::default();
        let data = accounts();
        assert_eq!(render_accounts(&data, &view_state, &config), render_accounts(&data, &view_state, &config));
    }

    #[test]
    fn test_actions_bound_to_account() {
        let cards = render_accounts(&accounts(), &ViewState::new(), &DashboardConfig::default());
        let intents: Vec<&UserIntent> = cards[1].actions.iter().map(|action| &action.intent).collect();
        assert_eq!(
            intents,
            vec![
                &UserIntent::OpenTransfer { account_id: "acc_002".to_string() },
                &UserIntent::OpenPayment { account_id: "acc_002".to_string() },
            ]
        );
    }
}
