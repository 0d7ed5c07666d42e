//! The dashboard's data set and the built-in sample data.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    Account, AccountType, ColorTone, IconKey, Payee, SavingsGoal, SpendingSlice, SpendingSummary,
    Transaction, TransactionCategory, TransactionStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub accounts: Vec<Account>,
    pub goals: Vec<SavingsGoal>,
    pub transactions: Vec<Transaction>,
    pub payees: Vec<Payee>,
    pub spending: SpendingSummary,
}

impl DashboardData {
    pub fn from_json_str(json: &str) -> DashboardResult<Self> {
        let data: DashboardData =
            serde_json::from_str(json).map_err(|e| DashboardError::Data(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    /// Ids must be unique within each collection; lookups rely on it.
    pub fn validate(&self) -> DashboardResult<()> {
        ensure_unique("account", self.accounts.iter().map(|a| a.id.as_str()))?;
        ensure_unique("goal", self.goals.iter().map(|g| g.id.as_str()))?;
        ensure_unique("transaction", self.transactions.iter().map(|t| t.id.as_str()))?;
        ensure_unique("payee", self.payees.iter().map(|p| p.id.as_str()))?;
        Ok(())
    }

    pub fn account(&self, id: &str) -> DashboardResult<&Account> {
        self.accounts
            .iter()
            .find(|account| account.id == id)
            .ok_or_else(|| DashboardError::AccountNotFound(id.to_string()))
    }

    pub fn transaction(&self, id: &str) -> DashboardResult<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .ok_or_else(|| DashboardError::TransactionNotFound(id.to_string()))
    }

    /// Sample Premier customer; transaction times are relative to `now`.
    pub fn sample(now: NaiveDateTime) -> Self {
        let one_day = Duration::days(1);

        let accounts = vec![
            Account {
                id: "acc_001".to_string(),
                account_type: AccountType::Current,
                name: "Premier Current Account".to_string(),
                account_number: "****9456".to_string(),
                sort_code: Some("40-47-84".to_string()),
                balance: 4987543.26,
                pending: 420.00,
                available_credit: None,
                total_limit: None,
                icon: IconKey::Wallet,
            },
            Account {
                id: "acc_002".to_string(),
                account_type: AccountType::Savings,
                name: "Advance Savings Account".to_string(),
                account_number: "****3821".to_string(),
                sort_code: Some("40-47-84".to_string()),
                balance: 125680.50,
                pending: 0.0,
                available_credit: None,
                total_limit: None,
                icon: IconKey::PiggyBank,
            },
            Account {
                id: "acc_003".to_string(),
                account_type: AccountType::Credit,
                name: "Premier Credit Card".to_string(),
                account_number: "****7284".to_string(),
                sort_code: None,
                balance: -6456.25,
                pending: 0.0,
                available_credit: Some(18543.75),
                total_limit: Some(25000.00),
                icon: IconKey::CreditCard,
            },
        ];

        let goals = vec![
            goal("goal_001", "Holiday Fund", 5000.00, 3250.00, IconKey::Plane),
            goal("goal_002", "Emergency Fund", 10000.00, 6800.00, IconKey::Shield),
            goal("goal_003", "New Car", 15000.00, 4500.00, IconKey::Car),
        ];

        let transactions = vec![
            transaction("txn_001", now, "Harrods", TransactionCategory::Shopping, -2847.50, IconKey::ShoppingBag, ColorTone::Amber),
            transaction("txn_002", now, "Caffè Nero", TransactionCategory::Dining, -4.25, IconKey::Coffee, ColorTone::Violet),
            transaction("txn_003", now - one_day, "Thames Water", TransactionCategory::Bills, -127.84, IconKey::Droplet, ColorTone::Blue),
            transaction("txn_004", now - one_day, "Waitrose & Partners", TransactionCategory::Groceries, -156.73, IconKey::ShoppingCart, ColorTone::Green),
            transaction("txn_005", now - one_day * 2, "British Gas", TransactionCategory::Bills, -198.45, IconKey::Flame, ColorTone::Red),
            transaction("txn_006", now - one_day * 2, "Selfridges", TransactionCategory::Shopping, -1456.99, IconKey::ShoppingBag, ColorTone::Amber),
            transaction("txn_007", now - one_day * 5, "Salary Payment", TransactionCategory::Income, 12500.00, IconKey::PoundSterling, ColorTone::Green),
        ];

        let payees = [
            ("sarah", "Sarah Thompson"),
            ("michael", "Michael Chen"),
            ("emma", "Emma Wilson"),
            ("david", "David Roberts"),
            ("oliver", "Oliver Martinez"),
        ]
        .into_iter()
        .map(|(id, name)| Payee { id: id.to_string(), name: name.to_string() })
        .collect();

        let spending = SpendingSummary {
            slices: vec![
                slice("Groceries", 345.80, ColorTone::Blue),
                slice("Transport", 180.50, ColorTone::Violet),
                slice("Dining", 265.00, ColorTone::Amber),
                slice("Bills", 450.00, ColorTone::Green),
            ],
        };

        Self { accounts, goals, transactions, payees, spending }
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> DashboardResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DashboardError::Data(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(())
}

fn goal(id: &str, name: &str, target: f64, saved: f64, icon: IconKey) -> SavingsGoal {
    SavingsGoal { id: id.to_string(), name: name.to_string(), target, saved, icon }
}

fn transaction(
    id: &str,
    timestamp: NaiveDateTime,
    merchant: &str,
    category: TransactionCategory,
    amount: f64,
    icon: IconKey,
    tone: ColorTone,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        timestamp,
        merchant: merchant.to_string(),
        category,
        amount,
        status: TransactionStatus::Completed,
        icon,
        tone,
    }
}

fn slice(label: &str, amount: f64, tone: ColorTone) -> SpendingSlice {
    SpendingSlice { label: label.to_string(), amount, tone }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_data_is_valid() {
        let data = DashboardData::sample(now());
        assert!(data.validate().is_ok());
        assert_eq!(data.accounts.len(), 3);
        assert_eq!(data.goals.len(), 3);
        assert_eq!(data.transactions.len(), 7);
        assert_eq!(data.payees.len(), 5);
    }

    #[test]
    fn test_json_round_trip_keeps_icons() {
        let data = DashboardData::sample(now());
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"piggy-bank\""));

        let loaded = DashboardData::from_json_str(&json).unwrap();
        assert_eq!(loaded.accounts[1].icon, IconKey::PiggyBank);
        assert_eq!(loaded.transactions[6].timestamp, data.transactions[6].timestamp);
        assert_eq!(loaded.payees, data.payees);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut data = DashboardData::sample(now());
        data.goals[1].id = "goal_001".to_string();
        let json = serde_json::to_string(&data).unwrap();

        let result = DashboardData::from_json_str(&json);
        assert!(matches!(result, Err(DashboardError::Data(message)) if message.contains("goal_001")));
    }

    #[test]
    fn test_lookups() {
        let data = DashboardData::sample(now());
        assert_eq!(data.account("acc_003").unwrap().name, "Premier Credit Card");
        assert!(matches!(data.account("nope"), Err(DashboardError::AccountNotFound(_))));
        assert!(matches!(data.transaction("nope"), Err(DashboardError::TransactionNotFound(_))));
    }
}
