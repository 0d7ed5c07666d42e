use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboard::UserIntent;
use crate::formatting::{format_clock_time, format_relative_date, format_signed_currency};
use crate::models::{ColorTone, IconKey, Transaction};

/// Styling hint for a signed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Debit,
    Credit,
}

impl AmountType {
    pub fn of(amount: f64) -> Self {
        if amount < 0.0 {
            AmountType::Debit
        } else {
            AmountType::Credit
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AmountType::Debit => "debit",
            AmountType::Credit => "credit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRowView {
    pub transaction_id: String,
    pub merchant: String,
    pub category: String,
    pub time: String,
    pub amount_display: String,
    pub amount_type: AmountType,
    pub status_label: String,
    pub status_icon: IconKey,
    pub icon: IconKey,
    pub tone: ColorTone,
    pub on_click: UserIntent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionGroupView {
    pub label: String,
    pub rows: Vec<TransactionRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// Read-only body of the "Transaction Details" modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetailView {
    pub transaction_id: String,
    pub merchant: String,
    /// e.g. "dining • Today at 08:15"
    pub subtitle: String,
    pub amount_display: String,
    pub amount_type: AmountType,
    pub icon: IconKey,
    pub tone: ColorTone,
    pub rows: Vec<DetailRow>,
}

/// Bucket transactions by relative date label.
///
/// Buckets appear in the order their label is first seen and keep the input
/// order inside each bucket; nothing is re-sorted by time.
pub fn group_by_relative_date<'a>(
    transactions: &'a [Transaction],
    today: NaiveDate,
) -> Vec<(String, Vec<&'a Transaction>)> {
    let mut groups: Vec<(String, Vec<&'a Transaction>)> = Vec::new();
    for transaction in transactions {
        let label = format_relative_date(transaction.timestamp, today);
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, members)) => members.push(transaction),
            None => groups.push((label, vec![transaction])),
        }
    }
    groups
}

pub fn render_transactions(transactions: &[Transaction], today: NaiveDate) -> Vec<TransactionGroupView> {
    group_by_relative_date(transactions, today)
        .into_iter()
        .map(|(label, members)| TransactionGroupView {
            label,
            rows: members.into_iter().map(render_row).collect(),
        })
        .collect()
}

fn render_row(transaction: &Transaction) -> TransactionRowView {
    TransactionRowView {
        transaction_id: transaction.id.clone(),
        merchant: transaction.merchant.clone(),
        category: transaction.category.label().to_string(),
        time: format_clock_time(transaction.timestamp),
        amount_display: format_signed_currency(transaction.amount),
        amount_type: AmountType::of(transaction.amount),
        status_label: transaction.status.label().to_string(),
        status_icon: transaction.status.icon(),
        icon: transaction.icon,
        tone: transaction.tone,
        on_click: UserIntent::OpenTransactionDetail { transaction_id: transaction.id.clone() },
    }
}

pub fn render_transaction_detail(transaction: &Transaction, today: NaiveDate) -> TransactionDetailView {
    TransactionDetailView {
        transaction_id: transaction.id.clone(),
        merchant: transaction.merchant.clone(),
        subtitle: format!(
            "{} • {} at {}",
            transaction.category.label(),
            format_relative_date(transaction.timestamp, today),
            format_clock_time(transaction.timestamp)
        ),
        amount_display: format_signed_currency(transaction.amount),
        amount_type: AmountType::of(transaction.amount),
        icon: transaction.icon,
        tone: transaction.tone,
        rows: vec![
            DetailRow { label: "Transaction ID".to_string(), value: transaction.id.clone() },
            DetailRow { label: "Status".to_string(), value: transaction.status.title().to_string() },
            DetailRow { label: "Category".to_string(), value: transaction.category.title().to_string() },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionCategory, TransactionStatus};
    use chrono::{Duration, NaiveDateTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    fn txn(id: &str, timestamp: NaiveDateTime, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            timestamp,
            merchant: format!("Merchant {}", id),
            category: TransactionCategory::Shopping,
            amount,
            status: TransactionStatus::Completed,
            icon: IconKey::ShoppingBag,
            tone: ColorTone::Amber,
        }
    }

    fn at(days_ago: i64, hour: u32) -> NaiveDateTime {
        (today() - Duration::days(days_ago)).and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_groups_today_and_yesterday() {
        let transactions = vec![
            txn("t1", at(0, 9), -10.0),
            txn("t2", at(1, 18), -20.0),
            txn("t3", at(0, 7), -30.0),
            txn("t4", at(1, 8), 40.0),
        ];

        let groups = render_transactions(&transactions, today());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Today");
        assert_eq!(groups[1].label, "Yesterday");
        let today_ids: Vec<&str> = groups[0].rows.iter().map(|r| r.transaction_id.as_str()).collect();
        let yesterday_ids: Vec<&str> = groups[1].rows.iter().map(|r| r.transaction_id.as_str()).collect();
        assert_eq!(today_ids, vec!["t1", "t3"]);
        assert_eq!(yesterday_ids, vec!["t2", "t4"]);
    }

    #[test]
    fn test_group_order_follows_first_appearance() {
        let transactions = vec![
            txn("old", at(5, 12), -1.0),
            txn("now", at(0, 12), -1.0),
            txn("older", at(5, 8), -1.0),
        ];

        let groups = group_by_relative_date(&transactions, today());

        let labels: Vec<&str> = groups.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["14 Oct", "Today"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_row_amount_styling() {
        let transactions = vec![txn("debit", at(0, 9), -2847.5), txn("credit", at(0, 10), 12500.0)];
        let groups = render_transactions(&transactions, today());
        let rows = &groups[0].rows;

        assert_eq!(rows[0].amount_display, "-£2,847.50");
        assert_eq!(rows[0].amount_type, AmountType::Debit);
        assert_eq!(rows[1].amount_display, "+£12,500.00");
        assert_eq!(rows[1].amount_type, AmountType::Credit);
        assert_eq!(rows[0].time, "09:00");
        assert_eq!(rows[0].status_icon, IconKey::CheckCircle);
    }

    #[test]
    fn test_row_click_opens_detail() {
        let transactions = vec![txn("t9", at(0, 9), -5.0)];
        let groups = render_transactions(&transactions, today());
        assert_eq!(
            groups[0].rows[0].on_click,
            UserIntent::OpenTransactionDetail { transaction_id: "t9".to_string() }
        );
    }

    #[test]
    fn test_transaction_detail() {
        let detail = render_transaction_detail(&txn("txn_002", at(1, 14), -4.25), today());

        assert_eq!(detail.subtitle, "shopping • Yesterday at 14:00");
        assert_eq!(detail.amount_display, "-£4.25");
        assert_eq!(detail.rows[0].value, "txn_002");
        assert_eq!(detail.rows[1].value, "Completed");
        assert_eq!(detail.rows[2].value, "Shopping");
    }

    #[test]
    fn test_pending_transaction_detail_status() {
        let mut pending = txn("txn_003", at(0, 11), -60.0);
        pending.status = TransactionStatus::Pending;

        let detail = render_transaction_detail(&pending, today());

        assert_eq!(detail.rows[1].label, "Status");
        assert_eq!(detail.rows[1].value, "Pending");
    }
}
