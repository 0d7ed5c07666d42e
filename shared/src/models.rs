//! Domain data for the dashboard: accounts, savings goals, transactions and the
//! small supporting records (payees, spending summary, user profile).
//!
//! Everything here is loaded once and treated as immutable for the session.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Icon names understood by the presentation layer (lucide glyph names).
///
/// Parsing rejects unknown names, so a typo in the data is caught when the
/// data is loaded rather than when a card is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IconKey {
    Wallet,
    PiggyBank,
    CreditCard,
    Plane,
    Shield,
    Car,
    Home,
    GraduationCap,
    Heart,
    ShoppingBag,
    ShoppingCart,
    Coffee,
    Droplet,
    Flame,
    PoundSterling,
    Clock,
    CheckCircle,
    XCircle,
    AlertCircle,
    Info,
    Close,
    ArrowLeftRight,
    Send,
    MoreVertical,
    ChevronRight,
    Eye,
    EyeOff,
    LogOut,
    Receipt,
    UserPlus,
    FileText,
    Bell,
    MessageCircle,
    Target,
}

impl IconKey {
    pub const ALL: [IconKey; 34] = [
        IconKey::Wallet,
        IconKey::PiggyBank,
        IconKey::CreditCard,
        IconKey::Plane,
        IconKey::Shield,
        IconKey::Car,
        IconKey::Home,
        IconKey::GraduationCap,
        IconKey::Heart,
        IconKey::ShoppingBag,
        IconKey::ShoppingCart,
        IconKey::Coffee,
        IconKey::Droplet,
        IconKey::Flame,
        IconKey::PoundSterling,
        IconKey::Clock,
        IconKey::CheckCircle,
        IconKey::XCircle,
        IconKey::AlertCircle,
        IconKey::Info,
        IconKey::Close,
        IconKey::ArrowLeftRight,
        IconKey::Send,
        IconKey::MoreVertical,
        IconKey::ChevronRight,
        IconKey::Eye,
        IconKey::EyeOff,
        IconKey::LogOut,
        IconKey::Receipt,
        IconKey::UserPlus,
        IconKey::FileText,
        IconKey::Bell,
        IconKey::MessageCircle,
        IconKey::Target,
    ];

    /// The glyph name as the icon library knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Wallet => "wallet",
            IconKey::PiggyBank => "piggy-bank",
            IconKey::CreditCard => "credit-card",
            IconKey::Plane => "plane",
            IconKey::Shield => "shield",
            IconKey::Car => "car",
            IconKey::Home => "home",
            IconKey::GraduationCap => "graduation-cap",
            IconKey::Heart => "heart",
            IconKey::ShoppingBag => "shopping-bag",
            IconKey::ShoppingCart => "shopping-cart",
            IconKey::Coffee => "coffee",
            IconKey::Droplet => "droplet",
            IconKey::Flame => "flame",
            IconKey::PoundSterling => "pound-sterling",
            IconKey::Clock => "clock",
            IconKey::CheckCircle => "check-circle-2",
            IconKey::XCircle => "x-circle",
            IconKey::AlertCircle => "alert-circle",
            IconKey::Info => "info",
            IconKey::Close => "x",
            IconKey::ArrowLeftRight => "arrow-left-right",
            IconKey::Send => "send",
            IconKey::MoreVertical => "more-vertical",
            IconKey::ChevronRight => "chevron-right",
            IconKey::Eye => "eye",
            IconKey::EyeOff => "eye-off",
            IconKey::LogOut => "log-out",
            IconKey::Receipt => "receipt",
            IconKey::UserPlus => "user-plus",
            IconKey::FileText => "file-text",
            IconKey::Bell => "bell",
            IconKey::MessageCircle => "message-circle",
            IconKey::Target => "target",
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .iter()
            .copied()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownIcon(s.to_string()))
    }
}

impl TryFrom<String> for IconKey {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IconKey> for String {
    fn from(icon: IconKey) -> Self {
        icon.as_str().to_string()
    }
}

/// Colour tokens for icon badges. The presentation layer maps them to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTone {
    Amber,
    Violet,
    Blue,
    Green,
    Red,
}

impl ColorTone {
    pub fn foreground(&self) -> &'static str {
        match self {
            ColorTone::Amber => "#F59E0B",
            ColorTone::Violet => "#8B5CF6",
            ColorTone::Blue => "#3B82F6",
            ColorTone::Green => "#10B981",
            ColorTone::Red => "#EF4444",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ColorTone::Amber => "rgba(245, 158, 11, 0.1)",
            ColorTone::Violet => "rgba(139, 92, 246, 0.1)",
            ColorTone::Blue => "rgba(59, 130, 246, 0.1)",
            ColorTone::Green => "rgba(16, 185, 129, 0.1)",
            ColorTone::Red => "rgba(239, 68, 68, 0.1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Current,
    Savings,
    Credit,
}

impl AccountType {
    /// CSS modifier for the account icon badge
    pub fn css_class(&self) -> &'static str {
        match self {
            AccountType::Current => "current",
            AccountType::Savings => "savings",
            AccountType::Credit => "credit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub account_type: AccountType,
    pub name: String,
    /// Already masked, e.g. "****9456"
    pub account_number: String,
    pub sort_code: Option<String>,
    /// Signed balance in pounds (credit cards carry a negative balance)
    pub balance: f64,
    pub pending: f64,
    /// Credit accounts only. Not reconciled against `balance`/`total_limit`.
    pub available_credit: Option<f64>,
    pub total_limit: Option<f64>,
    pub icon: IconKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub saved: f64,
    pub icon: IconKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Shopping,
    Dining,
    Bills,
    Groceries,
    Transport,
    Income,
}

impl TransactionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionCategory::Shopping => "shopping",
            TransactionCategory::Dining => "dining",
            TransactionCategory::Bills => "bills",
            TransactionCategory::Groceries => "groceries",
            TransactionCategory::Transport => "transport",
            TransactionCategory::Income => "income",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TransactionCategory::Shopping => "Shopping",
            TransactionCategory::Dining => "Dining",
            TransactionCategory::Bills => "Bills",
            TransactionCategory::Groceries => "Groceries",
            TransactionCategory::Transport => "Transport",
            TransactionCategory::Income => "Income",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
        }
    }

    /// Capitalised form used on the detail view
    pub fn title(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
        }
    }

    pub fn icon(&self) -> IconKey {
        match self {
            TransactionStatus::Completed => IconKey::CheckCircle,
            TransactionStatus::Pending => IconKey::Clock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Local wall-clock time of the transaction
    pub timestamp: NaiveDateTime,
    pub merchant: String,
    pub category: TransactionCategory,
    /// Negative for debits, positive for credits
    pub amount: f64,
    pub status: TransactionStatus,
    pub icon: IconKey,
    pub tone: ColorTone,
}

/// Someone the user can pay from the "Make a Payment" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payee {
    pub id: String,
    pub name: String,
}

/// One slice of the monthly spending summary shown in the doughnut chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingSlice {
    pub label: String,
    pub amount: f64,
    pub tone: ColorTone,
}

/// Monthly spending summary. Supplied on its own, not derived from the
/// transaction list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub slices: Vec<SpendingSlice>,
}

impl SpendingSummary {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.amount.abs()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub tier: String,
}

impl UserProfile {
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            display_name: "Julie Bailey".to_string(),
            tier: "Premier Banking".to_string(),
        }
    }
}
