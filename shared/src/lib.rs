//! Render and state core of the Premier banking dashboard.
//!
//! Everything here is plain data in, view models out. The Yew frontend owns a
//! [`Dashboard`], forwards [`UserIntent`]s to it and paints whatever regions
//! the returned [`Effect`]s name.

pub mod actions;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod formatting;
pub mod forms;
pub mod modal;
pub mod models;
pub mod notifications;
pub mod render;
pub mod view_state;

pub use actions::{ActionOutcome, ActionService};
pub use config::DashboardConfig;
pub use dashboard::{
    system_clock, AccountsSectionView, Clock, Dashboard, DashboardView, Effect, NavigationIntent,
    NavigationTarget, QuickAction, Region, UserIntent,
};
pub use data::DashboardData;
pub use error::{DashboardError, DashboardResult, ValidationError};
pub use formatting::{format_currency, format_relative_date, format_signed_currency};
pub use forms::{FieldKind, FieldSpec, FormKind, FormSpec, FormSubmission, SelectOption};
pub use modal::{ActionIntent, ButtonStyle, ClickTarget, Modal, ModalAction, ModalContent};
pub use models::{
    Account, AccountType, ColorTone, IconKey, Payee, SavingsGoal, SpendingSlice, SpendingSummary,
    Transaction, TransactionCategory, TransactionStatus, UserProfile,
};
pub use notifications::{Notice, NoticeId, NoticeKind, NotificationCenter};
pub use view_state::{BalanceToggleView, ViewState};
