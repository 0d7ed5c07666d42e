//! Renderers: pure functions from domain data + view state to typed view
//! models. The presentation layer paints these; nothing here knows about HTML.

pub mod accounts;
pub mod chart;
pub mod goals;
pub mod header;
pub mod transactions;

pub use accounts::{render_accounts, AccountCardView, CardAction};
pub use chart::{render_spending_chart, ChartLegendEntry, ChartView};
pub use goals::{goal_progress, render_goals, GoalCardView};
pub use header::{greeting_for_hour, render_header, HeaderView, UserMenuView};
pub use transactions::{
    group_by_relative_date, render_transaction_detail, render_transactions, AmountType, DetailRow,
    TransactionDetailView, TransactionGroupView, TransactionRowView,
};
