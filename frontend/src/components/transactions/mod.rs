pub mod spending_chart;
pub mod transaction_list;

pub use spending_chart::SpendingChart;
pub use transaction_list::TransactionList;
