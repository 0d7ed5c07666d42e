pub mod accounts;
pub mod forms;
pub mod goal_card;
pub mod header;
pub mod icon;
pub mod modal;
pub mod notices;
pub mod quick_actions;
pub mod transactions;

pub use accounts::AccountsSection;
pub use goal_card::GoalsSection;
pub use header::Header;
pub use modal::ModalOverlay;
pub use notices::NoticeStack;
pub use quick_actions::QuickActions;
pub use transactions::{SpendingChart, TransactionList};
