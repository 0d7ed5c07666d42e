use serde::{Deserialize, Serialize};

/// Problems with a submitted form. Recoverable: the modal stays open and the
/// user sees an error notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(String),
    #[error("{0} must be a number (got '{1}')")]
    InvalidAmount(String, String),
    #[error("{0} must be greater than zero")]
    AmountNotPositive(String),
    #[error("{0} must be at least £{1:.2}")]
    AmountBelowMinimum(String, f64),
    #[error("{0} must be at most {1} characters")]
    FieldTooLong(String, usize),
    #[error("'{1}' is not a valid choice for {0}")]
    UnknownOption(String, String),
}

/// Every failure the dashboard can surface. None of them are fatal; each one
/// degrades to an error notice and an unchanged view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Account '{0}' was not found")]
    AccountNotFound(String),
    #[error("Transaction '{0}' was not found")]
    TransactionNotFound(String),
    #[error("Savings goal '{0}' has no target amount")]
    DivideByZeroGoal(String),
    #[error("Unknown icon '{0}'")]
    UnknownIcon(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid dashboard data: {0}")]
    Data(String),
}

impl DashboardError {
    /// Short headline used as the message of the error notice.
    pub fn headline(&self) -> &'static str {
        match self {
            DashboardError::Validation(ValidationError::MissingField(_)) => {
                "Please fill in all required fields"
            }
            DashboardError::Validation(_) => "Please check the form",
            DashboardError::AccountNotFound(_) => "Account unavailable",
            DashboardError::TransactionNotFound(_) => "Transaction unavailable",
            DashboardError::DivideByZeroGoal(_) => "Savings goal unavailable",
            DashboardError::UnknownIcon(_)
            | DashboardError::Config(_)
            | DashboardError::Data(_) => "Something went wrong",
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
