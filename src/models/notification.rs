use rust_decimal::Decimal;

use super::error::BudgetError;

/// Events the model emits for the presentation layer to surface as toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    MonthReset,
    SavingsAdded { amount: Decimal },
    SpendingRecorded { amount: Decimal },
    SpendingRejected { reason: BudgetError },
}

impl Notification {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::SpendingRejected { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Self::MonthReset => "New month started! Budget reset.".to_string(),
            Self::SavingsAdded { amount } => format!("Added ${amount:.2} to savings!"),
            Self::SpendingRecorded { amount } => format!("Spent ${amount:.2} today"),
            Self::SpendingRejected { reason } => reason.to_string(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
