use rust_decimal::Decimal;
use thiserror::Error;

/// Recoverable failures of a savings or spending transaction.
///
/// Neither variant changes model state; the caller re-prompts or shows the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("Invalid amount: '{0}' (enter an amount greater than 0.00)")]
    InvalidAmount(String),
    #[error("Amount too large: savings would exceed {}", Decimal::MAX)]
    AmountTooLarge(Decimal),
    #[error("Not enough budget for today!")]
    InsufficientBudget { requested: Decimal, remaining: Decimal },
}

impl BudgetError {
    /// Extra context for the user beyond the headline message.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidAmount(_) | Self::AmountTooLarge(_) => None,
            Self::InsufficientBudget {
                requested,
                remaining,
            } => Some(format!("tried to spend ${requested:.2}, ${remaining:.2} left today")),
        }
    }
}
