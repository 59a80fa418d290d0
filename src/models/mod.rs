mod amount;
mod budget;
mod closet;
mod error;
mod notification;

pub use amount::parse_amount;
pub use budget::BudgetModel;
pub use closet::{Closet, Jar, Shelf};
pub use error::BudgetError;
pub use notification::Notification;
