pub mod budget;
pub mod transaction;
pub mod user;

pub use budget::{Budget, CategoryTotal};
pub use transaction::{DailyTotal, NewTransaction, Transaction};
pub use user::{User, UserId};
