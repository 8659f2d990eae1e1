pub mod covenants;
pub mod cost_of_debt;
pub mod debt_brake;
pub mod debt_equity;
pub mod debt_snowball;
pub mod error;
pub mod funding;
pub mod types;

pub use error::SmeDebtError;
pub use types::*;

/// Standard result type for all calculator operations
pub type SmeDebtResult<T> = Result<T, SmeDebtError>;
