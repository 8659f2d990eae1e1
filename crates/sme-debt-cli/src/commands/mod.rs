pub mod covenants;
pub mod debt_brake;
pub mod debt_equity;
pub mod debt_snowball;
pub mod funding;
pub mod loans;
