use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmeDebtError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Debt {debt_index}: minimum payment does not cover accrued interest, the balance never amortizes")]
    InsufficientPayment { debt_index: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SmeDebtError {
    fn from(e: serde_json::Error) -> Self {
        SmeDebtError::SerializationError(e.to_string())
    }
}
