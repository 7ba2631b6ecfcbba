use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}
