use thiserror::Error;

/// Errors from field and polynomial arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Division by the zero polynomial, or inverse of the zero field element.
    #[error("division by zero")]
    DivByZero,
}
