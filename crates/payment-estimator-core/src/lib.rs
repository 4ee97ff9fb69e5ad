pub mod calculator;
pub mod display;
pub mod error;
pub mod input;
pub mod pricing;
pub mod time_value;
pub mod types;

pub use calculator::{calculate, CalculationRequest, CalculationResult};
pub use error::PaymentError;
pub use types::*;

/// Standard result type for all payment-estimator operations
pub type PaymentResult<T> = Result<T, PaymentError>;
