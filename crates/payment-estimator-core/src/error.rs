use thiserror::Error;

/// Validation and computation failures.
///
/// The `Display` text of the validation variants is the message shown to the
/// user verbatim, so it must stay stable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Please check MSRP and Residual %.")]
    InvalidMsrpOrResidual,

    #[error("Money Factor looks off (e.g., 0.00188).")]
    InvalidMoneyFactor,

    #[error("Please check MSRP and Term.")]
    InvalidMsrpOrTerm,

    #[error("Rate % cannot be negative.")]
    InvalidRate,

    #[error("Loan amount is negative. Check inputs.")]
    NegativePrincipal,

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Amounts too large to compute {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl PaymentError {
    /// True for failures the user can fix by correcting an input field.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PaymentError::InvalidMsrpOrResidual
                | PaymentError::InvalidMoneyFactor
                | PaymentError::InvalidMsrpOrTerm
                | PaymentError::InvalidRate
                | PaymentError::NegativePrincipal
                | PaymentError::Overflow { .. }
        )
    }
}

/// Turns the `None` of a `checked_*` decimal operation into
/// [`PaymentError::Overflow`].
pub(crate) trait OrOverflow<T> {
    fn or_overflow(self, context: &str) -> Result<T, PaymentError>;
}

impl<T> OrOverflow<T> for Option<T> {
    fn or_overflow(self, context: &str) -> Result<T, PaymentError> {
        self.ok_or_else(|| PaymentError::Overflow {
            context: context.to_string(),
        })
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(e: serde_json::Error) -> Self {
        PaymentError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_or_overflow_names_the_step() {
        let sum = Decimal::MAX.checked_add(Decimal::ONE);
        assert_eq!(
            sum.or_overflow("selling price"),
            Err(PaymentError::Overflow {
                context: "selling price".into()
            })
        );
        assert_eq!(Some(Decimal::ONE).or_overflow("selling price"), Ok(Decimal::ONE));
    }

    #[test]
    fn test_fixable_errors_are_validation() {
        assert!(PaymentError::InvalidRate.is_validation());
        assert!(PaymentError::Overflow { context: "x".into() }.is_validation());
        assert!(!PaymentError::DivisionByZero { context: "x".into() }.is_validation());
        assert!(!PaymentError::SerializationError("x".into()).is_validation());
    }
}
