use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::PaymentResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Whole-month counts (loan and lease terms)
pub type Months = u32;

/// Envelope returned by [`crate::calculate`]: the result plus the
/// assumptions it was computed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

impl<T: Serialize> ComputationOutput<T> {
    /// Wrap `result`, stamping the elapsed time since `started`. Fails when
    /// `assumptions` cannot be rendered as JSON.
    pub fn wrap(
        methodology: &str,
        assumptions: &impl Serialize,
        warnings: Vec<String>,
        started: Instant,
        result: T,
    ) -> PaymentResult<Self> {
        Ok(ComputationOutput {
            result,
            methodology: methodology.to_string(),
            assumptions: serde_json::to_value(assumptions)?,
            warnings,
            metadata: ComputationMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                computation_time_us: started.elapsed().as_micros() as u64,
                precision: "rust_decimal_128bit".to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaymentError;
    use serde::ser::{Error as _, Serializer};

    struct BrokenSchedule;

    impl Serialize for BrokenSchedule {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("fee schedule unavailable"))
        }
    }

    #[test]
    fn test_wrap_records_assumptions() {
        let output = ComputationOutput::wrap(
            "test",
            &serde_json::json!({ "doc_fee": "387" }),
            vec![],
            Instant::now(),
            Decimal::ONE,
        )
        .unwrap();
        assert_eq!(output.assumptions["doc_fee"], "387");
        assert_eq!(output.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_wrap_propagates_assumption_failure() {
        let err = ComputationOutput::wrap("test", &BrokenSchedule, vec![], Instant::now(), Decimal::ONE)
            .unwrap_err();
        match err {
            PaymentError::SerializationError(msg) => assert!(msg.contains("fee schedule unavailable")),
            other => panic!("expected serialization error, got {other:?}"),
        }
    }
}
