pub mod form;
pub mod normalize;

pub use form::{FinanceForm, LeaseForm};
pub use normalize::{parse_int_only, parse_money, parse_percent};
