pub mod fees;
pub mod finance;
pub mod lease;
