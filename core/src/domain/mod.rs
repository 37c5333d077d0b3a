pub mod carbon_estimate;
pub mod common;
