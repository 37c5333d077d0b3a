pub mod carbon_estimate;
pub mod health;
pub mod server;
