pub mod calculator;
pub mod config;
pub mod error;
pub mod server;


pub use calculator::{CalculationRequest, Operation};
pub use config::Config;
pub use error::CalculateError;
