pub mod cli;
pub mod config;
pub mod services;
pub mod types;

pub use services::*;
pub use types::*;
