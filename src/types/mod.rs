// export modules
pub mod api;
pub mod config;
pub mod market;

pub use api::*;
pub use config::*;
pub use market::*;
