//! Configuration module for the currency toggle application.

pub mod demo;
pub mod persistence;
pub mod rates;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use demo::DEMO;
pub use persistence::PERSISTENCE;
pub use rates::{RATES, RatesConfig};
