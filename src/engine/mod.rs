pub mod core;
pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use core::PriceEngine;
pub use messages::{ControlEvent, RefreshOutcome, SyncReport};
pub use state::RateStatus;
