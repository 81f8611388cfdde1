// Domain types and value objects
pub mod currency;
pub mod format;

// Re-export commonly used types
pub use currency::Currency;
pub use format::{FormatPolicy, format_price, format_price_code};
