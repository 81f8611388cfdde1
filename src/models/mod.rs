pub mod catalog;
pub mod price_tag;
pub mod rate_table;

// Re-export commonly used types
pub use catalog::{Catalog, Product};
pub use price_tag::{PriceBoard, PriceTag};
pub use rate_table::RateTable;
