//! config/demo.rs Bundled storefront content.
//!
//! The browser build cannot read files from disk, so the catalog shown by
//! default is compiled into the binary. Native builds may override it with
//! `--catalog <path>`.

pub struct DemoConfig {
    /// Storefront catalog (JSON) embedded at compile time
    pub catalog_json: &'static str,
    /// Window / page title
    pub title: &'static str,
}

pub const DEMO: DemoConfig = DemoConfig {
    catalog_json: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/catalog.json")),
    title: "PC Builds - Configurations & Prices",
};
