/// All user-facing strings of the storefront UI
pub struct UiText {
    pub currency_heading: &'static str,
    pub currency_toggle_hint: &'static str,
    pub currency_selector_hint: &'static str,
    pub rates_heading: &'static str,
    pub rates_refresh_button: &'static str,
    pub rates_resync_button: &'static str,
    pub rates_resync_hint: &'static str,
    pub catalog_heading: &'static str,
    pub catalog_empty: &'static str,
    pub column_product: &'static str,
    pub column_specs: &'static str,
    pub column_price: &'static str,
    pub invalid_price: &'static str,
    pub status_active_prefix: &'static str,
    pub shortcuts_hint: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    currency_heading: "Currency",
    currency_toggle_hint: "Click to cycle KZT → RUB → USD",
    currency_selector_hint: "Pick the currency prices are shown in",
    rates_heading: "Exchange rates",
    rates_refresh_button: "🔄 Refresh rates",
    rates_resync_button: "↻ Re-sync prices",
    rates_resync_hint: "Apply the latest rates to every price",
    catalog_heading: "Configurations",
    catalog_empty: "No products in this catalog",
    column_product: "Build",
    column_specs: "Specs",
    column_price: "Price",
    invalid_price: "—",
    status_active_prefix: "Showing prices in",
    shortcuts_hint: "Press C to cycle currencies",
};
