use eframe::{Frame, egui};
use std::fmt;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::{ControlEvent, PriceEngine, SyncReport};
use crate::models::Catalog;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::setup_custom_visuals;

/// Error types surfaced in the status bar
#[derive(Debug, Clone)]
pub enum AppError {
    /// The requested catalog could not be loaded; the embedded one is shown instead
    CatalogUnavailable(String),
    /// General error with a message
    General(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::CatalogUnavailable(msg) => write!(f, "Catalog unavailable: {}", msg),
            AppError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Which currency control the page offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlStyle {
    /// One button cycling through the currencies
    #[default]
    Toggle,
    /// One button per currency
    Selector,
}

pub struct CurrencyApp {
    pub(super) engine: PriceEngine,
    pub(super) catalog: Catalog,
    pub(super) control_style: ControlStyle,
    /// Set once at startup when the requested catalog could not be loaded
    pub(super) catalog_error: Option<AppError>,
    /// Outcome of the most recent sync; cleared by the next clean one
    pub(super) sync_error: Option<AppError>,
}

impl CurrencyApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        engine: PriceEngine,
        catalog: Catalog,
        control_style: ControlStyle,
        catalog_error: Option<AppError>,
    ) -> Self {
        Self::start(engine, catalog, control_style, catalog_error)
    }

    fn start(
        engine: PriceEngine,
        catalog: Catalog,
        control_style: ControlStyle,
        catalog_error: Option<AppError>,
    ) -> Self {
        let mut app = Self {
            engine,
            catalog,
            control_style,
            catalog_error,
            sync_error: None,
        };

        // Restore the saved currency on every tag and start a best-effort refresh
        let report = app.engine.start(&mut app.catalog);
        log::info!(
            "✅ Showing {} prices in {} ({} skipped)",
            report.updated,
            app.engine.active(),
            report.skipped
        );
        app.record_sync(&report);

        app
    }

    pub(super) fn handle_control(&mut self, event: ControlEvent) {
        let report = self.engine.apply_control(&mut self.catalog, event);
        self.record_sync(&report);
    }

    fn record_sync(&mut self, report: &SyncReport) {
        self.sync_error = match report.skipped {
            0 => None,
            skipped => Some(AppError::General(format!(
                "{} price(s) could not be converted",
                skipped
            ))),
        };
    }

    /// Errors to show in the status bar, oldest first
    pub(super) fn errors(&self) -> impl Iterator<Item = &AppError> {
        self.catalog_error.iter().chain(self.sync_error.iter())
    }

    pub(super) fn resync_prices(&mut self) {
        let active = self.engine.active();
        self.handle_control(ControlEvent::Select(active));
    }

    fn poll_rate_refresh(&mut self, ctx: &egui::Context) {
        if let Some(_success) = self.engine.poll_refresh() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_rate_updates {
                log::info!("Rate refresh finished (success: {})", _success);
            }
            // Tags already on screen keep the old rates until the next sync
            ctx.request_repaint();
        } else if self.engine.is_refreshing() {
            ctx.request_repaint_after(Duration::from_millis(UI_CONFIG.refresh_poll_ms));
        }
    }
}

impl eframe::App for CurrencyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_rate_refresh(ctx);
        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
