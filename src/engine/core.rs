use std::sync::Arc;

use poll_promise::Promise;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{CurrencyPreference, RateSource};
use crate::domain::{Currency, format_price};
use crate::models::{PriceBoard, RateTable};

use super::messages::{ControlEvent, RefreshOutcome, SyncReport};
use super::state::RateStatus;
use super::worker;

/// The rate-backed display synchronizer.
///
/// Owns the rate table, the active currency, the preference store and the
/// rate source. Constructed once at startup and driven from the UI thread.
pub struct PriceEngine {
    rates: RateTable,
    active: Currency,
    preference: CurrencyPreference,
    source: Arc<dyn RateSource>,
    refresh: Option<Promise<RefreshOutcome>>,
    status: RateStatus,
}

impl PriceEngine {
    /// Restores the preferred currency; rates start from the fallback table.
    pub fn new(preference: CurrencyPreference, source: Arc<dyn RateSource>) -> Self {
        let active = preference.load();
        Self {
            rates: RateTable::fallback(),
            active,
            preference,
            source,
            refresh: None,
            status: RateStatus::Fallback,
        }
    }

    /// Startup sequence: kick off a best-effort refresh, then render every
    /// tag with the restored currency using the rates available right now.
    pub fn start(&mut self, board: &mut dyn PriceBoard) -> SyncReport {
        self.start_refresh();
        self.sync_all(board, self.active)
    }

    pub fn active(&self) -> Currency {
        self.active
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn status(&self) -> &RateStatus {
        &self.status
    }

    pub fn preference(&self) -> &CurrencyPreference {
        &self.preference
    }

    pub fn convert(&self, amount: f64, target: Currency) -> f64 {
        self.rates.convert(amount, target)
    }

    pub fn format(&self, amount: f64, currency: Currency) -> String {
        format_price(amount, currency)
    }

    // --- RATE SOURCE ---

    /// Start a rate refresh unless one is already in flight.
    pub fn start_refresh(&mut self) {
        if self.refresh.is_some() {
            return;
        }
        self.refresh = Some(worker::spawn_refresh(
            Arc::clone(&self.source),
            self.rates.base(),
        ));
        self.status = RateStatus::Refreshing;
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_some()
    }

    /// Apply a finished refresh, if any. Returns `Some(success)` once.
    ///
    /// Already rendered tags are left as they are; the next sync picks up
    /// the new rates.
    pub fn poll_refresh(&mut self) -> Option<bool> {
        let promise = self.refresh.take()?;
        match promise.try_take() {
            Ok(outcome) => Some(self.apply_refresh(outcome)),
            Err(pending) => {
                self.refresh = Some(pending);
                None
            }
        }
    }

    /// Block until the in-flight refresh finishes and apply it.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait_for_refresh(&mut self) -> Option<bool> {
        let promise = self.refresh.take()?;
        Some(self.apply_refresh(promise.block_and_take()))
    }

    /// Fold a refresh result into the rate table. On failure the table is
    /// left exactly as it was.
    pub fn apply_refresh(&mut self, outcome: RefreshOutcome) -> bool {
        match outcome.result {
            Ok(live) => {
                let updated = self.rates.apply_live(&live.rates);
                self.status = RateStatus::Live {
                    source: outcome.source,
                    updated_at: chrono::Local::now(),
                };
                log::info!(
                    "Exchange rates updated from {} ({} currencies) in {:.2}s",
                    outcome.source,
                    updated,
                    outcome.elapsed.as_secs_f32()
                );
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_rate_updates {
                    for (currency, rate) in self.rates.iter() {
                        log::info!("  1 {} = {} {}", self.rates.base(), rate, currency);
                    }
                }
                true
            }
            Err(e) => {
                log::warn!(
                    "⚠️  Failed to fetch live rates from {}, keeping current rates: {}",
                    outcome.source,
                    e
                );
                self.status = RateStatus::Failed {
                    reason: e.to_string(),
                };
                false
            }
        }
    }

    // --- DISPLAY SYNC ---

    /// Rewrite every price tag on the board in `target`, then make `target`
    /// the active currency, persist it and refresh the label.
    ///
    /// Tags whose amount cannot be read are skipped and keep their text.
    pub fn sync_all(&mut self, board: &mut dyn PriceBoard, target: Currency) -> SyncReport {
        let mut report = SyncReport {
            currency: Some(target),
            ..Default::default()
        };

        for tag in board.price_tags() {
            let Some(amount) = tag.base_amount() else {
                log::warn!("Invalid price data: {:?}", tag.raw_base_amount());
                report.skipped += 1;
                continue;
            };

            let formatted = format_price(self.rates.convert(amount, target), target);
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_price_sync {
                log::info!(
                    "Converting {}{} to {}: {}",
                    amount,
                    self.rates.base().symbol(),
                    target,
                    formatted
                );
            }
            tag.set_display(formatted, target);
            report.updated += 1;
        }

        if report.updated == 0 && report.skipped == 0 {
            log::warn!("No price displays found on the page");
        }

        self.active = target;
        self.preference.save(target);

        if let Some(label) = board.currency_label() {
            *label = target.label();
            report.label_updated = true;
        }

        report
    }

    // --- CONTROL SURFACE ---

    pub fn toggle(&mut self, board: &mut dyn PriceBoard) -> SyncReport {
        self.sync_all(board, self.active.next())
    }

    pub fn select(&mut self, board: &mut dyn PriceBoard, currency: Currency) -> SyncReport {
        self.sync_all(board, currency)
    }

    pub fn apply_control(&mut self, board: &mut dyn PriceBoard, event: ControlEvent) -> SyncReport {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Currency control: {:?} (active {})", event, self.active);
        }
        match event {
            ControlEvent::Cycle => self.toggle(board),
            ControlEvent::Select(currency) => self.select(board, currency),
        }
    }
}
