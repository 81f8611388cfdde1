use std::time::Duration;

use crate::data::{LiveRates, RateSourceError};
use crate::domain::Currency;

/// What a currency control asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Cycling toggle: advance to the next currency
    Cycle,
    /// Discrete selector: switch straight to this currency
    Select(Currency),
}

/// The result returned by the refresh task
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub source: &'static str,
    pub elapsed: Duration,
    pub result: Result<LiveRates, RateSourceError>,
}

/// Summary of one display sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub currency: Option<Currency>,
    pub updated: usize,
    pub skipped: usize,
    pub label_updated: bool,
}
