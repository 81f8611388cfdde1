use chrono::{DateTime, Local};

/// Where the rates currently in use came from. Display only: conversion
/// treats every rate the same regardless of provenance.
#[derive(Debug, Clone, PartialEq)]
pub enum RateStatus {
    /// Compiled-in table, no refresh has succeeded yet
    Fallback,
    /// A refresh is in flight
    Refreshing,
    /// Last refresh succeeded
    Live {
        source: &'static str,
        updated_at: DateTime<Local>,
    },
    /// Last refresh failed; rates are whatever was held before
    Failed { reason: String },
}

impl RateStatus {
    pub fn describe(&self) -> String {
        match self {
            RateStatus::Fallback => "Rates: built-in fallback".to_string(),
            RateStatus::Refreshing => "Rates: refreshing…".to_string(),
            RateStatus::Live { source, updated_at } => {
                format!("Rates: live from {} at {}", source, updated_at.format("%H:%M:%S"))
            }
            RateStatus::Failed { reason } => format!("Rates: refresh failed ({})", reason),
        }
    }
}
