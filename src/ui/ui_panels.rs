use eframe::egui::{Button, RichText, Ui};
use strum::IntoEnumIterator;

use crate::domain::Currency;
use crate::engine::{ControlEvent, RateStatus};
use crate::models::RateTable;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, section_heading};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Single button that cycles through the currencies. Its caption is the
/// page's currency label.
pub struct CurrencyTogglePanel<'a> {
    label: &'a str,
}

impl<'a> CurrencyTogglePanel<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl<'a> Panel for CurrencyTogglePanel<'a> {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.currency_heading);

        let caption = format!("💱 {}", self.label);
        if ui.add(Button::new(RichText::new(caption).strong())).clicked() {
            events.push(ControlEvent::Cycle);
        }
        ui.label_subdued(UI_TEXT.currency_toggle_hint);

        ui.add_space(10.0);
        events
    }
}

/// One button per currency
pub struct CurrencySelectorPanel {
    active: Currency,
}

impl CurrencySelectorPanel {
    pub fn new(active: Currency) -> Self {
        Self { active }
    }
}

impl Panel for CurrencySelectorPanel {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.currency_heading);

        ui.horizontal(|ui| {
            for currency in Currency::iter() {
                let is_selected = currency == self.active;
                if ui.selectable_label(is_selected, currency.label()).clicked() {
                    events.push(ControlEvent::Select(currency));
                }
            }
        });
        ui.label_subdued(UI_TEXT.currency_selector_hint);

        ui.add_space(10.0);
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatesEvent {
    Refresh,
    Resync,
}

/// Current rate table, where it came from, and manual refresh controls
pub struct RatesPanel<'a> {
    rates: &'a RateTable,
    status: &'a RateStatus,
    refreshing: bool,
}

impl<'a> RatesPanel<'a> {
    pub fn new(rates: &'a RateTable, status: &'a RateStatus, refreshing: bool) -> Self {
        Self {
            rates,
            status,
            refreshing,
        }
    }
}

impl<'a> Panel for RatesPanel<'a> {
    type Event = RatesEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.rates_heading);

        ui.label(colored_subsection_heading(format!("1 {}", self.rates.base())));
        for (currency, rate) in self.rates.iter() {
            if currency == self.rates.base() {
                continue;
            }
            ui.metric(currency.code(), &format!("{}", rate), UI_CONFIG.colors.price);
        }

        ui.add_space(5.0);
        ui.label(RichText::new(self.status.describe()).small().color(status_color(self.status)));

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.refreshing, Button::new(UI_TEXT.rates_refresh_button))
                .clicked()
            {
                events.push(RatesEvent::Refresh);
            }
            if ui
                .button(UI_TEXT.rates_resync_button)
                .on_hover_text(UI_TEXT.rates_resync_hint)
                .clicked()
            {
                events.push(RatesEvent::Resync);
            }
        });
        if self.refreshing {
            ui.spinner();
        }

        ui.add_space(10.0);
        events
    }
}

pub fn status_color(status: &RateStatus) -> eframe::egui::Color32 {
    match status {
        RateStatus::Live { .. } => UI_CONFIG.colors.rate_live,
        RateStatus::Failed { .. } => UI_CONFIG.colors.rate_failed,
        RateStatus::Fallback | RateStatus::Refreshing => UI_CONFIG.colors.rate_fallback,
    }
}
