use eframe::egui::{
    CentralPanel, Context, Frame, Grid, Key, RichText, ScrollArea, SidePanel, TopBottomPanel,
};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::ControlEvent;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    CurrencySelectorPanel, CurrencyTogglePanel, Panel, RatesEvent, RatesPanel, status_color,
};
use crate::ui::utils::{section_heading, spaced_separator};

use super::app::{ControlStyle, CurrencyApp};

impl CurrencyApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let control_events = match self.control_style {
                    ControlStyle::Toggle => {
                        let label = self
                            .catalog
                            .currency_label
                            .clone()
                            .filter(|label| !label.is_empty())
                            .unwrap_or_else(|| self.engine.active().label());
                        CurrencyTogglePanel::new(&label).render(ui)
                    }
                    ControlStyle::Selector => {
                        CurrencySelectorPanel::new(self.engine.active()).render(ui)
                    }
                };

                spaced_separator(ui);

                let rates_events = RatesPanel::new(
                    self.engine.rates(),
                    self.engine.status(),
                    self.engine.is_refreshing(),
                )
                .render(ui);

                // Each activation is applied in full before the next one
                for event in control_events {
                    self.handle_control(event);
                }

                for event in rates_events {
                    match event {
                        RatesEvent::Refresh => {
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_ui_interactions {
                                log::info!("Manual rate refresh requested");
                            }
                            self.engine.start_refresh();
                        }
                        RatesEvent::Resync => self.resync_prices(),
                    }
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                section_heading(ui, UI_TEXT.catalog_heading);

                if self.catalog.products.is_empty() {
                    ui.label_subdued(UI_TEXT.catalog_empty);
                    return;
                }

                ScrollArea::vertical().id_salt("catalog").show(ui, |ui| {
                    Grid::new("catalog_grid")
                        .striped(true)
                        .num_columns(3)
                        .spacing([24.0, 8.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new(UI_TEXT.column_product).strong());
                            ui.label(RichText::new(UI_TEXT.column_specs).strong());
                            ui.label(RichText::new(UI_TEXT.column_price).strong());
                            ui.end_row();

                            for product in &self.catalog.products {
                                ui.label(RichText::new(&product.name).strong());
                                ui.label_subdued(&product.description);
                                let text = match product.price.text() {
                                    "" => UI_TEXT.invalid_price,
                                    text => text,
                                };
                                ui.label(
                                    RichText::new(text)
                                        .monospace()
                                        .color(UI_CONFIG.colors.price),
                                );
                                ui.end_row();
                            }
                        });
                });
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.metric(
                    UI_TEXT.status_active_prefix,
                    &self.engine.active().label(),
                    UI_CONFIG.colors.heading,
                );
                ui.separator();
                let status = self.engine.status();
                ui.label(RichText::new(status.describe()).small().color(status_color(status)));
                for error in self.errors() {
                    ui.separator();
                    ui.label_error(error.to_string());
                }
                ui.separator();
                ui.label_subdued(UI_TEXT.shortcuts_hint);
            });
        });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let typing = ctx.wants_keyboard_input();
        if !typing && ctx.input(|i| i.key_pressed(Key::C)) {
            self.handle_control(ControlEvent::Cycle);
        }
    }
}
