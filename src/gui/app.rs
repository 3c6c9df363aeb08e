//! Revenue Calculator Main Application
//! Owns the navigator and dispatches screen actions.

use anyhow::Context;
use std::path::Path;

use crate::charts::LineChartRenderer;
use crate::config::AppConfig;
use crate::gui::calculator_screen::CalculatorAction;
use crate::gui::navigation::{Navigator, ScreenId};
use crate::gui::totals_screen::{self, TotalsAction};

/// Main application window.
pub struct RevenueApp {
    config: AppConfig,
    navigator: Navigator,
}

impl RevenueApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            config,
            navigator: Navigator::new(),
        }
    }

    fn set_window_title(&self, ctx: &egui::Context, screen: ScreenId) {
        let title = match screen {
            ScreenId::Calculator => self.config.window_title.as_str(),
            ScreenId::Totals => totals_screen::WINDOW_TITLE,
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
    }

    fn handle_calculator_action(&mut self, ctx: &egui::Context, action: CalculatorAction) {
        match action {
            CalculatorAction::Calculate => self.navigator.calculator.calculate(),
            CalculatorAction::OpenTotals => {
                let screen = self.navigator.open_totals(&self.config);
                self.set_window_title(ctx, screen);
            }
            CalculatorAction::None => {}
        }
    }

    fn handle_totals_action(&mut self, ctx: &egui::Context, action: TotalsAction) {
        match action {
            TotalsAction::ShowGraph => {
                if let Some(totals) = self.navigator.totals_mut() {
                    totals.show_graph();
                }
            }
            TotalsAction::Back => {
                let screen = self.navigator.go_back();
                self.set_window_title(ctx, screen);
            }
            TotalsAction::ExportPng => self.handle_export_png(),
            TotalsAction::None => {}
        }
    }

    fn open_exported(path: &Path) -> anyhow::Result<()> {
        open::that(path).with_context(|| format!("opening {}", path.display()))
    }

    /// Handle PNG export - render the open chart and write it where the user picks
    fn handle_export_png(&mut self) {
        let open_after_export = self.config.open_after_export;
        let Some(totals) = self.navigator.totals_mut() else {
            return;
        };
        let Some(series) = totals.chart.as_ref().map(|c| c.series.clone()) else {
            return;
        };

        // Ask user for output location
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("revenue_{}.png", series.year))
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match LineChartRenderer::save_png(&series, &output_path) {
            Ok(()) => {
                tracing::info!(path = %output_path.display(), "chart exported");
                totals.set_chart_status(format!("Saved {}", output_path.display()));
                if open_after_export {
                    if let Err(e) = Self::open_exported(&output_path) {
                        tracing::warn!(error = %format!("{e:#}"), "could not open exported chart");
                    }
                }
            }
            Err(e) => {
                tracing::error!(path = %output_path.display(), error = %e, "chart export failed");
                totals.set_chart_status(format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for RevenueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.navigator.current() {
            ScreenId::Calculator => {
                let action = egui::CentralPanel::default()
                    .frame(egui::Frame::none())
                    .show(ctx, |ui| self.navigator.calculator.show(ui))
                    .inner;
                self.handle_calculator_action(ctx, action);
            }
            ScreenId::Totals => {
                let mut action = TotalsAction::None;
                if let Some(totals) = self.navigator.totals_mut() {
                    action = egui::CentralPanel::default()
                        .frame(egui::Frame::none())
                        .show(ctx, |ui| totals.show(ui))
                        .inner;
                    if let TotalsAction::ExportPng = totals.show_chart_window(ctx) {
                        action = TotalsAction::ExportPng;
                    }
                }
                self.handle_totals_action(ctx, action);
            }
        }
    }
}
