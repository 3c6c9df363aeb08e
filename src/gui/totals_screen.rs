//! Totals Screen
//! Year selector, editable 12-month revenue table, and the chart window.

use crate::charts::RevenueChartPlotter;
use crate::config::AppConfig;
use crate::gui::navigation::ScreenHandle;
use crate::gui::style::{self, BUTTON_WIDTH, PURPLE, RED};
use crate::revenue::{CellPolicy, ChartSeries, MonthlyRevenueTable};
use egui::{Color32, ComboBox, RichText};

pub const WINDOW_TITLE: &str = "Monthly & Yearly Revenue";
const TABLE_MIN_WIDTH: f32 = 450.0;
const CELL_WIDTH: f32 = 220.0;
const CHART_HEIGHT: f32 = 320.0;

/// Chart snapshot taken when "Show Graph" was pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWindow {
    pub series: ChartSeries,
    pub status: Option<String>,
}

impl ChartWindow {
    pub fn new(series: ChartSeries) -> Self {
        Self {
            series,
            status: None,
        }
    }
}

/// Secondary screen. Created fresh on every visit, so the table
/// starts empty each time.
pub struct TotalsScreen {
    back: Option<ScreenHandle>,
    years: Vec<i32>,
    policy: CellPolicy,
    pub table: MonthlyRevenueTable,
    pub chart: Option<ChartWindow>,
}

impl TotalsScreen {
    pub fn new(back: Option<ScreenHandle>, config: &AppConfig) -> Self {
        Self {
            back,
            years: config.years().collect(),
            policy: config.chart_cell_policy,
            table: MonthlyRevenueTable::new(config.default_year),
            chart: None,
        }
    }

    /// Handle of the screen "Back" returns to.
    pub fn back_handle(&self) -> Option<ScreenHandle> {
        self.back
    }

    /// Snapshot the table into a chart and open the chart window.
    pub fn show_graph(&mut self) -> &ChartSeries {
        let series = self.table.project(self.policy);
        tracing::debug!(
            year = series.year,
            filled = self.table.filled_count(),
            "opening revenue chart"
        );
        &self.chart.insert(ChartWindow::new(series)).series
    }

    pub fn close_graph(&mut self) {
        self.chart = None;
    }

    pub fn set_chart_status(&mut self, status: impl Into<String>) {
        if let Some(chart) = &mut self.chart {
            chart.status = Some(status.into());
        }
    }

    /// Draw the screen
    pub fn show(&mut self, ui: &mut egui::Ui) -> TotalsAction {
        let mut action = TotalsAction::None;

        style::paint_vertical_gradient(ui.painter(), ui.max_rect(), RED, PURPLE);

        // The chart window stands in for a blocking plot window.
        let interactive = self.chart.is_none();

        ui.add_enabled_ui(interactive, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);

                let mut year = self.table.year();
                ComboBox::from_id_salt("year_selector")
                    .width(120.0)
                    .selected_text(year.to_string())
                    .show_ui(ui, |ui| {
                        for y in &self.years {
                            ui.selectable_value(&mut year, *y, y.to_string());
                        }
                    });
                if year != self.table.year() {
                    self.table.set_year(year);
                }

                ui.add_space(12.0);
                self.draw_table(ui);
                ui.add_space(16.0);

                if style::purple_button(ui, "Show Graph", Some(BUTTON_WIDTH)).clicked() {
                    action = TotalsAction::ShowGraph;
                }
                ui.add_space(10.0);
                if style::purple_button(ui, "Back", None).clicked() {
                    action = TotalsAction::Back;
                }
            });
        });

        action
    }

    fn draw_table(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(Color32::from_black_alpha(60))
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_min_width(TABLE_MIN_WIDTH);
                egui::Grid::new("monthly_revenue_table")
                    .striped(true)
                    .num_columns(2)
                    .min_col_width(150.0)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Month").strong().color(Color32::WHITE));
                        ui.label(RichText::new("Revenue ($)").strong().color(Color32::WHITE));
                        ui.end_row();

                        for month in crate::revenue::Month::ALL {
                            ui.label(RichText::new(month.name()).color(Color32::WHITE));
                            ui.add(
                                egui::TextEdit::singleline(self.table.cell_mut(month))
                                    .id_salt(("revenue_cell", month.index()))
                                    .desired_width(CELL_WIDTH),
                            );
                            ui.end_row();
                        }
                    });
            });
    }

    /// Draw the chart window if open. Closing it clears the snapshot.
    pub fn show_chart_window(&mut self, ctx: &egui::Context) -> TotalsAction {
        let mut action = TotalsAction::None;
        let Some(chart) = &self.chart else {
            return action;
        };

        let mut open = true;
        egui::Window::new(chart.series.title())
            .id(egui::Id::new("revenue_chart_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size([640.0, 460.0])
            .show(ctx, |ui| {
                RevenueChartPlotter::draw_line_chart(ui, &chart.series, CHART_HEIGHT);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("💾 Save PNG…").clicked() {
                        action = TotalsAction::ExportPng;
                    }
                    if let Some(status) = &chart.status {
                        let color = if status.starts_with("Error") {
                            Color32::from_rgb(220, 53, 69)
                        } else {
                            Color32::from_rgb(40, 167, 69)
                        };
                        ui.label(RichText::new(status).size(11.0).color(color));
                    }
                });
            });

        if !open {
            self.close_graph();
        }
        action
    }
}

/// Actions triggered by the totals screen
#[derive(Debug, Clone, PartialEq)]
pub enum TotalsAction {
    None,
    ShowGraph,
    Back,
    ExportPng,
}
