//! Revenue Calculator - Fixed Costs, Revenue & Monthly Trend Viewer
//!
//! A Rust application for computing net revenue and charting monthly totals.

mod charts;
mod config;
mod gui;
mod logging;
mod revenue;

use config::AppConfig;
use eframe::egui;
use gui::RevenueApp;

fn main() -> eframe::Result<()> {
    logging::init_tracing();

    let config = AppConfig::load_or_default();
    tracing::info!(
        title = %config.window_title,
        years = ?config.years(),
        policy = ?config.chart_cell_policy,
        "starting revenue calculator"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.window_title.as_str()),
        ..Default::default()
    };

    // Run the application
    let app_name = config.window_title.clone();
    let result = eframe::run_native(
        &app_name,
        options,
        Box::new(|cc| Ok(Box::new(RevenueApp::new(cc, config)))),
    );
    tracing::info!("window closed");
    result
}
