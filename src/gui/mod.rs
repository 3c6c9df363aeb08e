//! GUI module - User interface components

mod app;
mod calculator_screen;
mod navigation;
mod style;
mod totals_screen;

pub use app::RevenueApp;
