//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::RevenueChartPlotter;
pub use renderer::{LineChartRenderer, RenderError};
