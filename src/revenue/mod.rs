//! Revenue module - calculation and monthly table

mod calculator;
mod table;

pub use calculator::calculate;
pub use table::{CellPolicy, ChartSeries, Month, MonthlyRevenueTable};
