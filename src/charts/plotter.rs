//! Chart Plotter Module
//! Interactive monthly revenue line chart using egui_plot.

use crate::revenue::{ChartSeries, Month};
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

pub const LINE_COLOR: Color32 = Color32::from_rgb(0, 0, 255); // Blue

const MARKER_RADIUS: f32 = 4.0;

/// Draws the revenue trend chart.
pub struct RevenueChartPlotter;

impl RevenueChartPlotter {
    /// Axis label for a grid mark, or nothing between months.
    pub fn month_label(value: f64) -> String {
        let rounded = value.round();
        if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        Month::ALL
            .get(rounded as usize)
            .map(|m| m.short_name().to_string())
            .unwrap_or_default()
    }

    /// Draw the line chart with circle markers for a series.
    pub fn draw_line_chart(ui: &mut egui::Ui, series: &ChartSeries, height: f32) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(series.title()).size(16.0).strong());
        });
        ui.add_space(6.0);

        let xy = series.xy();
        let label = series.legend_label();
        let (y_min, y_max) = series.value_range();

        Plot::new(format!("revenue_trend_{}", series.year))
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .include_x(-0.5)
            .include_x(11.5)
            .include_y(y_min)
            .include_y(y_max)
            .x_axis_label("Months")
            .y_axis_label("Revenue ($)")
            .x_axis_formatter(|mark, _range| Self::month_label(mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(xy.clone()))
                        .name(&label)
                        .color(LINE_COLOR)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(xy))
                        .name(&label)
                        .color(LINE_COLOR)
                        .radius(MARKER_RADIUS),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_on_whole_positions() {
        assert_eq!(RevenueChartPlotter::month_label(0.0), "Jan");
        assert_eq!(RevenueChartPlotter::month_label(11.0), "Dec");
    }

    #[test]
    fn no_label_between_or_outside_months() {
        assert_eq!(RevenueChartPlotter::month_label(0.5), "");
        assert_eq!(RevenueChartPlotter::month_label(-1.0), "");
        assert_eq!(RevenueChartPlotter::month_label(12.0), "");
    }
}
