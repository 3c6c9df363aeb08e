//! Monthly Revenue Table
//! Twelve editable revenue cells for a selected year, and the projection
//! of those cells into a chart series.

use serde::{Deserialize, Serialize};

/// Calendar months in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter axis label.
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Zero-based position in the year.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Which cell strings count as numbers when projecting to a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellPolicy {
    /// Only non-empty runs of ASCII digits count; everything else is 0.
    #[default]
    DigitsOnly,
    /// Any trimmed, finite decimal (negative included) counts.
    Decimal,
}

impl CellPolicy {
    pub fn coerce(&self, cell: &str) -> f64 {
        match self {
            CellPolicy::DigitsOnly => {
                if !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit()) {
                    cell.parse::<f64>().unwrap_or(0.0)
                } else {
                    0.0
                }
            }
            CellPolicy::Decimal => cell
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
        }
    }
}

/// Twelve (month, value) points for one year, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub year: i32,
    pub points: Vec<(Month, f64)>,
}

impl ChartSeries {
    pub fn legend_label(&self) -> String {
        format!("Year {}", self.year)
    }

    pub fn title(&self) -> String {
        format!("Revenue Trend for {}", self.year)
    }

    /// Points as `[x, y]` pairs with x = month index.
    pub fn xy(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|(month, value)| [month.index() as f64, *value])
            .collect()
    }

    /// Min and max of the values, padded so a flat series still has height.
    pub fn value_range(&self) -> (f64, f64) {
        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
                (lo.min(*v), hi.max(*v))
            });
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        let min = min.min(0.0);
        if (max - min).abs() < f64::EPSILON {
            (min, min + 1.0)
        } else {
            let pad = (max - min) * 0.05;
            (min - if min < 0.0 { pad } else { 0.0 }, max + pad)
        }
    }
}

/// Revenue cells for the twelve months of the selected year.
///
/// Cells are free text as typed by the user. Changing the year keeps
/// the cell contents since nothing is stored per year.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenueTable {
    year: i32,
    cells: [String; 12],
}

impl MonthlyRevenueTable {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            cells: Default::default(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    #[allow(dead_code)]
    pub fn cell(&self, month: Month) -> &str {
        &self.cells[month.index()]
    }

    pub fn cell_mut(&mut self, month: Month) -> &mut String {
        &mut self.cells[month.index()]
    }

    /// Set a cell by zero-based row. Rows past December are ignored.
    #[allow(dead_code)]
    pub fn set_cell(&mut self, row: usize, value: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(row) {
            *cell = value.into();
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (Month, &str)> {
        Month::ALL
            .iter()
            .zip(self.cells.iter())
            .map(|(month, cell)| (*month, cell.as_str()))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Coerce every cell to a number under `policy`, in calendar order.
    pub fn project(&self, policy: CellPolicy) -> ChartSeries {
        ChartSeries {
            year: self.year,
            points: self
                .rows()
                .map(|(month, cell)| (month, policy.coerce(cell)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(series: &ChartSeries) -> Vec<f64> {
        series.points.iter().map(|(_, v)| *v).collect()
    }

    #[test]
    fn new_table_has_twelve_empty_rows_in_order() {
        let table = MonthlyRevenueTable::new(2020);
        let rows: Vec<(Month, &str)> = table.rows().collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0], (Month::January, ""));
        assert_eq!(rows[11], (Month::December, ""));
        assert_eq!(table.filled_count(), 0);
    }

    #[test]
    fn empty_table_projects_twelve_zeros() {
        let series = MonthlyRevenueTable::new(2015).project(CellPolicy::DigitsOnly);
        assert_eq!(series.year, 2015);
        assert_eq!(values(&series), vec![0.0; 12]);
        let labels: Vec<&str> = series.points.iter().map(|(m, _)| m.short_name()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn partially_filled_table_keeps_calendar_order() {
        let mut table = MonthlyRevenueTable::new(2023);
        table.set_cell(0, "100");
        table.set_cell(5, "250");
        *table.cell_mut(Month::December) = "75".to_string();

        let series = table.project(CellPolicy::DigitsOnly);
        assert_eq!(series.points.len(), 12);
        assert_eq!(
            values(&series),
            vec![100.0, 0.0, 0.0, 0.0, 0.0, 250.0, 0.0, 0.0, 0.0, 0.0, 0.0, 75.0]
        );
    }

    #[test]
    fn digits_only_zeroes_decimals_negatives_and_padding() {
        let policy = CellPolicy::DigitsOnly;
        assert_eq!(policy.coerce("1200"), 1200.0);
        assert_eq!(policy.coerce("12.50"), 0.0);
        assert_eq!(policy.coerce("-40"), 0.0);
        assert_eq!(policy.coerce(" 40"), 0.0);
        assert_eq!(policy.coerce("abc"), 0.0);
        assert_eq!(policy.coerce(""), 0.0);
    }

    #[test]
    fn decimal_policy_keeps_decimals_and_negatives() {
        let policy = CellPolicy::Decimal;
        assert_eq!(policy.coerce("12.50"), 12.5);
        assert_eq!(policy.coerce("-40"), -40.0);
        assert_eq!(policy.coerce(" 40 "), 40.0);
        assert_eq!(policy.coerce("inf"), 0.0);
        assert_eq!(policy.coerce("NaN"), 0.0);
        assert_eq!(policy.coerce("n/a"), 0.0);
    }

    #[test]
    fn changing_year_keeps_cells() {
        let mut table = MonthlyRevenueTable::new(2015);
        table.set_cell(2, "500");
        table.set_year(2024);
        assert_eq!(table.year(), 2024);
        assert_eq!(table.cell(Month::March), "500");
        assert_eq!(table.project(CellPolicy::DigitsOnly).year, 2024);
    }

    #[test]
    fn set_cell_out_of_range_is_ignored() {
        let mut table = MonthlyRevenueTable::new(2015);
        table.set_cell(12, "999");
        assert_eq!(table.filled_count(), 0);
    }

    #[test]
    fn series_labels_and_range() {
        let mut table = MonthlyRevenueTable::new(2019);
        table.set_cell(1, "200");
        let series = table.project(CellPolicy::DigitsOnly);
        assert_eq!(series.legend_label(), "Year 2019");
        assert_eq!(series.title(), "Revenue Trend for 2019");
        assert_eq!(series.xy()[1], [1.0, 200.0]);
        assert_eq!(series.value_range(), (0.0, 210.0));

        let flat = MonthlyRevenueTable::new(2019).project(CellPolicy::DigitsOnly);
        assert_eq!(flat.value_range(), (0.0, 1.0));
    }
}
