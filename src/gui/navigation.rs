//! Screen navigation between the calculator and the totals screen.
//!
//! The calculator lives for the whole session. A totals screen is built on
//! every visit and keeps only a [`ScreenHandle`] to find its way back.

use crate::config::AppConfig;
use crate::gui::calculator_screen::CalculatorScreen;
use crate::gui::totals_screen::TotalsScreen;

/// Non-owning reference to a screen held by the [`Navigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenHandle(u32);

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Calculator,
    Totals,
}

pub struct Navigator {
    pub calculator: CalculatorScreen,
    calculator_handle: ScreenHandle,
    totals: Option<TotalsScreen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            calculator: CalculatorScreen::new(),
            calculator_handle: ScreenHandle(1),
            totals: None,
        }
    }

    pub fn current(&self) -> ScreenId {
        if self.totals.is_some() {
            ScreenId::Totals
        } else {
            ScreenId::Calculator
        }
    }

    pub fn calculator_handle(&self) -> ScreenHandle {
        self.calculator_handle
    }

    #[allow(dead_code)]
    pub fn totals(&self) -> Option<&TotalsScreen> {
        self.totals.as_ref()
    }

    pub fn totals_mut(&mut self) -> Option<&mut TotalsScreen> {
        self.totals.as_mut()
    }

    /// Hide the calculator and open a fresh totals screen.
    pub fn open_totals(&mut self, config: &AppConfig) -> ScreenId {
        if self.totals.is_some() {
            tracing::debug!("totals screen already open");
            return self.current();
        }
        self.totals = Some(TotalsScreen::new(Some(self.calculator_handle()), config));
        tracing::debug!("calculator -> totals");
        self.current()
    }

    /// Close the totals screen and show the calculator it came from.
    ///
    /// A totals screen without a valid back handle stays open and the
    /// failure is only logged.
    pub fn go_back(&mut self) -> ScreenId {
        let Some(totals) = &self.totals else {
            return self.current();
        };

        match totals.back_handle() {
            Some(handle) if handle == self.calculator_handle() => {
                self.totals = None;
                tracing::debug!("totals -> calculator");
            }
            Some(handle) => {
                tracing::warn!(?handle, "back handle does not match the calculator screen");
            }
            None => {
                tracing::warn!("calculator screen reference missing, staying on totals");
            }
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_calculator() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), ScreenId::Calculator);
        assert!(nav.totals().is_none());
    }

    #[test]
    fn round_trip_preserves_calculator_state() {
        let config = AppConfig::default();
        let mut nav = Navigator::new();
        nav.calculator.fixed_costs = "100".to_string();
        nav.calculator.amount_made = "250".to_string();
        nav.calculator.calculate();
        let before = nav.calculator.clone();

        assert_eq!(nav.open_totals(&config), ScreenId::Totals);
        assert_eq!(
            nav.totals().and_then(|t| t.back_handle()),
            Some(nav.calculator_handle())
        );

        assert_eq!(nav.go_back(), ScreenId::Calculator);
        assert_eq!(nav.calculator, before);
        assert!(nav.totals().is_none());
    }

    #[test]
    fn each_visit_gets_a_fresh_table() {
        let config = AppConfig::default();
        let mut nav = Navigator::new();
        nav.open_totals(&config);
        if let Some(totals) = nav.totals_mut() {
            totals.table.set_cell(0, "500");
        }
        nav.go_back();

        nav.open_totals(&config);
        assert_eq!(nav.totals().map(|t| t.table.filled_count()), Some(0));
    }

    #[test]
    fn opening_twice_keeps_existing_totals() {
        let config = AppConfig::default();
        let mut nav = Navigator::new();
        nav.open_totals(&config);
        nav.totals_mut().unwrap().table.set_cell(1, "42");
        nav.open_totals(&config);
        assert_eq!(nav.totals().map(|t| t.table.filled_count()), Some(1));
    }

    #[test]
    fn missing_back_handle_stays_on_totals() {
        let mut nav = Navigator::new();
        nav.totals = Some(TotalsScreen::new(None, &AppConfig::default()));
        assert_eq!(nav.go_back(), ScreenId::Totals);
        assert!(nav.totals().is_some());
    }

    #[test]
    fn stale_back_handle_stays_on_totals() {
        let mut nav = Navigator::new();
        nav.totals = Some(TotalsScreen::new(
            Some(ScreenHandle(99)),
            &AppConfig::default(),
        ));
        assert_eq!(nav.go_back(), ScreenId::Totals);
    }

    #[test]
    fn back_on_calculator_is_a_no_op() {
        let mut nav = Navigator::new();
        assert_eq!(nav.go_back(), ScreenId::Calculator);
    }
}
