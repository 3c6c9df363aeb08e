//! Calculator Screen
//! Fixed costs and amount made inputs with a revenue result label.

use crate::gui::style::{self, BUTTON_WIDTH, RED, PURPLE};
use crate::revenue::calculate;

const INITIAL_RESULT: &str = "Revenue:";
const INPUT_WIDTH: f32 = 220.0;

/// Primary screen state. Survives trips to the totals screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorScreen {
    pub fixed_costs: String,
    pub amount_made: String,
    pub result_label: String,
}

impl Default for CalculatorScreen {
    fn default() -> Self {
        Self {
            fixed_costs: String::new(),
            amount_made: String::new(),
            result_label: INITIAL_RESULT.to_string(),
        }
    }
}

impl CalculatorScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the result label from the current inputs.
    pub fn calculate(&mut self) {
        self.result_label = calculate(&self.fixed_costs, &self.amount_made);
    }

    /// Draw the screen
    pub fn show(&mut self, ui: &mut egui::Ui) -> CalculatorAction {
        let mut action = CalculatorAction::None;

        style::paint_diagonal_gradient(ui.painter(), ui.max_rect(), RED, PURPLE);

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            ui.label(style::white_text("Fixed Costs:"));
            ui.add_space(4.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.fixed_costs)
                    .id_salt("fixed_costs")
                    .desired_width(INPUT_WIDTH),
            );

            ui.add_space(16.0);

            ui.label(style::white_text("Amount Made:"));
            ui.add_space(4.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.amount_made)
                    .id_salt("amount_made")
                    .desired_width(INPUT_WIDTH),
            );

            ui.add_space(20.0);

            if style::purple_button(ui, "Calculate Revenue", Some(BUTTON_WIDTH)).clicked() {
                action = CalculatorAction::Calculate;
            }
            ui.add_space(10.0);
            if style::purple_button(ui, "Revenue Totals", Some(BUTTON_WIDTH)).clicked() {
                action = CalculatorAction::OpenTotals;
            }

            ui.add_space(20.0);
            ui.label(style::white_text(&self.result_label));
        });

        action
    }
}

/// Actions triggered by the calculator screen
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorAction {
    None,
    Calculate,
    OpenTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_placeholder_label() {
        let screen = CalculatorScreen::new();
        assert_eq!(screen.result_label, "Revenue:");
        assert!(screen.fixed_costs.is_empty());
    }

    #[test]
    fn calculate_updates_label() {
        let mut screen = CalculatorScreen::new();
        screen.fixed_costs = "100".to_string();
        screen.amount_made = "250".to_string();
        screen.calculate();
        assert_eq!(screen.result_label, "Revenue: $150.00");

        screen.amount_made = "lots".to_string();
        screen.calculate();
        assert_eq!(screen.result_label, "Invalid input!");
    }
}
