//! Revenue Calculator Module
//! Turns the two calculator text fields into a revenue figure or an error.

use std::fmt;
use thiserror::Error;

/// Which calculator field failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueField {
    FixedCosts,
    AmountMade,
}

impl fmt::Display for RevenueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevenueField::FixedCosts => write!(f, "fixed costs"),
            RevenueField::AmountMade => write!(f, "amount made"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevenueError {
    #[error("invalid {field}: {value:?} is not a number")]
    InvalidInput { field: RevenueField, value: String },
}

/// Raw text from the calculator fields.
#[derive(Debug, Clone, Copy)]
pub struct RevenueInput<'a> {
    pub fixed_costs: &'a str,
    pub amount_made: &'a str,
}

impl<'a> RevenueInput<'a> {
    pub fn new(fixed_costs: &'a str, amount_made: &'a str) -> Self {
        Self {
            fixed_costs,
            amount_made,
        }
    }
}

/// Outcome shown in the calculator's result label.
#[derive(Debug, Clone, PartialEq)]
pub enum RevenueResult {
    Value(f64),
    Invalid,
}

impl From<Result<f64, RevenueError>> for RevenueResult {
    fn from(result: Result<f64, RevenueError>) -> Self {
        match result {
            Ok(value) => RevenueResult::Value(value),
            Err(_) => RevenueResult::Invalid,
        }
    }
}

impl fmt::Display for RevenueResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevenueResult::Value(value) => write!(f, "Revenue: ${:.2}", value),
            RevenueResult::Invalid => write!(f, "Invalid input!"),
        }
    }
}

fn parse_field(value: &str, field: RevenueField) -> Result<f64, RevenueError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| RevenueError::InvalidInput {
            field,
            value: value.to_string(),
        })
}

/// Compute `amount_made - fixed_costs`. Negative revenue is allowed.
pub fn compute_revenue(input: &RevenueInput<'_>) -> Result<f64, RevenueError> {
    let fixed_costs = parse_field(input.fixed_costs, RevenueField::FixedCosts)?;
    let amount_made = parse_field(input.amount_made, RevenueField::AmountMade)?;
    Ok(amount_made - fixed_costs)
}

/// Label text for the given calculator inputs.
pub fn calculate(fixed_costs: &str, amount_made: &str) -> String {
    let input = RevenueInput::new(fixed_costs, amount_made);
    let result = compute_revenue(&input);
    match &result {
        Ok(revenue) => tracing::debug!(revenue, "revenue calculated"),
        Err(e) => tracing::debug!(error = %e, "revenue input rejected"),
    }
    RevenueResult::from(result).to_string()
}
