// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizon used by the interactive preview: 16 yearly points inclusive of
/// the starting year.
pub const DEFAULT_HORIZON_YEARS: usize = 16;
pub const DEFAULT_START_YEAR: i32 = 2025;

fn default_horizon_years() -> usize {
    DEFAULT_HORIZON_YEARS
}

fn default_start_year() -> i32 {
    DEFAULT_START_YEAR
}

/// A named macro-economic regime with its base annual growth rate.
/// `volatility` is carried as metadata only; the trajectory formula does not
/// consume it.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioProfile {
    pub id: String,
    pub base_growth_rate: f64,
    pub volatility: f64,
}

/// Sector adjustment applied multiplicatively to the scenario's base rate.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryProfile {
    pub industry: String,
    pub growth_multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub starting_revenue: f64,
    pub scenario: String,
    pub industry: String,
    #[serde(default = "default_horizon_years")]
    pub horizon_years: usize,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
}

/// Three compound-growth trajectories, one value per projected year.
/// All four sequences share the length `horizon_years` of the request that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub years: Vec<i32>,
    pub best_case: Vec<f64>,
    pub expected_case: Vec<f64>,
    pub worst_case: Vec<f64>,
}

/// Derived solely from the expected trajectory. `cagr` is a fraction
/// (0.104 means 10.4% per year).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_growth_pct: f64,
    pub final_expected_revenue: f64,
    pub cagr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_name: String,
    pub industry: String,
    pub annual_revenue: f64,
    pub annual_expenses: f64,
    pub employees: u32,
}

impl BusinessProfile {
    pub fn profit_margin_pct(&self) -> f64 {
        if self.annual_revenue > 0.0 {
            (self.annual_revenue - self.annual_expenses) / self.annual_revenue * 100.0
        } else {
            0.0
        }
    }
}

/// Per-session selections, mutated only by discrete select/submit actions.
#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub current_scenario: String,
    pub business: Option<BusinessProfile>,
}

impl Default for SessionContext {
    fn default() -> Self {
        SessionContext {
            current_scenario: "normal".to_string(),
            business: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    InvalidInput(String),
    UnknownIdentifier(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForecastError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ForecastError::UnknownIdentifier(msg) => write!(f, "unknown identifier: {}", msg),
        }
    }
}

impl std::error::Error for ForecastError {}
