// src/services/registry.rs
use serde::Serialize;

use crate::models::{ForecastError, IndustryProfile, ScenarioProfile};

// (id, base annual growth rate, volatility, description)
const SCENARIOS: [(&str, f64, f64, &str); 3] = [
    ("normal", 0.08, 0.15, "Stable economic conditions, typical growth"),
    (
        "growth",
        0.15,
        0.12,
        "Economic expansion, increased consumer spending",
    ),
    ("recession", 0.02, 0.25, "Economic downturn, reduced spending"),
];

const INDUSTRY_MULTIPLIERS: [(&str, f64); 5] = [
    ("Technology", 1.3),
    ("Healthcare", 1.1),
    ("Retail", 0.9),
    ("Manufacturing", 1.0),
    ("Services", 1.0),
];

// Unlisted industries fall back to a neutral multiplier instead of failing;
// scenarios have no such fallback.
const DEFAULT_INDUSTRY_MULTIPLIER: f64 = 1.0;

pub fn lookup_scenario(id: &str) -> Result<ScenarioProfile, ForecastError> {
    SCENARIOS
        .iter()
        .find(|(name, ..)| *name == id)
        .map(|&(name, base_growth_rate, volatility, _)| ScenarioProfile {
            id: name.to_string(),
            base_growth_rate,
            volatility,
        })
        .ok_or_else(|| ForecastError::UnknownIdentifier(format!("scenario '{}'", id)))
}

pub fn lookup_industry(industry: &str) -> IndustryProfile {
    let growth_multiplier = INDUSTRY_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|&(_, multiplier)| multiplier)
        .unwrap_or(DEFAULT_INDUSTRY_MULTIPLIER);

    IndustryProfile {
        industry: industry.to_string(),
        growth_multiplier,
    }
}

#[derive(Debug, Serialize)]
pub struct ScenarioOverview {
    pub id: &'static str,
    pub base_growth_rate: f64,
    pub volatility: f64,
    pub description: &'static str,
}

pub fn list_scenarios() -> Vec<ScenarioOverview> {
    SCENARIOS
        .iter()
        .map(|&(id, base_growth_rate, volatility, description)| ScenarioOverview {
            id,
            base_growth_rate,
            volatility,
            description,
        })
        .collect()
}

pub fn list_industries() -> Vec<IndustryProfile> {
    INDUSTRY_MULTIPLIERS
        .iter()
        .map(|&(industry, growth_multiplier)| IndustryProfile {
            industry: industry.to_string(),
            growth_multiplier,
        })
        .collect()
}
