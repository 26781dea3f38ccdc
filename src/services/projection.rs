// src/services/projection.rs
use log::debug;

use crate::models::{ForecastError, ProjectionRequest, ProjectionResult, SummaryMetrics};
use crate::services::registry;

/// Offset added to the effective growth rate for the best-case trajectory.
pub const BEST_CASE_SPREAD: f64 = 0.05;
/// Offset subtracted for the worst-case trajectory. The worst-case rate is
/// floored at zero, so an adverse scenario/industry combination degenerates
/// to flat revenue rather than compounding decline.
pub const WORST_CASE_SPREAD: f64 = 0.08;

fn calculate_cagr(start_value: f64, end_value: f64, years: f64) -> f64 {
    if start_value <= 0.0 || end_value <= 0.0 || years <= 0.0 {
        0.0
    } else {
        (end_value / start_value).powf(1.0 / years) - 1.0
    }
}

/// Compute the three compound-growth trajectories and the summary metrics
/// for one request. Pure and stateless; identical input yields identical
/// output.
pub fn project(
    request: &ProjectionRequest,
) -> Result<(ProjectionResult, SummaryMetrics), ForecastError> {
    if request.starting_revenue <= 0.0 {
        return Err(ForecastError::InvalidInput(format!(
            "starting_revenue must be positive, got {}",
            request.starting_revenue
        )));
    }
    // CAGR divides by horizon_years - 1, so a single-point series is invalid.
    if request.horizon_years < 2 {
        return Err(ForecastError::InvalidInput(format!(
            "horizon_years must be at least 2, got {}",
            request.horizon_years
        )));
    }

    let scenario = registry::lookup_scenario(&request.scenario)?;
    let industry = registry::lookup_industry(&request.industry);

    let effective_growth = scenario.base_growth_rate * industry.growth_multiplier;
    debug!(
        "Effective growth for scenario '{}', industry '{}': {}",
        scenario.id, industry.industry, effective_growth
    );

    let best_rate = 1.0 + effective_growth + BEST_CASE_SPREAD;
    let expected_rate = 1.0 + effective_growth;
    let worst_rate = 1.0 + (effective_growth - WORST_CASE_SPREAD).max(0.0);

    let mut years = Vec::with_capacity(request.horizon_years);
    let mut best_case = Vec::with_capacity(request.horizon_years);
    let mut expected_case = Vec::with_capacity(request.horizon_years);
    let mut worst_case = Vec::with_capacity(request.horizon_years);

    for i in 0..request.horizon_years {
        years.push(request.start_year + i as i32);
        best_case.push(request.starting_revenue * best_rate.powi(i as i32));
        expected_case.push(request.starting_revenue * expected_rate.powi(i as i32));
        worst_case.push(request.starting_revenue * worst_rate.powi(i as i32));
    }

    let final_expected = expected_case[request.horizon_years - 1];
    let summary = SummaryMetrics {
        total_growth_pct: (final_expected / request.starting_revenue - 1.0) * 100.0,
        final_expected_revenue: final_expected,
        cagr: calculate_cagr(
            request.starting_revenue,
            final_expected,
            (request.horizon_years - 1) as f64,
        ),
    };

    let result = ProjectionResult {
        years,
        best_case,
        expected_case,
        worst_case,
    };

    Ok((result, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_HORIZON_YEARS, DEFAULT_START_YEAR};

    fn request(
        starting_revenue: f64,
        scenario: &str,
        industry: &str,
        horizon_years: usize,
    ) -> ProjectionRequest {
        ProjectionRequest {
            starting_revenue,
            scenario: scenario.to_string(),
            industry: industry.to_string(),
            horizon_years,
            start_year: DEFAULT_START_YEAR,
        }
    }

    #[test]
    fn all_trajectories_start_at_the_starting_revenue() {
        let (result, _) = project(&request(500_000.0, "normal", "Technology", 16)).unwrap();
        assert_eq!(result.years[0], DEFAULT_START_YEAR);
        assert_eq!(result.expected_case[0], 500_000.0);
        assert_eq!(result.best_case[0], 500_000.0);
        assert_eq!(result.worst_case[0], 500_000.0);
    }

    #[test]
    fn sequences_share_the_horizon_length() {
        let (result, _) = project(&request(250_000.0, "growth", "Retail", 10)).unwrap();
        assert_eq!(result.years.len(), 10);
        assert_eq!(result.best_case.len(), 10);
        assert_eq!(result.expected_case.len(), 10);
        assert_eq!(result.worst_case.len(), 10);
        assert_eq!(*result.years.last().unwrap(), DEFAULT_START_YEAR + 9);
    }

    #[test]
    fn trajectories_are_ordered_when_worst_rate_stays_positive() {
        // growth * Technology: effective growth 0.195, well above the
        // worst-case spread of 0.08.
        let (result, _) = project(&request(500_000.0, "growth", "Technology", 16)).unwrap();
        for i in 0..16 {
            assert!(result.worst_case[i] <= result.expected_case[i]);
            assert!(result.expected_case[i] <= result.best_case[i]);
        }
    }

    #[test]
    fn identical_requests_yield_identical_output() {
        let req = request(750_000.0, "normal", "Healthcare", 16);
        let first = project(&req).unwrap();
        let second = project(&req).unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn two_point_horizon_is_the_smallest_valid_one() {
        let (result, summary) = project(&request(100_000.0, "normal", "Services", 2)).unwrap();
        assert_eq!(result.expected_case.len(), 2);
        // With two points the CAGR equals the effective growth rate.
        assert!((summary.cagr - 0.08).abs() < 1e-12);
    }

    #[test]
    fn degenerate_horizons_are_rejected() {
        for horizon in [0, 1] {
            let err = project(&request(100_000.0, "normal", "Services", horizon)).unwrap_err();
            assert!(matches!(err, ForecastError::InvalidInput(_)));
        }
    }

    #[test]
    fn non_positive_revenue_is_rejected() {
        for revenue in [0.0, -5_000.0] {
            let err = project(&request(revenue, "normal", "Services", 16)).unwrap_err();
            assert!(matches!(err, ForecastError::InvalidInput(_)));
        }
    }

    #[test]
    fn unknown_scenario_fails_unknown_industry_does_not() {
        let err = project(&request(100_000.0, "stagflation", "Technology", 16)).unwrap_err();
        assert!(matches!(err, ForecastError::UnknownIdentifier(_)));

        // Unknown industry resolves to the neutral multiplier, so the
        // expected case grows at the bare scenario rate.
        let (result, _) = project(&request(100_000.0, "normal", "Aerospace", 16)).unwrap();
        assert!((result.expected_case[1] - 108_000.0).abs() < 1e-6);
    }

    #[test]
    fn normal_technology_reference_projection() {
        let (result, summary) =
            project(&request(500_000.0, "normal", "Technology", DEFAULT_HORIZON_YEARS)).unwrap();

        // effective growth = 0.08 * 1.3 = 0.104
        let expected_final = 500_000.0 * 1.104f64.powi(15);
        assert!((result.expected_case[15] - expected_final).abs() < 1e-6);
        // Landmark from the reference deployment, within 1%.
        assert!((result.expected_case[15] - 2_189_000.0).abs() / 2_189_000.0 < 0.01);

        assert!((summary.final_expected_revenue - expected_final).abs() < 1e-6);
        assert!(
            (summary.total_growth_pct - (expected_final / 500_000.0 - 1.0) * 100.0).abs() < 1e-9
        );
        assert!((summary.cagr - 0.104).abs() < 1e-9);
    }

    #[test]
    fn recession_retail_worst_case_is_flat() {
        // effective growth = 0.02 * 0.9 = 0.018; the worst-case rate floors
        // at zero, so the worst trajectory never moves.
        let (result, _) =
            project(&request(1_000_000.0, "recession", "Retail", DEFAULT_HORIZON_YEARS)).unwrap();
        for value in &result.worst_case {
            assert_eq!(*value, 1_000_000.0);
        }
        // Expected and best cases still grow past the flat worst case.
        assert!(result.expected_case[15] > 1_000_000.0);
        assert!(result.best_case[15] > result.expected_case[15]);
    }
}
