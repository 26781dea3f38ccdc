use bizvizion_backend::models::{ProjectionRequest, DEFAULT_HORIZON_YEARS, DEFAULT_START_YEAR};
use bizvizion_backend::services::{projection, registry};
use dotenv::dotenv;
use log::info;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Testing projection engine across all scenarios...");

    for scenario in registry::list_scenarios() {
        let request = ProjectionRequest {
            starting_revenue: 500_000.0,
            scenario: scenario.id.to_string(),
            industry: "Technology".to_string(),
            horizon_years: DEFAULT_HORIZON_YEARS,
            start_year: DEFAULT_START_YEAR,
        };

        let (result, summary) = projection::project(&request)?;

        info!("Scenario '{}' ({}):", scenario.id, scenario.description);
        info!(
            "  Years {} - {}",
            result.years[0],
            result.years[result.years.len() - 1]
        );
        info!(
            "  Final expected revenue: ${:.0}",
            summary.final_expected_revenue
        );
        info!("  Total growth: {:.1}%", summary.total_growth_pct);
        info!("  CAGR: {:.1}%", summary.cagr * 100.0);
        info!(
            "  Band at horizon: ${:.0} - ${:.0}",
            result.worst_case[result.worst_case.len() - 1],
            result.best_case[result.best_case.len() - 1]
        );
    }

    Ok(())
}
