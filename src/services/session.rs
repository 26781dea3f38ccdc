// src/services/session.rs
use log::info;
use tokio::sync::RwLock;

use crate::models::{BusinessProfile, ForecastError, SessionContext};
use crate::services::registry;

/// Holds the per-session selections behind a lock so warp handlers can share
/// it across worker threads. Mutations only happen on the discrete select /
/// submit actions below; the projection engine never reads this store.
pub struct SessionStore {
    context: RwLock<SessionContext>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            context: RwLock::new(SessionContext::default()),
        }
    }

    pub async fn context(&self) -> SessionContext {
        self.context.read().await.clone()
    }

    pub async fn select_scenario(&self, scenario: &str) -> Result<SessionContext, ForecastError> {
        // Validate against the registry before touching the context.
        let profile = registry::lookup_scenario(scenario)?;

        let mut context = self.context.write().await;
        context.current_scenario = profile.id;
        info!("Session scenario set to '{}'", context.current_scenario);
        Ok(context.clone())
    }

    pub async fn submit_business_profile(
        &self,
        profile: BusinessProfile,
    ) -> Result<SessionContext, ForecastError> {
        if profile.annual_revenue <= 0.0 {
            return Err(ForecastError::InvalidInput(format!(
                "annual_revenue must be positive, got {}",
                profile.annual_revenue
            )));
        }
        if profile.annual_expenses < 0.0 {
            return Err(ForecastError::InvalidInput(format!(
                "annual_expenses must not be negative, got {}",
                profile.annual_expenses
            )));
        }

        let mut context = self.context.write().await;
        info!(
            "Business profile submitted for '{}' ({})",
            profile.business_name, profile.industry
        );
        context.business = Some(profile);
        Ok(context.clone())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> BusinessProfile {
        BusinessProfile {
            business_name: "Acme Web Design".to_string(),
            industry: "Technology".to_string(),
            annual_revenue: 500_000.0,
            annual_expenses: 350_000.0,
            employees: 8,
        }
    }

    #[tokio::test]
    async fn starts_on_the_normal_scenario() {
        let store = SessionStore::new();
        let context = store.context().await;
        assert_eq!(context.current_scenario, "normal");
        assert!(context.business.is_none());
    }

    #[tokio::test]
    async fn scenario_selection_is_validated() {
        let store = SessionStore::new();

        let context = store.select_scenario("recession").await.unwrap();
        assert_eq!(context.current_scenario, "recession");

        let err = store.select_scenario("boom").await.unwrap_err();
        assert!(matches!(err, ForecastError::UnknownIdentifier(_)));
        // A rejected selection leaves the context untouched.
        assert_eq!(store.context().await.current_scenario, "recession");
    }

    #[tokio::test]
    async fn business_profile_submission_is_validated() {
        let store = SessionStore::new();

        let mut bad = sample_profile();
        bad.annual_revenue = 0.0;
        let err = store.submit_business_profile(bad).await.unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput(_)));
        assert!(store.context().await.business.is_none());

        let context = store.submit_business_profile(sample_profile()).await.unwrap();
        let business = context.business.unwrap();
        assert_eq!(business.business_name, "Acme Web Design");
        assert!((business.profit_margin_pct() - 30.0).abs() < 1e-9);
    }
}
