//! Generator implementations of the core plan-generation trait.

use async_trait::async_trait;
use log::debug;

use nutrinest_core::errors::Result;
use nutrinest_core::plans::{MealPlanGeneratorTrait, PlanExtraction};
use nutrinest_core::preferences::UserPreferences;

use crate::client::GeminiClient;
use crate::extractor::extract_plan;
use crate::prompt::build_meal_plan_prompt;

/// Plan generator backed by the generative-language API.
///
/// Runs the whole pipeline in-process - prompt, request, extraction - and
/// hands the typed outcome straight back. The envelope never leaves this
/// function as a string.
pub struct GeminiPlanGenerator {
    client: GeminiClient,
}

impl GeminiPlanGenerator {
    pub fn new(client: GeminiClient) -> Self {
        GeminiPlanGenerator { client }
    }
}

#[async_trait]
impl MealPlanGeneratorTrait for GeminiPlanGenerator {
    async fn generate(&self, preferences: &UserPreferences) -> Result<PlanExtraction> {
        let prompt = build_meal_plan_prompt(preferences);
        let envelope = self.client.generate_content(&prompt).await?;
        let extraction = extract_plan(&envelope);
        debug!(
            "Plan extraction outcome: {}",
            match &extraction {
                PlanExtraction::Plan(_) => "plan",
                PlanExtraction::Malformed(_) => "malformed",
                PlanExtraction::Absent => "absent",
            }
        );
        Ok(extraction)
    }
}

// ============================================================================
// Fake generator for testing
// ============================================================================

/// A deterministic generator for tests: returns a fixed extraction outcome
/// without any network activity.
pub struct FakePlanGenerator {
    outcome: PlanExtraction,
}

impl FakePlanGenerator {
    /// A fake that yields the given outcome on every call.
    pub fn with_outcome(outcome: PlanExtraction) -> Self {
        FakePlanGenerator { outcome }
    }
}

#[async_trait]
impl MealPlanGeneratorTrait for FakePlanGenerator {
    async fn generate(&self, _preferences: &UserPreferences) -> Result<PlanExtraction> {
        Ok(self.outcome.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_generator_returns_fixed_outcome() {
        let generator = FakePlanGenerator::with_outcome(PlanExtraction::Absent);
        let outcome = generator
            .generate(&UserPreferences::default())
            .await
            .unwrap();
        assert_eq!(outcome, PlanExtraction::Absent);
    }
}
