use async_trait::async_trait;

use crate::errors::Result;
use crate::plans::plans_model::PlanExtraction;
use crate::preferences::UserPreferences;

/// Trait for producing a meal plan from user preferences.
///
/// Implemented by the `ai` crate against the generative-language provider;
/// tests inject deterministic fakes. The implementation owns the full
/// prompt -> request -> extraction pipeline and hands back the typed
/// extraction outcome directly.
#[async_trait]
pub trait MealPlanGeneratorTrait: Send + Sync {
    async fn generate(&self, preferences: &UserPreferences) -> Result<PlanExtraction>;
}

/// Trait for plan service operations.
#[async_trait]
pub trait PlanServiceTrait: Send + Sync {
    /// Validate preferences and run the generation pipeline.
    async fn generate_plan(&self, preferences: &UserPreferences) -> Result<PlanExtraction>;
}
