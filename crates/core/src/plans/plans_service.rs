use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::Result;
use crate::plans::plans_model::PlanExtraction;
use crate::plans::plans_traits::{MealPlanGeneratorTrait, PlanServiceTrait};
use crate::preferences::UserPreferences;

/// Service coordinating plan generation.
///
/// Validation happens here, before the generator runs: a request with a
/// missing required field is rejected without any network activity.
pub struct PlanService {
    generator: Arc<dyn MealPlanGeneratorTrait>,
}

impl PlanService {
    pub fn new(generator: Arc<dyn MealPlanGeneratorTrait>) -> Self {
        PlanService { generator }
    }
}

#[async_trait]
impl PlanServiceTrait for PlanService {
    async fn generate_plan(&self, preferences: &UserPreferences) -> Result<PlanExtraction> {
        preferences.validate()?;
        debug!(
            "Requesting meal plan (goal: {}, activity: {})",
            preferences.goal, preferences.activity_level
        );
        self.generator.generate(preferences).await
    }
}
