use log::warn;
use std::sync::Arc;

use nutrinest_ai::{GeminiClient, GeminiPlanGenerator};
use nutrinest_core::catalog::CategoryFilter;
use nutrinest_core::plans::{PlanExtraction, PlanService, PlanServiceTrait};
use nutrinest_core::preferences::UserPreferences;
use nutrinest_core::saved_meals::{NewSavedMeal, SaveOutcome};

use crate::context::ServiceContext;
use crate::render::render_plan;

/// Run the full generation flow: validate, request, extract, render.
///
/// A malformed or absent plan is not a hard failure - the reason is logged
/// and the static catalog is rendered instead, matching the app's silent
/// fallback. `save` holds 1-based indices of plan meals to persist in the
/// same invocation.
pub async fn generate(
    ctx: &ServiceContext,
    preferences: UserPreferences,
    save: &[usize],
) -> anyhow::Result<()> {
    let client = GeminiClient::from_env()?;
    let service = PlanService::new(Arc::new(GeminiPlanGenerator::new(client)));

    let plan = match service.generate_plan(&preferences).await? {
        PlanExtraction::Plan(plan) => plan,
        PlanExtraction::Malformed(reason) => {
            warn!("Failed to parse meal plan: {reason}");
            return fall_back_to_catalog(ctx);
        }
        PlanExtraction::Absent => {
            warn!("No meal plan data found in API response");
            return fall_back_to_catalog(ctx);
        }
    };

    render_plan(&plan);

    for &index in save {
        let Some(meal) = index.checked_sub(1).and_then(|i| plan.meals.get(i)) else {
            println!("No meal #{index} in this plan, skipping save.");
            continue;
        };
        match ctx
            .saved_meal_service()
            .save(NewSavedMeal::from(meal))
            .await?
        {
            SaveOutcome::Saved(saved) => println!("Saved '{}' (id {}).", saved.name, saved.id),
            SaveOutcome::AlreadySaved => println!("'{}' is already saved.", meal.name),
        }
    }

    Ok(())
}

fn fall_back_to_catalog(ctx: &ServiceContext) -> anyhow::Result<()> {
    println!("Could not read a plan from the response; showing the meal catalog instead.");
    println!();
    crate::commands::catalog::browse(ctx, CategoryFilter::All)
}
