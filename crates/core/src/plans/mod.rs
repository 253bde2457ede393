//! Plans module - generated meal plan models, services, and traits.

mod plans_model;
mod plans_service;
mod plans_traits;

pub use plans_model::{
    GeneratedMealPlan, MacroBreakdown, MealType, PlanExtraction, PlannedMeal, Snack,
};
pub use plans_service::PlanService;
pub use plans_traits::{MealPlanGeneratorTrait, PlanServiceTrait};
