//! Generated meal plan domain models.
//!
//! These mirror the JSON structure the plan request asks the model to emit.
//! A plan is parsed once per generation request, held for the duration of the
//! render, and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot a planned meal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        };
        write!(f, "{label}")
    }
}

/// Macro nutrient totals in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// A single meal inside a generated plan. Immutable once parsed; may be
/// promoted to a saved meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// A snack suggestion inside a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snack {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// A complete generated meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMealPlan {
    pub daily_calories: f64,
    pub macros: MacroBreakdown,
    pub meals: Vec<PlannedMeal>,
    pub snacks: Vec<Snack>,
}

/// Outcome of extracting a plan from a provider response.
///
/// Callers choose what to do with a non-plan outcome (the CLI falls back to
/// the static catalog); nothing is swallowed on the way here.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanExtraction {
    /// The response contained a parseable plan.
    Plan(GeneratedMealPlan),
    /// Text was present but did not parse as a plan.
    Malformed(String),
    /// The response envelope carried no extractable text.
    Absent,
}

impl PlanExtraction {
    /// The plan, if extraction succeeded.
    pub fn plan(&self) -> Option<&GeneratedMealPlan> {
        match self {
            PlanExtraction::Plan(plan) => Some(plan),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_deserializes_from_requested_schema() {
        let json = r#"{
            "dailyCalories": 2200,
            "macros": {"protein": 140, "carbs": 250, "fats": 70},
            "meals": [{
                "name": "Oat Bowl",
                "type": "breakfast",
                "calories": 420,
                "protein": 18,
                "carbs": 60,
                "fats": 12,
                "ingredients": ["oats", "milk", "banana"],
                "instructions": "Simmer oats in milk, top with banana."
            }],
            "snacks": [{
                "name": "Greek Yogurt",
                "calories": 150,
                "protein": 15,
                "carbs": 10,
                "fats": 4
            }]
        }"#;

        let plan: GeneratedMealPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.daily_calories, 2200.0);
        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].meal_type, MealType::Breakfast);
        assert_eq!(plan.snacks[0].name, "Greek Yogurt");
    }

    #[test]
    fn test_meal_type_serializes_as_type_field() {
        let meal = PlannedMeal {
            name: "Salad".to_string(),
            meal_type: MealType::Lunch,
            calories: 300.0,
            protein: 20.0,
            carbs: 15.0,
            fats: 10.0,
            ingredients: vec![],
            instructions: String::new(),
        };
        let value = serde_json::to_value(&meal).unwrap();
        assert_eq!(value["type"], "lunch");
    }
}
