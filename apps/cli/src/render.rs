//! Shared text rendering for meals and plans.

use nutrinest_core::catalog::CatalogMeal;
use nutrinest_core::plans::GeneratedMealPlan;
use nutrinest_core::saved_meals::SavedMeal;

/// One-line macro summary, grams per nutrient.
pub fn macros_line(protein: f64, carbs: f64, fats: f64) -> String {
    format!("protein {protein}g | carbs {carbs}g | fats {fats}g")
}

pub fn render_catalog_meal(meal: &CatalogMeal) {
    println!("[{}] {} ({})", meal.id, meal.name, meal.category);
    println!("    {}", meal.description);
    println!(
        "    {} calories | {} | {}",
        meal.calories,
        macros_line(meal.protein, meal.carbs, meal.fats),
        meal.prep_time
    );
}

pub fn render_saved_meal(meal: &SavedMeal) {
    println!("[{}] {} ({})", meal.id, meal.name, meal.date);
    println!(
        "    {} calories | {}",
        meal.calories,
        macros_line(meal.protein, meal.carbs, meal.fats)
    );
}

pub fn render_plan(plan: &GeneratedMealPlan) {
    println!("Your Personalized Meal Plan");
    println!("{} calories", plan.daily_calories);
    println!(
        "{}",
        macros_line(plan.macros.protein, plan.macros.carbs, plan.macros.fats)
    );

    for (index, meal) in plan.meals.iter().enumerate() {
        println!();
        println!("{}. {} ({})", index + 1, meal.name, meal.meal_type);
        println!(
            "   {} calories | {}",
            meal.calories,
            macros_line(meal.protein, meal.carbs, meal.fats)
        );
        if !meal.ingredients.is_empty() {
            println!("   Ingredients:");
            for ingredient in &meal.ingredients {
                println!("   - {ingredient}");
            }
        }
        if !meal.instructions.is_empty() {
            println!("   Instructions: {}", meal.instructions);
        }
    }

    if !plan.snacks.is_empty() {
        println!();
        println!("Recommended Snacks:");
        for snack in &plan.snacks {
            println!(
                "- {} ({} calories | {})",
                snack.name,
                snack.calories,
                macros_line(snack.protein, snack.carbs, snack.fats)
            );
        }
    }
}
