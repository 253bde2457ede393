use nutrinest_core::saved_meals::group_by_date;

use crate::context::ServiceContext;
use crate::render::render_saved_meal;

/// Calendar view: saved meals grouped by day, newest first.
pub fn show(ctx: &ServiceContext) -> anyhow::Result<()> {
    let meals = ctx.saved_meal_service().load()?;
    if meals.is_empty() {
        println!("Meal Planner");
        println!("Nothing planned yet - save a meal to see it here.");
        return Ok(());
    }

    println!("Meal Planner");
    for (day, entries) in group_by_date(&meals) {
        println!();
        println!("{day}");
        for meal in &entries {
            render_saved_meal(meal);
        }
    }
    Ok(())
}
