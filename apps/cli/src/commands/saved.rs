use std::io::{self, BufRead, Write};

use nutrinest_core::saved_meals::{NewSavedMeal, SaveOutcome};

use crate::context::ServiceContext;
use crate::render::render_saved_meal;

pub fn list(ctx: &ServiceContext) -> anyhow::Result<()> {
    let meals = ctx.saved_meal_service().load()?;
    if meals.is_empty() {
        println!("No saved meals yet.");
        return Ok(());
    }

    println!("Saved Meals ({})", meals.len());
    for meal in &meals {
        render_saved_meal(meal);
    }
    Ok(())
}

pub async fn add(ctx: &ServiceContext, meal: NewSavedMeal) -> anyhow::Result<()> {
    match ctx.saved_meal_service().save(meal).await? {
        SaveOutcome::Saved(saved) => println!("Saved '{}' (id {}).", saved.name, saved.id),
        SaveOutcome::AlreadySaved => println!("This meal is already saved."),
    }
    Ok(())
}

/// Remove a saved meal. Destructive, so it asks first unless `--yes`.
pub async fn remove(ctx: &ServiceContext, id: &str, yes: bool) -> anyhow::Result<()> {
    let meals = ctx.saved_meal_service().load()?;
    let Some(meal) = meals.iter().find(|m| m.id == id) else {
        println!("No saved meal with id '{id}'; nothing removed.");
        return Ok(());
    };

    if !yes && !confirm(&format!("Remove '{}'?", meal.name))? {
        println!("Keeping '{}'.", meal.name);
        return Ok(());
    }

    let removed = ctx.saved_meal_service().remove(id).await?;
    if removed > 0 {
        println!("Removed '{}'.", meal.name);
    } else {
        println!("Nothing removed.");
    }
    Ok(())
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
