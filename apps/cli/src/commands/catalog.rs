use nutrinest_core::catalog::CategoryFilter;

use crate::context::ServiceContext;
use crate::render::render_catalog_meal;

pub fn browse(ctx: &ServiceContext, filter: CategoryFilter) -> anyhow::Result<()> {
    let meals = ctx.catalog_service().filter_by_category(filter);
    if meals.is_empty() {
        println!("No meals in this category.");
        return Ok(());
    }

    println!("Meal Plans");
    for meal in meals {
        render_catalog_meal(meal);
    }
    Ok(())
}
