use nutrinest_core::session::UserProfile;

use crate::context::ServiceContext;
use crate::render::render_saved_meal;

pub fn show(ctx: &ServiceContext, profile: &UserProfile) -> anyhow::Result<()> {
    println!("{} <{}>", profile.display_name, profile.email);

    let meals = ctx.saved_meal_service().load()?;
    println!("{} saved meal(s)", meals.len());
    for meal in &meals {
        render_saved_meal(meal);
    }

    println!();
    println!("Run `nutrinest logout` to sign out and clear local data.");
    Ok(())
}
