use crate::context::ServiceContext;

pub async fn login(ctx: &ServiceContext, email: &str, password: &str) -> anyhow::Result<()> {
    let profile = ctx.session_service().login(email, password).await?;
    println!("Welcome to NutriNest, {}!", profile.display_name);
    Ok(())
}

pub async fn logout(ctx: &ServiceContext) -> anyhow::Result<()> {
    ctx.session_service().logout().await?;
    println!("Logged out. All local data has been cleared.");
    Ok(())
}
