mod commands;
mod context;
mod render;

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use env_logger::Env;

use nutrinest_core::catalog::CategoryFilter;
use nutrinest_core::preferences::{ActivityLevel, Goal, UserPreferences};
use nutrinest_core::saved_meals::NewSavedMeal;
use nutrinest_core::session::UserProfile;

use context::ServiceContext;

#[derive(Parser)]
#[command(name = "nutrinest", about = "Your personal nutrition companion")]
struct Cli {
    /// App data directory (overrides the platform default)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with the demo account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and clear all local data
    Logout,
    /// Generate a personalized meal plan
    Generate {
        /// Weight goal: gain, loss, or maintain
        #[arg(long, default_value = "maintain")]
        goal: Goal,
        /// Weight in kg
        #[arg(long, default_value = "")]
        weight: String,
        /// Height in cm
        #[arg(long, default_value = "")]
        height: String,
        /// Age in years
        #[arg(long, default_value = "")]
        age: String,
        /// Activity level: sedentary, light, moderate, active, very_active
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
        /// Dietary restrictions, e.g. "vegetarian, gluten-free"
        #[arg(long, default_value = "")]
        restrictions: String,
        /// Save plan meal N (1-based, repeatable)
        #[arg(long = "save", value_name = "N")]
        save: Vec<usize>,
    },
    /// Browse the meal catalog
    Catalog {
        /// Category filter: All, Breakfast, Lunch, or Dinner
        #[arg(long, default_value = "All")]
        category: CategoryFilter,
    },
    /// Manage saved meals
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
    /// View saved meals grouped by day
    Planner,
    /// Show the signed-in profile
    Profile,
    /// Health facts and everyday tips
    Explore,
}

#[derive(Subcommand)]
enum SavedCommands {
    /// List saved meals
    List,
    /// Save a meal by hand
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        calories: f64,
        #[arg(long, default_value_t = 0.0)]
        protein: f64,
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        #[arg(long, default_value_t = 0.0)]
        fats: f64,
    },
    /// Remove a saved meal by id
    Remove {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);
    let ctx = context::initialize_context(&data_dir).await?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&ctx, &email, &password).await,
        Commands::Explore => {
            commands::explore::show();
            Ok(())
        }
        Commands::Logout => {
            require_session(&ctx)?;
            commands::auth::logout(&ctx).await
        }
        Commands::Generate {
            goal,
            weight,
            height,
            age,
            activity,
            restrictions,
            save,
        } => {
            require_session(&ctx)?;
            let preferences = UserPreferences {
                goal,
                weight,
                height,
                age,
                activity_level: activity,
                dietary_restrictions: restrictions,
            };
            commands::plan::generate(&ctx, preferences, &save).await
        }
        Commands::Catalog { category } => {
            require_session(&ctx)?;
            commands::catalog::browse(&ctx, category)
        }
        Commands::Saved { command } => {
            require_session(&ctx)?;
            match command {
                SavedCommands::List => commands::saved::list(&ctx),
                SavedCommands::Add {
                    name,
                    calories,
                    protein,
                    carbs,
                    fats,
                } => {
                    let meal = NewSavedMeal {
                        name,
                        calories,
                        protein,
                        carbs,
                        fats,
                    };
                    commands::saved::add(&ctx, meal).await
                }
                SavedCommands::Remove { id, yes } => commands::saved::remove(&ctx, &id, yes).await,
            }
        }
        Commands::Planner => {
            require_session(&ctx)?;
            commands::planner::show(&ctx)
        }
        Commands::Profile => {
            let profile = require_session(&ctx)?;
            commands::profile::show(&ctx, &profile)
        }
    }
}

/// Commands past the login screen need a live session.
fn require_session(ctx: &ServiceContext) -> anyhow::Result<UserProfile> {
    match ctx.session_service().current_user()? {
        Some(profile) => Ok(profile),
        None => bail!("Not logged in. Run `nutrinest login` first."),
    }
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> String {
    let dir = override_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nutrinest")
    });
    dir.to_string_lossy().to_string()
}
