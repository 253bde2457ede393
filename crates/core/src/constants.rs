/// Storage key for the persisted saved-meal list.
pub const SAVED_MEALS_KEY: &str = "saved_meals";

/// Storage key for the active session.
pub const SESSION_KEY: &str = "session";

/// Calendar-day format used for saved-meal dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Demo account credentials. This is a hardcoded string compare, not an
/// authentication system.
pub const DEMO_EMAIL: &str = "sakshi@gmail.com";
pub const DEMO_PASSWORD: &str = "sakshi123";
pub const DEMO_DISPLAY_NAME: &str = "Sakshi";

/// Placeholder image attached to every saved meal regardless of source.
pub const PLACEHOLDER_MEAL_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c";
