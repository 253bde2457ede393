//! Preferences module - user-entered biometric form values.

mod preferences_model;

pub use preferences_model::{ActivityLevel, Goal, UserPreferences};
