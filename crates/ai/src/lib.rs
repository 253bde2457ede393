//! NutriNest AI - meal plan generation.
//!
//! This crate owns everything provider-specific: the prompt sent to the
//! generative-language endpoint, the single outbound HTTP call, and the
//! extraction of a typed meal plan from the provider envelope. The rest of
//! the application only sees `nutrinest_core::plans` types.

pub mod client;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod prompt;

pub use client::{GeminiClient, GenerateContentResponse};
pub use error::AiError;
pub use extractor::extract_plan;
pub use generator::{FakePlanGenerator, GeminiPlanGenerator};
pub use prompt::build_meal_plan_prompt;
