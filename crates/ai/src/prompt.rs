//! Prompt construction for meal plan requests.

use nutrinest_core::preferences::UserPreferences;

/// Example JSON schema the model is asked to follow. This is a request, not
/// a contract: nothing guarantees the model honors it, which is why the
/// extractor treats the response as untrusted text.
const RESPONSE_SCHEMA: &str = r#"{
  "dailyCalories": number,
  "macros": {
    "protein": number,
    "carbs": number,
    "fats": number
  },
  "meals": [
    {
      "name": string,
      "type": "breakfast" | "lunch" | "dinner",
      "calories": number,
      "protein": number,
      "carbs": number,
      "fats": number,
      "ingredients": string[],
      "instructions": string
    }
  ],
  "snacks": [
    {
      "name": string,
      "calories": number,
      "protein": number,
      "carbs": number,
      "fats": number
    }
  ]
}"#;

/// Build the natural-language instruction for a plan request.
///
/// Preference values are embedded as entered; empty restrictions become the
/// literal `None`.
pub fn build_meal_plan_prompt(preferences: &UserPreferences) -> String {
    let restrictions = if preferences.dietary_restrictions.trim().is_empty() {
        "None"
    } else {
        preferences.dietary_restrictions.trim()
    };

    format!(
        "Generate a personalized meal plan for someone with the following preferences:\n\
Goal: {goal} weight\n\
Weight: {weight} kg\n\
Height: {height} cm\n\
Age: {age} years\n\
Activity Level: {activity}\n\
Dietary Restrictions: {restrictions}\n\
\n\
Please provide a detailed meal plan with:\n\
1. Daily calorie target\n\
2. Macro nutrient breakdown\n\
3. 4 meals per day with recipes\n\
4. Snack suggestions\n\
Format the response in JSON with the following structure:\n\
{schema}",
        goal = preferences.goal,
        weight = preferences.weight,
        height = preferences.height,
        age = preferences.age,
        activity = preferences.activity_level,
        restrictions = restrictions,
        schema = RESPONSE_SCHEMA,
    )
}
