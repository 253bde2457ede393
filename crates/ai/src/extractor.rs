//! Plan extraction from the provider envelope.
//!
//! Models routinely wrap the JSON they were asked for in markdown code
//! fences; the fence markers are removed by literal match before parsing.
//! Every failure mode maps to a `PlanExtraction` variant - nothing here
//! panics or propagates a parse error to the caller.

use log::warn;

use nutrinest_core::plans::{GeneratedMealPlan, PlanExtraction};

use crate::client::GenerateContentResponse;

/// Extract a meal plan from a provider response.
///
/// The text is looked up at the envelope's fixed field path
/// (`candidates[0].content.parts[0].text`); anything missing along the way
/// yields `Absent`. Present-but-unparseable text yields `Malformed` with the
/// parser's reason.
pub fn extract_plan(response: &GenerateContentResponse) -> PlanExtraction {
    let text = match candidate_text(response) {
        Some(text) => text,
        None => {
            warn!("No meal plan data found in provider response");
            return PlanExtraction::Absent;
        }
    };

    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<GeneratedMealPlan>(&cleaned) {
        Ok(plan) => PlanExtraction::Plan(plan),
        Err(e) => {
            warn!("Failed to parse meal plan: {e}");
            PlanExtraction::Malformed(e.to_string())
        }
    }
}

/// The model's text output at the fixed envelope path, if present.
fn candidate_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .as_deref()
}

/// Remove markdown fence markers by literal match and trim the remainder.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GenerateContentResponse;

    const PLAN_JSON: &str = r#"{
        "dailyCalories": 1850,
        "macros": {"protein": 130, "carbs": 180, "fats": 62},
        "meals": [{
            "name": "Veggie Omelette",
            "type": "breakfast",
            "calories": 350,
            "protein": 24,
            "carbs": 8,
            "fats": 25,
            "ingredients": ["3 eggs", "spinach", "tomato"],
            "instructions": "Whisk eggs, fold in vegetables, cook until set."
        }],
        "snacks": [{
            "name": "Almonds",
            "calories": 160,
            "protein": 6,
            "carbs": 6,
            "fats": 14
        }]
    }"#;

    fn envelope_with_text(text: &str) -> GenerateContentResponse {
        let body = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_fenced_json_extracts_like_direct_parse() {
        let fenced = format!("```json\n{PLAN_JSON}\n```");
        let extracted = extract_plan(&envelope_with_text(&fenced));

        let direct: GeneratedMealPlan = serde_json::from_str(PLAN_JSON).unwrap();
        assert_eq!(extracted, PlanExtraction::Plan(direct));
    }

    #[test]
    fn test_unfenced_json_extracts() {
        let extracted = extract_plan(&envelope_with_text(PLAN_JSON));
        assert!(extracted.plan().is_some());
    }

    #[test]
    fn test_stripped_text_has_no_residual_backticks() {
        let fenced = format!("```json\n{PLAN_JSON}\n```\n");
        assert!(!strip_code_fences(&fenced).contains('`'));
    }

    #[test]
    fn test_empty_envelope_is_absent() {
        let envelope: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_plan(&envelope), PlanExtraction::Absent);
    }

    #[test]
    fn test_candidate_without_parts_is_absent() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": []}}]
        });
        let envelope: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(extract_plan(&envelope), PlanExtraction::Absent);
    }

    #[test]
    fn test_candidate_without_content_is_absent() {
        let body = serde_json::json!({"candidates": [{}]});
        let envelope: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(extract_plan(&envelope), PlanExtraction::Absent);
    }

    #[test]
    fn test_prose_text_is_malformed() {
        let extracted = extract_plan(&envelope_with_text("Here is your plan: eat well."));
        assert!(matches!(extracted, PlanExtraction::Malformed(_)));
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        let truncated = &PLAN_JSON[..PLAN_JSON.len() / 2];
        let extracted = extract_plan(&envelope_with_text(truncated));
        assert!(matches!(extracted, PlanExtraction::Malformed(_)));
    }

    #[test]
    fn test_schema_mismatch_is_malformed() {
        let extracted = extract_plan(&envelope_with_text(r#"{"dailyCalories": "lots"}"#));
        assert!(matches!(extracted, PlanExtraction::Malformed(_)));
    }
}
