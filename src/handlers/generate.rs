use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::AppError;
use crate::models::{GenerateResponse, QuestionRequest};
use crate::services::strip_code_fences;
use crate::startup::AppState;

/// Build the generation prompt for the given request.
///
/// Field values are interpolated verbatim; the consumer is a language model,
/// not a code interpreter, so no escaping is applied.
fn build_prompt(request: &QuestionRequest) -> String {
    format!(
        r#"Generate 10 multiple-choice questions (MCQs) in JSON format for the {exam} exam. Focus on the most important and frequently asked questions from previous years. Each question should be highly relevant to the exam syllabus and difficulty level. In correct_answer do not give the option number; give the exact string that appears in the options array.
Subject: {subject}
Topic: {topic}
Difficulty: {difficulty}

Return JSON format:
{{
    "questions": [
        {{
            "question": "Question text?",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer": "Option B"
        }},
        ...
    ]
}}"#,
        exam = request.exam,
        subject = request.subject,
        topic = request.topic,
        difficulty = request.difficulty,
    )
}

#[tracing::instrument(skip(state, request), fields(exam = %request.exam, topic = %request.topic))]
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = build_prompt(&request);

    let raw = state.text_provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Model invocation failed");
        AppError::ModelInvocation(e.to_string())
    })?;

    let candidate = strip_code_fences(&raw);

    match serde_json::from_str::<Value>(&candidate) {
        Ok(parsed) => {
            tracing::info!("Generated question set");
            Ok(Json(GenerateResponse::success(parsed)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model output was not valid JSON");
            Ok(Json(GenerateResponse::invalid_json(e.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> QuestionRequest {
        QuestionRequest {
            exam: "SAT".to_string(),
            subject: "Math".to_string(),
            topic: "Algebra".to_string(),
            difficulty: "Easy".to_string(),
        }
    }

    #[test]
    fn prompt_interpolates_all_request_fields() {
        let prompt = build_prompt(&request());

        assert!(prompt.contains("for the SAT exam"));
        assert!(prompt.contains("Subject: Math"));
        assert!(prompt.contains("Topic: Algebra"));
        assert!(prompt.contains("Difficulty: Easy"));
    }

    #[test]
    fn prompt_asks_for_ten_questions_as_json_by_value() {
        let prompt = build_prompt(&request());

        assert!(prompt.contains("10 multiple-choice questions"));
        assert!(prompt.contains("JSON format"));
        assert!(prompt.contains("correct_answer"));
        assert!(prompt.contains("do not give the option number"));
    }

    #[test]
    fn prompt_passes_field_values_through_unescaped() {
        let mut req = request();
        req.topic = r#"Algebra "and" {braces}"#.to_string();

        let prompt = build_prompt(&req);
        assert!(prompt.contains(r#"Algebra "and" {braces}"#));
    }
}
