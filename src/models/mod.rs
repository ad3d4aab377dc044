use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for question generation. Fields are required but otherwise
/// unvalidated; the extractor's type check is the only gate.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    pub exam: String,
    pub subject: String,
    pub topic: String,
    pub difficulty: String,
}

/// A single multiple-choice question as requested from the model.
/// `correct_answer` is expected to be one of the `options` strings by value,
/// not an index or label; the model is asked for this, it is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// The question set shape requested from the model (ten questions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

/// Response envelope for the generation endpoint. Semantic success/failure
/// is carried in the body independent of the HTTP status, which stays 200
/// once the model call itself has succeeded.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Success {
        success: bool,
        /// The parsed model output, returned verbatim with no schema check.
        questions: Value,
    },
    Failure {
        success: bool,
        error: String,
        message: String,
    },
}

impl GenerateResponse {
    pub fn success(questions: Value) -> Self {
        GenerateResponse::Success {
            success: true,
            questions,
        }
    }

    pub fn invalid_json(message: String) -> Self {
        GenerateResponse::Failure {
            success: false,
            error: "Invalid JSON format".to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_serializes_flat() {
        let envelope = GenerateResponse::success(json!({"questions": []}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["questions"], json!({"questions": []}));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn failure_envelope_carries_category_and_message() {
        let envelope = GenerateResponse::invalid_json("expected value at line 1".to_string());
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Invalid JSON format");
        assert_eq!(value["message"], "expected value at line 1");
        assert!(value.get("questions").is_none());
    }

    #[test]
    fn question_set_round_trips_the_documented_shape() {
        let set = QuestionSet {
            questions: vec![Question {
                question: "2+2=?".to_string(),
                options: vec!["3".into(), "4".into(), "5".into(), "6".into()],
                correct_answer: "4".to_string(),
            }],
        };

        let json = serde_json::to_string(&set).unwrap();
        let parsed: QuestionSet = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.questions.len(), 1);
        assert!(parsed.questions[0]
            .options
            .contains(&parsed.questions[0].correct_answer));
    }
}
