use serde::{Deserialize, Serialize};

use crate::client::models::prediction::{Digit, PredictionOutcome, Score};
use crate::common::error::{PadError, Result};

/// Body of `POST /api/predict`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    /// `data:image/png;base64,...` of the whole canvas
    pub image: String,
}

/// Either `{predicted_number, score}` or `{error}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    #[serde(default)]
    pub predicted_number: Option<i64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictResponse {
    pub fn into_outcome(self) -> Result<PredictionOutcome> {
        match (self.predicted_number, self.error) {
            (Some(number), _) => {
                let digit = Digit::new(number).ok_or_else(|| {
                    PadError::MalformedResponse(format!("predicted_number {number} is not a digit"))
                })?;
                let score = self.score.and_then(Score::new).ok_or_else(|| {
                    PadError::MalformedResponse(format!("missing or invalid score: {:?}", self.score))
                })?;
                Ok(PredictionOutcome::Digit { digit, score })
            }
            (None, Some(error)) => Ok(PredictionOutcome::Rejected(error)),
            (None, None) => Err(PadError::MalformedResponse(
                "neither predicted_number nor error present".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<PredictionOutcome> {
        serde_json::from_str::<PredictResponse>(body)
            .expect("valid json")
            .into_outcome()
    }

    #[test]
    fn request_shape() {
        let body = serde_json::to_value(PredictRequest { image: "data:image/png;base64,AA==".into() }).unwrap();
        assert_eq!(body, serde_json::json!({ "image": "data:image/png;base64,AA==" }));
    }

    #[test]
    fn success_shape() {
        let outcome = parse(r#"{"predicted_number": 7, "score": 0.92}"#).unwrap();
        assert_eq!(
            outcome,
            PredictionOutcome::Digit { digit: Digit::new(7).unwrap(), score: Score::new(0.92).unwrap() }
        );
    }

    #[test]
    fn error_shape() {
        assert_eq!(parse(r#"{"error": "bad image"}"#).unwrap(), PredictionOutcome::Rejected("bad image".into()));
    }

    #[test]
    fn digit_wins_over_error_field() {
        let outcome = parse(r#"{"predicted_number": 1, "score": 0.6, "error": "ignored"}"#).unwrap();
        assert!(matches!(outcome, PredictionOutcome::Digit { .. }));
    }

    #[test]
    fn malformed_shapes() {
        assert!(matches!(parse("{}"), Err(PadError::MalformedResponse(_))));
        assert!(matches!(parse(r#"{"predicted_number": 12, "score": 0.9}"#), Err(PadError::MalformedResponse(_))));
        assert!(matches!(parse(r#"{"predicted_number": 4}"#), Err(PadError::MalformedResponse(_))));
        assert!(matches!(parse(r#"{"predicted_number": 4, "score": 3.5}"#), Err(PadError::MalformedResponse(_))));
    }
}
