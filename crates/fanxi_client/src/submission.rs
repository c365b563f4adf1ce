//! Full tactical-prediction submission.
//!
//! Independent of the lock/history snapshot contract: this is the
//! backend's scored-prediction endpoint and carries its own payload shape.
//! It shares a backend with the snapshot store but must not be conflated
//! with it.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Body for `POST /matches/{matchId}/predictions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSubmission {
    pub user_id: i64,
    pub match_id: i64,
    pub team_id: i64,
    pub formation: String,
    pub mentality: String,
    pub pressing_intensity: u8,
    /// Ordered starting eleven, by display name.
    pub players: Vec<String>,
}

impl PredictionSubmission {
    /// The backend's only validation rule, checked client-side too.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.players.len() != 11 {
            return Err(StoreError::InvalidSubmission {
                count: self.players.len(),
            });
        }
        Ok(())
    }
}

/// Acknowledgement of a stored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: i64,
}

/// Client for the submission endpoint.
pub struct SubmissionClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl SubmissionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn submit(
        &self,
        submission: &PredictionSubmission,
    ) -> Result<SubmissionReceipt, StoreError> {
        submission.validate()?;

        let url = format!("{}/matches/{}/predictions", self.base_url, submission.match_id);
        let response = self.http_client.post(&url).json(submission).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<SubmissionReceipt>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(players: usize) -> PredictionSubmission {
        PredictionSubmission {
            user_id: 1,
            match_id: 1,
            team_id: 1,
            formation: "4-3-3".to_string(),
            mentality: "Balanced".to_string(),
            pressing_intensity: 50,
            players: (1..=players).map(|i| format!("Player {}", i)).collect(),
        }
    }

    #[test]
    fn eleven_players_required() {
        assert!(submission(11).validate().is_ok());

        let err = submission(10).validate().unwrap_err();
        assert!(matches!(err, StoreError::InvalidSubmission { count: 10 }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn payload_uses_backend_field_names() {
        let body = serde_json::to_value(submission(11)).unwrap();
        assert_eq!(body["formation"], "4-3-3");
        assert_eq!(body["pressing_intensity"], 50);
        assert_eq!(body["players"].as_array().unwrap().len(), 11);
        assert_eq!(body["mentality"], "Balanced");
    }
}
