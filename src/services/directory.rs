use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::models::Hospital;

/// Errors that can occur when talking to the hospital directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("directory returned error: {0}")]
    ApiError(String),

    #[error("invalid directory response: {0}")]
    InvalidResponse(String),
}

/// Client for the hospital directory service
///
/// The directory is the persistence collaborator that owns the hospital
/// roster; this service only reads it. Expected shape: a JSON array of
/// hospital records at `GET {endpoint}/hospitals`.
pub struct HospitalDirectory {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl HospitalDirectory {
    pub fn new(endpoint: String, api_key: Option<String>) -> Result<Self, DirectoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Fetch the full hospital roster.
    pub async fn get_hospitals(&self) -> Result<Vec<Hospital>, DirectoryError> {
        let url = format!("{}/hospitals", self.endpoint);

        tracing::debug!("fetching hospital roster from {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(DirectoryError::ApiError(format!(
                "failed to fetch hospitals: {}",
                response.status()
            )));
        }

        let hospitals: Vec<Hospital> = response
            .json()
            .await
            .map_err(|e| DirectoryError::InvalidResponse(e.to_string()))?;

        tracing::debug!("directory returned {} hospitals", hospitals.len());

        Ok(hospitals)
    }
}
