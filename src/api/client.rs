use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::assessment::{AnalysisResult, AssessmentInput, UploadedFile};
use crate::config::Config;
use crate::{Result, StressCheckError};

/// HTTP client for the inference backend's predict endpoint.
pub struct ApiClient {
    http: reqwest::Client,
    predict_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            predict_url: config.predict_url(),
        }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Submit one assessment and interpret the verdict.
    ///
    /// Fires exactly one multipart POST; no retries. Transport failures,
    /// non-2xx statuses, unparseable bodies and `success:false` verdicts all
    /// surface as errors carrying the best-available message.
    pub async fn predict(&self, input: &AssessmentInput) -> Result<AnalysisResult> {
        let physiological = input.physiological.as_ref().ok_or_else(|| {
            StressCheckError::Request("physiological file is required".to_string())
        })?;

        let mut form = Form::new()
            .part("physiological_file", file_part(physiological)?)
            .text("dass21_responses", input.responses_field());

        if let Some(voice) = &input.voice {
            form = form.part("voice_audio", file_part(voice)?);
        }

        tracing::info!(
            url = %self.predict_url,
            file = %physiological.name,
            voice = input.voice.is_some(),
            "Submitting assessment"
        );

        let response = self
            .http
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| StressCheckError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| StressCheckError::Request(e.to_string()))?;

        interpret_response(status, &body)
    }
}

fn file_part(file: &UploadedFile) -> Result<Part> {
    Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.content_type)
        .map_err(|e| StressCheckError::Request(e.to_string()))
}

/// Turn a raw backend reply into a verdict or the best-available error.
fn interpret_response(status: StatusCode, body: &[u8]) -> Result<AnalysisResult> {
    if !status.is_success() {
        let message = serde_json::from_slice::<AnalysisResult>(body)
            .ok()
            .map(|r| r.failure_message())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
        return Err(StressCheckError::Backend(message));
    }

    let result: AnalysisResult = serde_json::from_slice(body)
        .map_err(|e| StressCheckError::InvalidResponse(e.to_string()))?;

    if !result.success {
        return Err(StressCheckError::Backend(result.failure_message()));
    }

    Ok(result)
}
