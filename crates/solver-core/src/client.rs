//! Solver HTTP Client
//!
//! Sends one multipart POST per upload. No retry, no timeout.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::config::SolverConfig;
use crate::error::{Result, SolveError};
use crate::solution::SolveResult;
use crate::solver::{ImageUpload, Solver};

/// HTTP client for the solver service
#[derive(Clone, Debug)]
pub struct SolverClient {
    http: reqwest::Client,
    config: SolverConfig,
}

impl SolverClient {
    /// Create from configuration
    pub fn from_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Create with the default localhost endpoint
    pub fn localhost() -> Self {
        Self {
            http: reqwest::Client::new(),
            config: SolverConfig::default(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Upload an image and parse the solver's JSON answer
    pub async fn upload(&self, image: ImageUpload) -> Result<SolveResult> {
        tracing::debug!(
            endpoint = %self.config.endpoint,
            bytes = image.len(),
            file_name = image.file_name.as_deref().unwrap_or("<unnamed>"),
            "uploading image"
        );

        let form = Form::new().part(self.config.field_name.clone(), image_part(image)?);

        let response = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "solver rejected upload");
            return Err(SolveError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl Solver for SolverClient {
    type File = ImageUpload;

    async fn solve(&self, file: ImageUpload) -> Result<SolveResult> {
        self.upload(file).await
    }
}

fn image_part(image: ImageUpload) -> Result<Part> {
    let ImageUpload {
        bytes,
        file_name,
        mime_type,
    } = image;

    let mut part = Part::bytes(bytes);
    if let Some(name) = file_name {
        part = part.file_name(name);
    }
    // An unparseable type is left off; the bytes are sent regardless.
    if let Some(mime) = mime_type.filter(|m| Part::bytes(Vec::new()).mime_str(m).is_ok()) {
        part = part
            .mime_str(&mime)
            .map_err(|e| SolveError::Read(format!("invalid MIME type {mime:?}: {e}")))?;
    }
    Ok(part)
}
