// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use axum::body::Bytes;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::consts::DEFAULT_TRANSFORM;
use crate::engine::execute;
use crate::errors::ProcessingError;
use crate::processors::{
    AnalysisPipeline, ReverseUppercaseProcessor, TextTransformer, WordCloudPipeline,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// Body accepted by every POST endpoint. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Only read by `/translate`
    #[serde(default, rename = "type")]
    pub transform: Option<String>,
}

impl TextRequest {
    /// Decode a request body. An empty body is treated as a request without
    /// text so that it is rejected the same way as `{}`.
    pub fn decode(body: &[u8]) -> Result<Self, ProcessingError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| ProcessingError::Validation(format!("Invalid JSON body: {}", e)))
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn transform(&self) -> &str {
        self.transform.as_deref().unwrap_or(DEFAULT_TRANSFORM)
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        message: "wordsmith server is running",
    })
}

pub async fn process(body: Bytes) -> Result<Json<Value>, ProcessingError> {
    let request = TextRequest::decode(&body)?;
    let value = execute(&ReverseUppercaseProcessor::new(), request.text())?;
    Ok(Json(value))
}

pub async fn analyze(body: Bytes) -> Result<Json<Value>, ProcessingError> {
    let request = TextRequest::decode(&body)?;
    let value = execute(&AnalysisPipeline::new(), request.text())?;
    Ok(Json(value))
}

pub async fn translate(body: Bytes) -> Result<Json<Value>, ProcessingError> {
    let request = TextRequest::decode(&body)?;
    let value = execute(&TextTransformer::new(request.transform()), request.text())?;
    Ok(Json(value))
}

pub async fn wordcloud(body: Bytes) -> Result<Json<Value>, ProcessingError> {
    let request = TextRequest::decode(&body)?;
    let value = execute(&WordCloudPipeline::new(), request.text())?;
    Ok(Json(value))
}
