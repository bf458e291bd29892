use crate::config::ConfigError;
use crate::harvest::{HarvestError, SourceError, WriterError};
use crate::names::NameError;
use crate::segments::PlanError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Name(NameError),
    Plan(PlanError),
    Source(SourceError),
    Harvest(HarvestError),
    Output(WriterError),
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Name(err) => write!(f, "name error: {}", err),
            AppError::Plan(err) => write!(f, "search plan error: {}", err),
            AppError::Source(err) => write!(f, "directory error: {}", err),
            AppError::Harvest(err) => write!(f, "harvest error: {}", err),
            AppError::Output(err) => write!(f, "output error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Name(err) => Some(err),
            AppError::Plan(err) => Some(err),
            AppError::Source(err) => Some(err),
            AppError::Harvest(err) => Some(err),
            AppError::Output(err) => Some(err),
            AppError::Serialization(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Name(_) | AppError::Plan(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Source(_)
            | AppError::Harvest(_)
            | AppError::Output(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<NameError> for AppError {
    fn from(value: NameError) -> Self {
        Self::Name(value)
    }
}

impl From<PlanError> for AppError {
    fn from(value: PlanError) -> Self {
        Self::Plan(value)
    }
}

impl From<SourceError> for AppError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<HarvestError> for AppError {
    fn from(value: HarvestError) -> Self {
        Self::Harvest(value)
    }
}

impl From<WriterError> for AppError {
    fn from(value: WriterError) -> Self {
        Self::Output(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
