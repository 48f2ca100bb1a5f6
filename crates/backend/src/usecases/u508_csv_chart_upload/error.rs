use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::u508_csv_chart_upload::UploadErrorResponse;
use thiserror::Error;

/// Errors of the `/upload` endpoint; each one becomes `{ "error": ... }`
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file part in the request")]
    NoFilePart,

    #[error("No file selected")]
    NoFileSelected,

    #[error("The CSV file is empty or has no headers")]
    EmptyCsv,

    #[error("No numeric columns found to chart in the first rows.")]
    NoNumericColumns,

    #[error("Error processing the file: {0}")]
    Parse(#[from] csv::Error),

    #[error("Error processing the file: Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid upload: {message}")]
    Multipart { status: StatusCode, message: String },
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::NoFilePart
            | UploadError::NoFileSelected
            | UploadError::EmptyCsv
            | UploadError::NoNumericColumns => StatusCode::BAD_REQUEST,
            UploadError::Parse(_) | UploadError::TooManyFields { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            UploadError::Multipart { status, .. } => *status,
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for UploadError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        UploadError::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Upload failed: {}", self);
        } else {
            tracing::warn!("Upload rejected: {}", self);
        }
        (status, Json(UploadErrorResponse::new(self.to_string()))).into_response()
    }
}
