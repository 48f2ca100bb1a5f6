use contracts::usecases::u508_csv_chart_upload::{
    ChartData, UploadErrorResponse, UploadSuccessResponse,
};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "File uploaded.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Could not process file.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection or server error.";
pub const NO_FILE_SELECTED_MESSAGE: &str = "No file selected.";

/// Failures that keep the exchange from producing a usable reply
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("response could not be decoded: {0}")]
    Decode(String),
}

/// Status code and raw body of a settled `/upload` request
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Classified outcome of one upload
#[derive(Debug, Clone, PartialEq)]
pub enum UploadResult {
    Success {
        message: String,
        columns: Vec<String>,
        chart_data: Option<ChartData>,
    },
    Failure {
        error: String,
    },
    TransportError(TransportError),
}

impl UploadResult {
    /// Decodes the body according to the status class.
    ///
    /// Bodies that are not JSON, or JSON of the wrong shape, become
    /// [`UploadResult::TransportError`].
    pub fn classify(response: &RawResponse) -> Self {
        if response.is_success() {
            match serde_json::from_str::<UploadSuccessResponse>(&response.body) {
                Ok(body) => UploadResult::Success {
                    message: body
                        .message
                        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                    columns: body.columns.unwrap_or_default(),
                    chart_data: body.chart_data,
                },
                Err(e) => UploadResult::TransportError(TransportError::Decode(e.to_string())),
            }
        } else {
            match serde_json::from_str::<UploadErrorResponse>(&response.body) {
                Ok(body) => UploadResult::Failure {
                    error: body
                        .error
                        .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
                },
                Err(e) => UploadResult::TransportError(TransportError::Decode(format!(
                    "HTTP {}: {}",
                    response.status, e
                ))),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackCategory {
    #[default]
    None,
    Success,
    Error,
}

/// Status line shown above the column list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackState {
    pub text: String,
    pub category: FeedbackCategory,
}

impl FeedbackState {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: FeedbackCategory::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: FeedbackCategory::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.category {
            FeedbackCategory::None => "feedback",
            FeedbackCategory::Success => "feedback success",
            FeedbackCategory::Error => "feedback error",
        }
    }
}
