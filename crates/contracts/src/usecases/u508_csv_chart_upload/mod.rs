pub mod chart;
pub mod response;

pub use chart::{ChartData, Dataset};
pub use response::{UploadErrorResponse, UploadSuccessResponse};

use crate::usecases::common::UseCaseMetadata;

/// Endpoint that accepts the multipart upload
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field name carrying the file
pub const FILE_FIELD: &str = "file";

pub struct CsvChartUpload;

impl UseCaseMetadata for CsvChartUpload {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "csv_chart_upload"
    }

    fn display_name() -> &'static str {
        "CSV upload and chart"
    }

    fn description() -> &'static str {
        "Upload a CSV file, list its columns and chart the first numeric column"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(CsvChartUpload::full_name(), "u508_csv_chart_upload");
    }
}
