use axum::extract::{Multipart, State};
use axum::Json;
use contracts::usecases::u508_csv_chart_upload::{UploadSuccessResponse, FILE_FIELD};

use super::analyzer::analyze_csv;
use super::error::UploadError;

pub const SUCCESS_MESSAGE: &str = "File processed successfully";

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub sample_rows: usize,
}

/// POST /upload
pub async fn upload(
    State(settings): State<UploadSettings>,
    mut multipart: Multipart,
) -> Result<Json<UploadSuccessResponse>, UploadError> {
    let (file_name, bytes) = read_file_field(&mut multipart).await?;
    tracing::info!("Received '{}' ({} bytes)", file_name, bytes.len());

    let analysis = analyze_csv(&bytes, settings.sample_rows)?;
    tracing::info!(
        "Processed '{}': {} columns, {} rows",
        file_name,
        analysis.columns.len(),
        analysis.row_count
    );

    Ok(Json(UploadSuccessResponse {
        message: Some(SUCCESS_MESSAGE.to_string()),
        columns: Some(analysis.columns),
        chart_data: Some(analysis.chart_data),
    }))
}

/// Finds the `file` field and returns its file name and content
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(UploadError::NoFileSelected);
        }

        let bytes = field.bytes().await?;
        return Ok((file_name, bytes.to_vec()));
    }

    Err(UploadError::NoFilePart)
}
