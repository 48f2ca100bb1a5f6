use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use contracts::usecases::u508_csv_chart_upload::UPLOAD_PATH;
use tower_http::services::ServeDir;

use crate::shared::config::{get_static_dir, Config};
use crate::usecases::u508_csv_chart_upload::{self, UploadSettings};

/// Configuration of all application routes
pub fn configure_routes(config: &Config) -> Router {
    let upload_settings = UploadSettings {
        sample_rows: config.upload.sample_rows,
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // U508 CSV upload
        .route(
            UPLOAD_PATH,
            post(u508_csv_chart_upload::upload)
                .layer(DefaultBodyLimit::max(config.upload.max_body_bytes)),
        )
        .with_state(upload_settings)
        // Built frontend (index.html, wasm, assets)
        .fallback_service(ServeDir::new(get_static_dir(config)))
}
