//! u508: CSV upload analysis behind `POST /upload`

pub mod analyzer;
pub mod error;
pub mod handler;

pub use error::UploadError;
pub use handler::{upload, UploadSettings};
