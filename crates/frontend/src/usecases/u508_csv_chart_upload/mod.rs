//! u508: upload a CSV file, list its columns and chart the derived aggregates.
//!
//! The flow is split between two parts:
//! - [`controller::SubmissionController`] intercepts the form, posts the file and
//!   classifies the reply into an [`model::UploadResult`];
//! - [`presentation::PresentationManager`] owns the feedback line, the column list
//!   and the single chart widget.

pub mod api;
pub mod controller;
pub mod model;
pub mod presentation;
pub mod view;

#[cfg(test)]
mod test_support;

pub use view::CsvChartUploadPage;

/// Title shown above every rendered chart
pub const CHART_TITLE: &str = "CSV data visualization";
