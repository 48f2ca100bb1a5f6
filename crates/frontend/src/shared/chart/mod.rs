//! Chart widget abstraction.
//!
//! A [`ChartEngine`] builds widgets from a [`ChartConfig`]; every widget it hands
//! out is a [`ChartHandle`] that must be released through [`ChartHandle::destroy`]
//! before the canvas can host another one. The Chart.js implementation lives in
//! [`chart_js`].

pub mod chart_js;
pub mod config;

use std::fmt;

use contracts::usecases::u508_csv_chart_upload::ChartData;

pub use chart_js::ChartJsEngine;
pub use config::ChartConfig;

/// Errors raised by a rendering engine while building a widget
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("canvas element is not mounted")]
    CanvasMissing,

    #[error("chart config could not be converted: {0}")]
    Config(String),

    #[error("rendering engine failed: {0}")]
    Engine(String),
}

/// A live chart widget bound to a canvas
pub trait ChartHandle {
    /// Releases the widget and its canvas bindings
    fn destroy(self);
}

pub trait ChartEngine {
    type Handle: ChartHandle;

    fn create(&mut self, config: ChartConfig) -> Result<Self::Handle, ChartError>;
}

/// Data point resolved from a click on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ClickedPoint {
    pub label: String,
    pub value: Option<f64>,
}

impl ClickedPoint {
    /// Point `index` of dataset `dataset_index`, `None` when either is out of range
    pub fn from_chart_data(data: &ChartData, dataset_index: usize, index: usize) -> Option<Self> {
        let (label, value) = data.point(dataset_index, index)?;
        Some(Self {
            label: label.to_string(),
            value,
        })
    }
}

impl fmt::Display for ClickedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "Clicked: label='{}', value={}", self.label, v),
            None => write!(f, "Clicked: label='{}', value=null", self.label),
        }
    }
}
