use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Chart-ready aggregate produced by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Category labels (x axis)
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One named numeric series.
///
/// Styling keys (`backgroundColor`, `borderWidth`, ...) are not interpreted,
/// they are kept in `styling` and handed to the rendering engine as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    /// `null` points are gaps
    pub data: Vec<Option<f64>>,
    #[serde(flatten)]
    pub styling: Map<String, Value>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            data,
            styling: Map::new(),
        }
    }

    pub fn with_style(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.styling.insert(key.to_string(), value.into());
        self
    }
}

impl ChartData {
    /// Category label and value at (`dataset_index`, `index`)
    pub fn point(&self, dataset_index: usize, index: usize) -> Option<(&str, Option<f64>)> {
        let label = self.labels.get(index)?;
        let value = self.datasets.get(dataset_index)?.data.get(index)?;
        Some((label.as_str(), *value))
    }
}
