//! Serializable Chart.js configuration (`{ type, data, options }`).
//!
//! Field names follow the Chart.js option tree so the struct can be handed to
//! the library through `serde_wasm_bindgen` without any remapping.

use contracts::usecases::u508_csv_chart_upload::ChartData;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

impl ChartConfig {
    /// Bar chart that fills its container, starts the y axis at zero and shows
    /// a top legend plus a fixed title.
    pub fn bar(data: ChartData, title: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Bar,
            data,
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                scales: Scales {
                    y: Axis {
                        begin_at_zero: true,
                    },
                },
                plugins: Plugins {
                    legend: Legend {
                        display: true,
                        position: LegendPosition::Top,
                    },
                    title: Title {
                        display: true,
                        text: title.into(),
                    },
                },
            },
        }
    }
}
