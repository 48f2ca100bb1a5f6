//! CSV analysis: column names plus a bar-chart aggregate over the first rows.
//!
//! Column types are decided over the whole file, the chart only uses the
//! first `sample_rows` records:
//! - labels come from the first non-numeric column (row numbers if there is none);
//! - values come from the first numeric column.

use contracts::usecases::u508_csv_chart_upload::{ChartData, Dataset};

use super::error::UploadError;

pub const DATASET_BACKGROUND: &str = "rgba(75, 192, 192, 0.2)";
pub const DATASET_BORDER: &str = "rgba(75, 192, 192, 1)";

/// Cells treated as missing values
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-NaN", "-nan", "<NA>", "N/A", "NA", "NULL", "NaN", "None",
    "n/a", "nan", "null",
];

/// Result of a successful analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CsvAnalysis {
    /// All header names, in file order
    pub columns: Vec<String>,
    pub row_count: usize,
    pub chart_data: ChartData,
}

pub fn analyze_csv(bytes: &[u8], sample_rows: usize) -> Result<CsvAnalysis, UploadError> {
    // Strip UTF-8 BOM if present
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(UploadError::EmptyCsv);
    }

    // short rows read as missing cells, longer ones are rejected
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > columns.len() {
            return Err(UploadError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }
        records.push(record);
    }
    if records.is_empty() {
        return Err(UploadError::EmptyCsv);
    }

    let numeric: Vec<bool> = (0..columns.len())
        .map(|idx| is_numeric_column(&records, idx))
        .collect();

    let data_column = numeric
        .iter()
        .position(|&n| n)
        .ok_or(UploadError::NoNumericColumns)?;
    let label_column = numeric.iter().position(|&n| !n);

    let sample = &records[..records.len().min(sample_rows)];

    let labels: Vec<String> = match label_column {
        Some(idx) => sample
            .iter()
            .map(|record| match cell(record, idx) {
                Some(value) => value.to_string(),
                None => "nan".to_string(),
            })
            .collect(),
        None => (0..sample.len()).map(|i| i.to_string()).collect(),
    };

    let values: Vec<Option<f64>> = sample
        .iter()
        .map(|record| {
            cell(record, data_column)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        })
        .collect();

    tracing::debug!(
        "CSV analysis: {} columns, {} rows, labels from {:?}, values from '{}'",
        columns.len(),
        records.len(),
        label_column.map(|idx| columns[idx].as_str()),
        columns[data_column]
    );

    let dataset = Dataset::new(format!("Data from {}", columns[data_column]), values)
        .with_style("backgroundColor", DATASET_BACKGROUND)
        .with_style("borderColor", DATASET_BORDER)
        .with_style("borderWidth", 1);

    Ok(CsvAnalysis {
        columns,
        row_count: records.len(),
        chart_data: ChartData {
            labels,
            datasets: vec![dataset],
        },
    })
}

/// Cell value, `None` for missing or NA cells
fn cell(record: &csv::StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).filter(|v| !NA_VALUES.contains(&v.trim()))
}

/// Numeric when every present cell parses as a number and at least one is present
fn is_numeric_column(records: &[csv::StringRecord], idx: usize) -> bool {
    let mut seen = false;
    for record in records {
        if let Some(value) = cell(record, idx) {
            if value.trim().parse::<f64>().is_err() {
                return false;
            }
            seen = true;
        }
    }
    seen
}
