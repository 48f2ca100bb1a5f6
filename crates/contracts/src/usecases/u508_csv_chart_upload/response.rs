use serde::{Deserialize, Serialize};

use super::chart::ChartData;

/// Body of a 2xx `/upload` response. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSuccessResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<ChartData>,
}

/// Body of a non-2xx `/upload` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_uses_camel_case() {
        let body: UploadSuccessResponse = serde_json::from_value(json!({
            "message": "ok",
            "columns": ["x"],
            "chartData": { "labels": ["Jan"], "datasets": [{ "label": "s", "data": [5] }] }
        }))
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("ok"));
        assert_eq!(body.columns, Some(vec!["x".to_string()]));
        let chart = body.chart_data.unwrap();
        assert_eq!(chart.labels, vec!["Jan"]);
        assert_eq!(chart.datasets[0].data, vec![Some(5.0)]);
    }

    #[test]
    fn test_success_all_fields_optional() {
        let body: UploadSuccessResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body, UploadSuccessResponse::default());

        let body: UploadSuccessResponse =
            serde_json::from_str(r#"{"chartData": null}"#).unwrap();
        assert!(body.chart_data.is_none());
    }

    #[test]
    fn test_success_rejects_wrong_shapes() {
        assert!(serde_json::from_str::<UploadSuccessResponse>(r#"{"columns": "a,b"}"#).is_err());
        assert!(serde_json::from_str::<UploadSuccessResponse>("[1, 2]").is_err());
    }

    #[test]
    fn test_error_serialization() {
        let body = UploadErrorResponse::new("bad file");
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "error": "bad file" }));
        assert_eq!(serde_json::to_value(UploadErrorResponse::default()).unwrap(), json!({}));
    }
}
