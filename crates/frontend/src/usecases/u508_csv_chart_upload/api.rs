use contracts::usecases::u508_csv_chart_upload::UPLOAD_PATH;

use super::controller::{UploadRequest, UploadTransport};
use super::model::{RawResponse, TransportError};
use crate::shared::api_utils::api_url;

/// Posts the file as `multipart/form-data` through `window.fetch`
pub struct FetchTransport {
    url: String,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self {
            url: api_url(UPLOAD_PATH),
        }
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadTransport for FetchTransport {
    type File = web_sys::File;

    async fn send(
        &self,
        request: UploadRequest<web_sys::File>,
    ) -> Result<RawResponse, TransportError> {
        use wasm_bindgen::JsCast;
        use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

        let network = |e: wasm_bindgen::JsValue| TransportError::Network(format!("{e:?}"));

        let form_data = FormData::new().map_err(network)?;
        form_data
            .append_with_blob(request.field_name, &request.file)
            .map_err(network)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form_data);

        let req = Request::new_with_str_and_init(&self.url, &opts).map_err(network)?;

        let window = web_sys::window().ok_or_else(|| TransportError::Network("no window".into()))?;
        let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(network)?;
        let resp: Response = resp_value.dyn_into().map_err(network)?;

        let status = resp.status();
        let decode = |e: wasm_bindgen::JsValue| TransportError::Decode(format!("{e:?}"));
        let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(decode)?)
            .await
            .map_err(decode)?;
        let body = text
            .as_string()
            .ok_or_else(|| TransportError::Decode("bad text".into()))?;

        Ok(RawResponse { status, body })
    }
}
