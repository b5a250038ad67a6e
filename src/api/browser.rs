//! `window.fetch` transport

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::{HttpResponse, Transport};
use crate::error::WidgetError;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, WidgetError> {
        let window = web_sys::window().ok_or_else(|| WidgetError::Network("no window".to_string()))?;

        let value = JsFuture::from(window.fetch_with_str(url)).await.map_err(network_error)?;
        let response: Response = value.dyn_into().map_err(network_error)?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn network_error(err: JsValue) -> WidgetError {
    WidgetError::Network(js_error_text(&err))
}

/// Best-effort text for a thrown JS value
pub(crate) fn js_error_text(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
