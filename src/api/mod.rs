//! List Endpoint Client
//!
//! One bounded GET per fetch, decoded into untrusted [`RawItem`]s.

mod browser;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::models::{RawItem, RequestedCount};

pub use browser::BrowserTransport;
pub(crate) use browser::js_error_text;

/// Status and body text of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET. `Err` only when no response arrived at all.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, WidgetError>;
}

/// Fetch `count` items. No retry: the first failure is returned.
pub async fn fetch_items<T: Transport + ?Sized>(
    transport: &T,
    config: &WidgetConfig,
    count: RequestedCount,
) -> Result<Vec<RawItem>, WidgetError> {
    let url = config.items_url(count)?;
    log::debug!("GET {}", url);

    let response = transport.get(url.as_str()).await?;
    if !response.is_success() {
        return Err(WidgetError::Http { status: response.status });
    }

    let items = decode_items(&response.body)?;
    log::info!("fetched {} items (requested {})", items.len(), count.get());
    Ok(items)
}

/// The body must be a JSON array; elements are kept as-is
pub fn decode_items(body: &str) -> Result<Vec<RawItem>, WidgetError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(values) => Ok(values.into_iter().map(RawItem::from_value).collect()),
        _ => Err(WidgetError::Shape),
    }
}
