//! Widget Configuration
//!
//! Defaults target the public JSONPlaceholder API. A host page can override
//! any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="post-feed-config">
//!   { "base_url": "https://example.test", "messages": { "no_body": "—" } }
//! </script>
//! ```

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::error::WidgetError;
use crate::models::RequestedCount;

/// Element id of the optional inline config block
pub const CONFIG_ELEMENT_ID: &str = "post-feed-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub base_url: String,
    pub endpoint: String,
    pub limit_param: String,
    /// Value the count input starts with
    pub initial_count: String,
    pub error_dismiss_ms: u64,
    pub reveal_step_ms: u64,
    pub log_level: String,
    pub messages: Messages,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            endpoint: "/posts".to_string(),
            limit_param: "_limit".to_string(),
            initial_count: "10".to_string(),
            error_dismiss_ms: 5000,
            reveal_step_ms: 100,
            log_level: "info".to_string(),
            messages: Messages::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse an inline JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `{base_url}{endpoint}?{limit_param}={count}`
    pub fn items_url(&self, count: RequestedCount) -> Result<Url, WidgetError> {
        let base = format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint);
        let mut url = Url::parse(&base)
            .map_err(|e| WidgetError::Network(format!("invalid endpoint {}: {}", base, e)))?;
        url.query_pairs_mut()
            .append_pair(&self.limit_param, &count.get().to_string());
        Ok(url)
    }

    pub fn error_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.error_dismiss_ms)
    }

    /// Delay before card `index` fades in
    pub fn reveal_delay(&self, index: usize) -> Duration {
        Duration::from_millis(self.reveal_step_ms.saturating_mul(index as u64))
    }
}

/// All user-visible text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub title: String,
    pub input_label: String,
    pub fetch_button: String,
    pub loading: String,
    pub input_empty: String,
    pub input_out_of_range: String,
    pub input_too_large: String,
    pub invalid_count: String,
    pub fetch_failed: String,
    pub no_results: String,
    pub unexpected: String,
    pub offline: String,
    pub missing_id: String,
    pub no_title: String,
    pub no_body: String,
    pub user_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            title: "Posts".to_string(),
            input_label: "Number of posts (1-100)".to_string(),
            fetch_button: "Load posts".to_string(),
            loading: "Loading...".to_string(),
            input_empty: "The field cannot be empty".to_string(),
            input_out_of_range: "Enter a number from 1 to 100".to_string(),
            input_too_large: "Maximum number of posts: 100".to_string(),
            invalid_count: "Please enter a valid number of posts (1-100)".to_string(),
            fetch_failed: "Could not load posts. Please try again.".to_string(),
            no_results: "No posts found".to_string(),
            unexpected: "An unexpected error occurred. Please try again.".to_string(),
            offline: "No internet connection. Check your network.".to_string(),
            missing_id: "N/A".to_string(),
            no_title: "No title".to_string(),
            no_body: "No body".to_string(),
            user_label: "User".to_string(),
        }
    }
}

/// Read the inline config block from the page, falling back to defaults
#[cfg(target_arch = "wasm32")]
pub fn load() -> WidgetConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match json {
        Some(json) => WidgetConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            WidgetConfig::default()
        }),
        None => WidgetConfig::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> WidgetConfig {
    WidgetConfig::default()
}
