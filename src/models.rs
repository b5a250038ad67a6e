//! Widget Models
//!
//! Requested count, raw and display records, and the visible UI state.

use serde_json::{Map, Value};

/// Number of items to request, always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestedCount(u8);

impl RequestedCount {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 100;

    /// Checked constructor, `None` outside the bounds
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Untrusted record as received from the list endpoint.
///
/// Fields keep whatever JSON value arrived; nothing about their type or
/// presence is assumed until sanitizing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItem {
    pub id: Option<Value>,
    pub user_id: Option<Value>,
    pub title: Option<Value>,
    pub body: Option<Value>,
}

impl RawItem {
    /// Non-object elements yield a record with every field absent
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                id: take(&mut fields, "id"),
                user_id: take(&mut fields, "userId"),
                title: take(&mut fields, "title"),
                body: take(&mut fields, "body"),
            },
            _ => Self::default(),
        }
    }
}

fn take(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|v| !v.is_null())
}

/// Sanitized projection of a [`RawItem`]; `title` and `body` are markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub body: String,
}

/// What the widget is showing right now
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Loaded(Vec<DisplayItem>),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}
