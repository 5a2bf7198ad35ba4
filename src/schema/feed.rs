//! Data-feed bindings and the rule that tells their two dialects apart.
//!
//! Documents come from two editors that write feed bindings differently:
//!
//! - editor dialect: a map from property name to a column name (or `null`);
//! - ad-studio dialect: a map from property name to `{hash, column, index?}` (or `null`, or an
//!   array of those).
//!
//! Discrimination is structural and total over JSON values:
//!
//! 1. `null`, an absent field and `{}` are [`FeedClass::Absent`];
//! 2. an object whose values are all strings or `null` is the editor dialect (so an all-`null`
//!    map is editor);
//! 3. an object whose values are all `null`, bind objects, or arrays of `null`/bind objects is
//!    the ad-studio dialect;
//! 4. anything else is [`FeedClass::Unrecognized`]. Callers warn and carry on.
//!
//! For design-level feeds, a `hashes` key selects the ad-studio dialect and wins over `hash`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ad-studio column binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBind {
    pub hash: String,
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

/// Element-level feed binding, after discrimination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dialect", content = "bindings", rename_all = "camelCase")]
pub enum LayerFeed {
    Editor(BTreeMap<String, Option<String>>),
    AdStudio(BTreeMap<String, Vec<Option<ColumnBind>>>),
}

/// Editor-dialect design feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorDesignFeed {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub row: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedRow {
    pub hash: String,
    pub row: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedColumn {
    pub hash: String,
    pub column: String,
}

/// Ad-studio-dialect design feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdStudioDesignFeed {
    #[serde(default)]
    pub hashes: Vec<FeedRow>,
    #[serde(default)]
    pub properties: BTreeMap<String, FeedColumn>,
}

/// Design-level feed binding, after discrimination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dialect", content = "feed", rename_all = "camelCase")]
pub enum DesignFeed {
    Editor(EditorDesignFeed),
    AdStudio(AdStudioDesignFeed),
}

/// Outcome of feed discrimination.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedClass<T> {
    Absent,
    Bound(T),
    /// The value matched neither dialect; the reason is human readable.
    Unrecognized(String),
}

impl<T> FeedClass<T> {
    pub fn bound(self) -> Option<T> {
        match self {
            Self::Bound(t) => Some(t),
            Self::Absent | Self::Unrecognized(_) => None,
        }
    }
}

pub fn classify_layer_feed(value: Option<&Value>) -> FeedClass<LayerFeed> {
    let map = match value {
        None | Some(Value::Null) => return FeedClass::Absent,
        Some(Value::Object(map)) => map,
        Some(other) => {
            return FeedClass::Unrecognized(format!("feed must be an object, got {}", type_name(other)));
        }
    };
    if map.is_empty() {
        return FeedClass::Absent;
    }

    if map.values().all(|v| v.is_null() || v.is_string()) {
        let bindings = map
            .iter()
            .map(|(k, v)| (k.clone(), v.as_str().map(str::to_string)))
            .collect();
        return FeedClass::Bound(LayerFeed::Editor(bindings));
    }

    let mut bindings = BTreeMap::new();
    for (key, v) in map {
        let binds = match v {
            Value::Array(items) => items.iter().map(column_bind).collect::<Option<Vec<_>>>(),
            single => column_bind(single).map(|b| vec![b]),
        };
        let Some(binds) = binds else {
            return FeedClass::Unrecognized(format!(
                "feed property '{key}' is neither a column name nor a hash/column binding"
            ));
        };
        bindings.insert(key.clone(), binds);
    }
    FeedClass::Bound(LayerFeed::AdStudio(bindings))
}

pub fn classify_design_feed(value: Option<&Value>) -> FeedClass<DesignFeed> {
    let map = match value {
        None | Some(Value::Null) => return FeedClass::Absent,
        Some(Value::Object(map)) => map,
        Some(other) => {
            return FeedClass::Unrecognized(format!(
                "design feed must be an object, got {}",
                type_name(other)
            ));
        }
    };
    if map.is_empty() {
        return FeedClass::Absent;
    }

    let value = Value::Object(map.clone());
    if map.contains_key("hashes") {
        match serde_json::from_value::<AdStudioDesignFeed>(value) {
            Ok(feed) => FeedClass::Bound(DesignFeed::AdStudio(feed)),
            Err(e) => FeedClass::Unrecognized(format!("ad-studio design feed: {e}")),
        }
    } else if map.contains_key("hash") {
        match serde_json::from_value::<EditorDesignFeed>(value) {
            Ok(feed) => FeedClass::Bound(DesignFeed::Editor(feed)),
            Err(e) => FeedClass::Unrecognized(format!("editor design feed: {e}")),
        }
    } else {
        FeedClass::Unrecognized("design feed has neither 'hash' nor 'hashes'".to_string())
    }
}

// `Some(None)` is an explicit null bind; `None` means the value is not a bind at all.
fn column_bind(v: &Value) -> Option<Option<ColumnBind>> {
    match v {
        Value::Null => Some(None),
        Value::Object(obj) => {
            let hash = obj.get("hash")?.as_str()?.to_string();
            let column = obj.get("column")?.as_str()?.to_string();
            let index = match obj.get("index") {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                Some(_) => return None,
            };
            Some(Some(ColumnBind {
                hash,
                column,
                index,
            }))
        }
        _ => None,
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/feed.rs"]
mod tests;
