//! Retrieval of raw documents by identifier.

pub mod fs;

pub use fs::FsSource;

use serde_json::Value;

use crate::{
    foundation::error::{BannerError, BannerResult},
    schema::design::Design,
};

/// Looks documents up by identifier. Implementations do their own I/O, timeouts and retries;
/// the resolvers never see any of it.
pub trait DocumentSource: Send + Sync {
    /// Raw JSON for `id`, or [`BannerError::NotFound`].
    fn fetch(&self, id: &str) -> BannerResult<Value>;

    /// Fetch and decode `id`.
    fn load(&self, id: &str) -> BannerResult<Design> {
        Design::from_value(unwrap_envelope(self.fetch(id)?)?)
    }
}

/// Hosted payloads wrap the design as `{"banner": {...}}`; bare designs pass through.
pub fn unwrap_envelope(value: Value) -> BannerResult<Value> {
    match value {
        Value::Object(mut map) if map.contains_key("banner") && !map.contains_key("properties") => {
            map.remove("banner")
                .ok_or_else(|| BannerError::missing_field("envelope: banner"))
        }
        other => Ok(other),
    }
}
