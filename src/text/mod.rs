//! Text content normalization.
//!
//! Every text-bearing layer ends up as a [`TextDocument`], whatever encoding its document was
//! saved with.

pub mod legacy;

pub use legacy::{TextEncoding, adapt, detect};

use serde_json::Value;

use crate::{
    foundation::error::BannerResult,
    schema::{
        element::{CountdownProperties, TextProperties},
        text::TextDocument,
    },
};

/// Canonical content of a text layer.
///
/// A layer without `config` is the oldest shape, with its style written straight onto the
/// properties.
pub fn text_content(props: &TextProperties) -> BannerResult<TextDocument> {
    match &props.config {
        None | Some(Value::Null) => Ok(legacy::adapt_single(
            &props.inline_style,
            props.text.as_deref(),
        )),
        Some(config) => adapt(config, props.text.as_deref()),
    }
}

/// Canonical content of a countdown layer's segment styles. No config means no styled segments.
pub fn countdown_content(props: &CountdownProperties) -> BannerResult<TextDocument> {
    match &props.config {
        None | Some(Value::Null) => Ok(TextDocument::default()),
        Some(config) => adapt(config, None),
    }
}
