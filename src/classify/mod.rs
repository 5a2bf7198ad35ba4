//! Kind classification and capability predicates.
//!
//! Every answer here is derived from the kind tag and slot presence only; nothing inspects
//! kind-specific attributes.

pub mod kind;

use serde_json::Value;

pub use kind::{LayerKind, RETIRED_LAYER_TAGS};

use crate::schema::{element::Element, transition::TransitionType};

/// Shape of a raw tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeClass {
    Design,
    Slide,
    Element,
}

/// Decide which of the three node shapes a raw JSON value takes.
///
/// `type == "slide"` is a slide; `type == "layer"` or any `layerType` key is an element;
/// everything else is a design root.
pub fn classify_node(value: &Value) -> NodeClass {
    match value.get("type").and_then(Value::as_str) {
        Some("slide") => NodeClass::Slide,
        Some("layer") => NodeClass::Element,
        _ if value.get("layerType").is_some() => NodeClass::Element,
        _ => NodeClass::Design,
    }
}

pub fn is_media(element: &Element) -> bool {
    element.kind().is_media()
}

pub fn is_weather(element: &Element) -> bool {
    element.kind().is_weather()
}

/// True when all three transition slots are present and at least one is not `none`.
///
/// A single absent slot makes this false even if the others animate.
pub fn has_animation(element: &Element) -> bool {
    let base = element.base();
    match (&base.build_in, &base.build_mid, &base.build_out) {
        (Some(build_in), Some(build_mid), Some(build_out)) => [
            &build_in.kind,
            &build_mid.kind,
            &build_out.kind,
        ]
        .into_iter()
        .any(|kind| *kind != TransitionType::None),
        _ => false,
    }
}

pub fn is_animated(element: &Element) -> bool {
    has_animation(element) || element.kind().is_time_based()
}

#[cfg(test)]
#[path = "../../tests/unit/classify/mod.rs"]
mod tests;
