use std::{collections::BTreeMap, io::Read, path::Path};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{
    element::Element,
    fill::Fill,
    transition::SlideTransition,
};
use crate::{
    classify::{LayerKind, NodeClass, classify_node},
    foundation::error::{BannerError, BannerResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureUnit {
    #[default]
    Px,
    Mm,
    Cm,
    In,
}

impl MeasureUnit {
    /// CSS length unit for this measure.
    pub fn css_unit(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::In => "in",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignProperties {
    #[serde(default)]
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub measure_unit: MeasureUnit,
    #[serde(default, rename = "loop")]
    pub looped: bool,
    #[serde(default)]
    pub loop_count: Option<u32>,
    #[serde(default)]
    pub background_color: Option<Fill>,
    /// Last element id handed out. Ids are never reused.
    pub last_id: u64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub feed: Option<Value>,
    #[serde(default)]
    pub sort_index: Option<i64>,
    #[serde(default)]
    pub image_quality: Option<f64>,
    #[serde(default)]
    pub banner_size: Option<String>,
    #[serde(default)]
    pub custom_size: Option<bool>,
    #[serde(default)]
    pub preset_size: Option<bool>,
    #[serde(default)]
    pub show_guidelines: bool,
    #[serde(default)]
    pub size_variation: Option<String>,
    #[serde(default)]
    pub fallback_image_position: Option<f64>,
    #[serde(default)]
    pub fallback_image_slide_index: Option<u64>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub use_as_click_tag: Option<bool>,
}

/// Snapping guides, in design pixels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Guidelines {
    #[serde(default)]
    pub v: Vec<f64>,
    #[serde(default)]
    pub h: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideProperties {
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
    /// Deprecated numeric id.
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub bannerset_element_id: Option<u64>,
    #[serde(default)]
    pub stop_slide: bool,
    #[serde(default)]
    pub guidelines: Option<Guidelines>,
    #[serde(default)]
    pub transition: Option<SlideTransition>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub properties: SlideProperties,
    #[serde(default)]
    pub elements: Vec<Layer>,
}

/// A layer that decoded to no known kind. Kept so the walker can report it in place.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsupportedLayer {
    pub layer_type: Option<String>,
    pub id: Option<u64>,
    pub reason: String,
}

/// Entry of an element list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Layer {
    Supported(Element),
    Unsupported(UnsupportedLayer),
}

impl Layer {
    pub fn element(&self) -> Option<&Element> {
        match self {
            Self::Supported(e) => Some(e),
            Self::Unsupported(_) => None,
        }
    }

    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let id = value
            .get("properties")
            .and_then(|p| p.get("id"))
            .and_then(Value::as_u64);

        if classify_node(&value) != NodeClass::Element {
            return Ok(Self::Unsupported(UnsupportedLayer {
                layer_type: None,
                id,
                reason: "node in an element list is not a layer".to_string(),
            }));
        }

        let tag = value.get("layerType").and_then(Value::as_str).map(str::to_string);
        let known = tag.as_deref().and_then(LayerKind::from_tag);
        match (known, tag) {
            (Some(_), _) => serde_json::from_value(value).map(Self::Supported),
            (None, Some(tag)) => {
                let reason = tag
                    .parse::<LayerKind>()
                    .err()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                Ok(Self::Unsupported(UnsupportedLayer {
                    layer_type: Some(tag),
                    id,
                    reason,
                }))
            }
            (None, None) => Ok(Self::Unsupported(UnsupportedLayer {
                layer_type: None,
                id,
                reason: "layer has no string layerType".to_string(),
            })),
        }
    }
}

impl<'de> Deserialize<'de> for Layer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::from_value(Value::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

/// Child of the design root: a slide, or an element of a single-slide document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Slide(Slide),
    Layer(Layer),
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match classify_node(&value) {
            NodeClass::Slide => serde_json::from_value(value)
                .map(Self::Slide)
                .map_err(D::Error::custom),
            NodeClass::Element | NodeClass::Design => Layer::from_value(value)
                .map(Self::Layer)
                .map_err(D::Error::custom),
        }
    }
}

/// Inline resource body referenced by svg layers through `resourceKey`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub content: String,
    #[serde(default)]
    pub usages: u64,
}

/// Root of a banner document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub properties: DesignProperties,
    #[serde(default)]
    pub elements: Vec<Node>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

impl Design {
    /// Decode a design from an already parsed JSON value.
    pub fn from_value(value: Value) -> BannerResult<Self> {
        if !value.is_object() {
            return Err(BannerError::schema_mismatch("design root must be a JSON object"));
        }
        match classify_node(&value) {
            NodeClass::Design => {}
            other => {
                return Err(BannerError::schema_mismatch(format!(
                    "expected a design root, found a {other:?} node"
                )));
            }
        }
        if value.get("properties").is_none() {
            return Err(BannerError::missing_field("design: properties"));
        }
        serde_json::from_value(value).map_err(|e| BannerError::from_decode("design", e))
    }

    pub fn from_json_str(s: &str) -> BannerResult<Self> {
        let value: Value =
            serde_json::from_str(s).map_err(|e| BannerError::from_decode("design", e))?;
        Self::from_value(value)
    }

    pub fn from_reader(reader: impl Read) -> BannerResult<Self> {
        let value: Value =
            serde_json::from_reader(reader).map_err(|e| BannerError::from_decode("design", e))?;
        Self::from_value(value)
    }

    pub fn from_path(path: impl AsRef<Path>) -> BannerResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            BannerError::Other(anyhow::Error::new(e).context(format!("open '{}'", path.display())))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// True when the root children are slides rather than bare elements.
    pub fn has_slides(&self) -> bool {
        self.elements.iter().any(|n| matches!(n, Node::Slide(_)))
    }

    /// Every decoded element, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().flat_map(|node| -> Box<dyn Iterator<Item = &Element> + '_> {
            match node {
                Node::Slide(slide) => Box::new(slide.elements.iter().filter_map(Layer::element)),
                Node::Layer(layer) => Box::new(layer.element().into_iter()),
            }
        })
    }

    pub fn max_element_id(&self) -> Option<u64> {
        self.elements().map(Element::id).max()
    }

    /// Check the cross-field invariants serde cannot express.
    pub fn validate(&self) -> BannerResult<()> {
        let p = &self.properties;
        if !p.width.is_finite() || p.width < 0.0 || !p.height.is_finite() || p.height < 0.0 {
            return Err(BannerError::invalid_range(format!(
                "design size {}x{} must be finite and >= 0",
                p.width, p.height
            )));
        }
        if let Some(max_id) = self.max_element_id()
            && max_id > p.last_id
        {
            return Err(BannerError::invalid_range(format!(
                "lastId {} is below the largest element id {max_id}",
                p.last_id
            )));
        }
        for element in self.elements() {
            element.base().validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/design.rs"]
mod tests;
