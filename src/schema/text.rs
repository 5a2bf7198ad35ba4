//! Canonical text model plus the wire shapes of the legacy text encodings.
//!
//! Only [`TextDocument`] is understood by the resolvers. The legacy shapes exist so the adapter
//! in [`crate::text`] can decode them; nothing else should match on them.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::fill::Background;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontType {
    Google,
    Custom,
    All,
    Bannersnack,
    Creatopy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Regular,
    Slanted,
    Oblique,
}

/// Numeric font weight. Documents write it as a number or a string (`"700"`, `"bold"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontWeight(pub u16);

impl Default for FontWeight {
    fn default() -> Self {
        Self(400)
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(n) if n.is_finite() && (1.0..=1000.0).contains(&n) => Ok(Self(n as u16)),
            Repr::Num(n) => Err(D::Error::custom(format!("font weight {n} is out of range"))),
            Repr::Str(s) => match s.trim() {
                "normal" | "regular" => Ok(Self(400)),
                "bold" => Ok(Self(700)),
                other => other
                    .parse::<u16>()
                    .map(Self)
                    .map_err(|_| D::Error::custom(format!("unknown font weight '{other}'"))),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    #[serde(default)]
    pub font_family: String,
    #[serde(default)]
    pub font_type: Option<FontType>,
    #[serde(default)]
    pub font_style: Option<FontStyle>,
    #[serde(default)]
    pub font_prefix: Option<String>,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub font_face_url: Option<String>,
    #[serde(default)]
    pub font_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScript {
    #[default]
    None,
    Superscript,
    Subscript,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Typography {
    Heading,
    Subheading,
    Body,
}

/// What a text box does when its content does not fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBoundary {
    /// Deprecated alias kept for old documents; new documents use [`ContentHeight`].
    #[default]
    Overflow,
    Shrink,
    Ellipsis,
    Autoscroll,
}

/// Height behaviour of a text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentHeight {
    #[default]
    Auto,
    Fixed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundary {
    #[serde(default, rename = "type")]
    pub kind: Option<ContentBoundary>,
    #[serde(default)]
    pub min_font_size: Option<f64>,
}

/// Run-level styling of a text leaf.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStyle {
    #[serde(default)]
    pub font_settings: FontSettings,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_script: TextScript,
    #[serde(default)]
    pub text_decoration: TextDecoration,
    #[serde(default)]
    pub text_transform: TextTransform,
    #[serde(default)]
    pub typography: Option<Typography>,
    #[serde(default)]
    pub gradient: Option<Background>,
    #[serde(default)]
    pub font_size_percent: Option<f64>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub feed: Option<Value>,
}

/// A text leaf: one styled run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub style: RunStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_text: Option<Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Paragraph,
    Legacy,
    Subparagraph,
    Wrapper,
    BulletList,
    NumberList,
    ListItem,
    FeedChip,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_font_settings: Option<FontSettings>,
    #[serde(default)]
    pub children: Vec<TextNode>,
}

impl TextBlock {
    pub fn paragraph(children: Vec<TextNode>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            default_font_settings: None,
            children,
        }
    }
}

/// A node of the canonical text tree. Blocks have `children`, leaves do not.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextNode {
    Block(TextBlock),
    Run(TextRun),
}

impl<'de> Deserialize<'de> for TextNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.get("children").is_some() {
            serde_json::from_value(value)
                .map(Self::Block)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Self::Run)
                .map_err(D::Error::custom)
        }
    }
}

/// Canonical text content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    pub nodes: Vec<TextNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
}

impl TextDocument {
    /// Leaves in document order.
    pub fn runs(&self) -> Vec<&TextRun> {
        fn collect<'a>(nodes: &'a [TextNode], out: &mut Vec<&'a TextRun>) {
            for node in nodes {
                match node {
                    TextNode::Block(b) => collect(&b.children, out),
                    TextNode::Run(r) => out.push(r),
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.nodes, &mut out);
        out
    }

    /// Concatenated run text; top-level nodes are separated by newlines.
    pub fn plain_text(&self) -> String {
        fn text_of(node: &TextNode, out: &mut String) {
            match node {
                TextNode::Block(b) => b.children.iter().for_each(|c| text_of(c, out)),
                TextNode::Run(r) => out.push_str(&r.text),
            }
        }

        self.nodes
            .iter()
            .map(|n| {
                let mut s = String::new();
                text_of(n, &mut s);
                s
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Encoding A wire shape.
#[derive(Clone, Debug, Deserialize)]
pub struct SlateConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub nodes: Vec<TextNode>,
    #[serde(default)]
    pub boundary: Option<Boundary>,
}

/// Style record of encodings B and C (and countdown configs).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStyle {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_type: Option<FontType>,
    #[serde(default)]
    pub font_style: Option<FontStyle>,
    #[serde(default)]
    pub font_prefix: Option<String>,
    #[serde(default)]
    pub font_weight: Option<FontWeight>,
    #[serde(default)]
    pub font_face_url: Option<String>,
    #[serde(default)]
    pub font_url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl LegacyStyle {
    /// The run styling this legacy record stands for.
    pub fn run_style(&self) -> RunStyle {
        RunStyle {
            font_settings: FontSettings {
                font_family: self.font_family.clone().unwrap_or_default(),
                font_type: self.font_type,
                font_style: self.font_style,
                font_prefix: self.font_prefix.clone(),
                font_weight: self.font_weight.unwrap_or_default(),
                font_face_url: self.font_face_url.clone(),
                font_url: self.font_url.clone(),
            },
            color: self.color.clone(),
            text_decoration: self.text_decoration.unwrap_or_default(),
            ..RunStyle::default()
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct LegacyChild {
    pub style: LegacyStyle,
}

/// Encoding B record: one paragraph.
#[derive(Clone, Debug, Deserialize)]
pub struct LegacyRecord {
    pub style: LegacyStyle,
    pub children: Vec<LegacyChild>,
}

/// Encoding C record.
#[derive(Clone, Debug, Deserialize)]
pub struct LegacySingle {
    pub style: LegacyStyle,
}

#[cfg(test)]
#[path = "../../tests/unit/schema/text.rs"]
mod tests;
