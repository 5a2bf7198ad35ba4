use serde::{Deserialize, Serialize};

/// One gradient color stop: color `c` at normalized position `p`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradColor {
    /// CSS color string.
    pub c: String,
    /// Stop position in `[0, 1]`.
    pub p: f64,
}

/// How media content is fitted into its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleMode {
    /// Fill the box, ignoring aspect ratio.
    #[default]
    Stretch,
    /// Fit inside the box, keeping aspect ratio.
    Aspect,
    /// Cover the box, keeping aspect ratio.
    Mask,
    /// Repeat at intrinsic size.
    Tile,
    /// Editor-computed crop.
    Crop,
    /// User-drawn crop.
    UserCrop,
}

/// Media alignment keyword. Horizontal and vertical alignment share one vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Bottom,
    #[default]
    Center,
    Left,
    Middle,
    Right,
    Top,
}

impl Align {
    /// CSS keyword for this alignment (`middle` is spelled `center` in CSS).
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Center | Self::Middle => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
        }
    }
}

/// Anchor of a radial gradient, spelled `"<vertical> <horizontal>"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadialAnchor {
    #[default]
    #[serde(rename = "center center")]
    CenterCenter,
    #[serde(rename = "center right")]
    CenterRight,
    #[serde(rename = "center left")]
    CenterLeft,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "bottom center")]
    BottomCenter,
    #[serde(rename = "bottom right")]
    BottomRight,
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "top right")]
    TopRight,
}

impl RadialAnchor {
    /// The anchor as it is spelled in documents (also a valid CSS `<position>`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CenterCenter => "center center",
            Self::CenterRight => "center right",
            Self::CenterLeft => "center left",
            Self::BottomLeft => "bottom left",
            Self::BottomCenter => "bottom center",
            Self::BottomRight => "bottom right",
            Self::TopLeft => "top left",
            Self::TopCenter => "top center",
            Self::TopRight => "top right",
        }
    }
}

/// Crop rectangle in source-media pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Flat color fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidFill {
    /// CSS color string.
    pub scolor: String,
    /// Feed binding (text gradients only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<serde_json::Value>,
}

/// Linear gradient fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradientFill {
    #[serde(default)]
    pub grad_colors: Vec<GradColor>,
    /// Gradient angle in degrees.
    #[serde(default)]
    pub background_rotation: Option<f64>,
}

/// Radial gradient fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialGradientFill {
    #[serde(default)]
    pub grad_colors: Vec<GradColor>,
    #[serde(default)]
    pub rgrad_pos: Option<RadialAnchor>,
}

/// Image fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFill {
    pub url: String,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default)]
    pub horizontal_align: Align,
    #[serde(default)]
    pub vertical_align: Align,
    #[serde(default)]
    pub background_rotation: Option<f64>,
    #[serde(default)]
    pub content_scale: Option<f64>,
    #[serde(default)]
    pub content_offset_x: Option<f64>,
    #[serde(default)]
    pub content_offset_y: Option<f64>,
    #[serde(default)]
    pub original_width: Option<f64>,
    #[serde(default)]
    pub original_height: Option<f64>,
    #[serde(default)]
    pub hq_url: Option<String>,
    #[serde(default)]
    pub crop_data: Option<CropData>,
}

/// Paint source variants, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Background {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "solid")]
    Solid(SolidFill),
    #[serde(rename = "lgrad")]
    LinearGradient(LinearGradientFill),
    #[serde(rename = "rgrad")]
    RadialGradient(RadialGradientFill),
    #[serde(rename = "image")]
    Image(ImageFill),
}

/// Border presence flag and color that ride along with a fill.
///
/// The color is only meaningful when `use_border` is explicitly `true`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderFlag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_border: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// A fill plus its optional border, as attached to designs, shapes, buttons and embeds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    #[serde(flatten)]
    pub background: Background,
    #[serde(flatten)]
    pub border: BorderFlag,
}

impl Fill {
    /// A fill that paints nothing and has no border.
    pub fn none() -> Self {
        Self {
            background: Background::None,
            border: BorderFlag::default(),
        }
    }
}

/// Stroked outline of a shape or button: `{color, weight, radius}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeBorder {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub radius: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/schema/fill.rs"]
mod tests;
