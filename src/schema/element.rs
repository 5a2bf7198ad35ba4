use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    action::Action,
    fill::{Align, Background, CropData, Fill, ScaleMode, ShapeBorder},
    text::{FontSettings, TextTransform},
    transition::{Transition, TransitionMid},
};
use crate::foundation::error::{BannerError, BannerResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flip {
    Both,
    Horizontal,
    #[default]
    None,
    Vertical,
}

impl Flip {
    pub fn horizontal(self) -> bool {
        matches!(self, Self::Both | Self::Horizontal)
    }

    pub fn vertical(self) -> bool {
        matches!(self, Self::Both | Self::Vertical)
    }
}

/// Drop shadow. Only drawn when `use_shadow` is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    #[serde(default)]
    pub use_shadow: bool,
    #[serde(default)]
    pub h_shadow: f64,
    #[serde(default)]
    pub v_shadow: f64,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub spread: f64,
    #[serde(default)]
    pub color: String,
}

/// Layer blur. Only applied when `use_blur` is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blur {
    #[serde(default)]
    pub use_blur: bool,
    #[serde(default)]
    pub pixels: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Color,
    ColorBurn,
    ColorDodge,
    Darken,
    Difference,
    Exclusion,
    HardLight,
    Hue,
    Lighten,
    Luminosity,
    Multiply,
    #[default]
    Normal,
    Overlay,
    Saturation,
    Screen,
    SoftLight,
}

impl BlendMode {
    /// CSS `mix-blend-mode` keyword.
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::ColorBurn => "color-burn",
            Self::ColorDodge => "color-dodge",
            Self::Darken => "darken",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::HardLight => "hard-light",
            Self::Hue => "hue",
            Self::Lighten => "lighten",
            Self::Luminosity => "luminosity",
            Self::Multiply => "multiply",
            Self::Normal => "normal",
            Self::Overlay => "overlay",
            Self::Saturation => "saturation",
            Self::Screen => "screen",
            Self::SoftLight => "soft-light",
        }
    }
}

/// Color adjustment filter. Only applied when `use_adjust_color` is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustColor {
    #[serde(default)]
    pub use_adjust_color: bool,
    #[serde(default)]
    pub brightness: f64,
    #[serde(default)]
    pub contrast: f64,
    #[serde(default)]
    pub saturate: f64,
    #[serde(default)]
    pub hue: f64,
}

fn default_opacity() -> f64 {
    100.0
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_font_size() -> f64 {
    16.0
}

fn default_line_height() -> f64 {
    1.2
}

/// Attributes shared by every layer kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseProperties {
    pub id: u64,
    #[serde(default)]
    pub bannerset_element_id: Option<u64>,
    #[serde(default)]
    pub layer_name: String,
    #[serde(default)]
    pub drop_shadow: Option<Shadow>,
    #[serde(default)]
    pub blur: Option<Blur>,
    /// `0..=100`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Degrees, clockwise.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub flip: Flip,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub build_in: Option<Transition>,
    #[serde(default)]
    pub build_mid: Option<TransitionMid>,
    #[serde(default)]
    pub build_out: Option<Transition>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub locked_properties: Vec<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Multi-select group this layer belongs to. Not an ownership relation.
    #[serde(default)]
    pub group: Option<u64>,
    /// Raw feed binding; see [`crate::schema::feed`] for how it is discriminated.
    #[serde(default)]
    pub feed: Option<Value>,
}

impl BaseProperties {
    /// Check the numeric domains of the common attributes.
    pub fn validate(&self) -> BannerResult<()> {
        if !self.opacity.is_finite() || !(0.0..=100.0).contains(&self.opacity) {
            return Err(BannerError::invalid_range(format!(
                "element {}: opacity {} is outside 0..=100",
                self.id, self.opacity
            )));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(BannerError::invalid_range(format!(
                "element {}: width {} must be finite and >= 0",
                self.id, self.width
            )));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(BannerError::invalid_range(format!(
                "element {}: height {} must be finite and >= 0",
                self.id, self.height
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOutline {
    #[serde(default)]
    pub use_outline: Option<bool>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub alignment: TextAlign,
    #[serde(default)]
    pub vertical_align: VerticalAlign,
    #[serde(default)]
    pub content_height_type: Option<super::text::ContentHeight>,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    /// Text content in one of the three historical encodings.
    #[serde(default)]
    pub config: Option<Value>,
    #[serde(default)]
    pub text_shadow: Option<Shadow>,
    #[serde(default)]
    pub initial_font_size: Option<f64>,
    #[serde(default)]
    pub text_direction: Option<String>,
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub blend_mode: Option<BlendMode>,
    #[serde(default)]
    pub outline: Option<TextOutline>,
    /// Style fields of the oldest text shape, written straight onto the properties.
    #[serde(flatten)]
    pub inline_style: super::text::LegacyStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    pub url: String,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default)]
    pub horizontal_align: Align,
    #[serde(default)]
    pub vertical_align: Align,
    #[serde(default)]
    pub adjust_color: Option<AdjustColor>,
    #[serde(default = "default_one")]
    pub content_scale: f64,
    #[serde(default)]
    pub content_offset_x: f64,
    #[serde(default)]
    pub content_offset_y: f64,
    #[serde(default)]
    pub original_width: Option<f64>,
    #[serde(default)]
    pub original_height: Option<f64>,
    #[serde(default)]
    pub hq_url: Option<String>,
    #[serde(default)]
    pub crop_data: Option<CropData>,
    #[serde(default)]
    pub blend_mode: Option<BlendMode>,
    #[serde(default)]
    pub mask_image: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autoplay {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    pub url: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub scale_mode: ScaleMode,
    #[serde(default)]
    pub horizontal_align: Align,
    #[serde(default)]
    pub vertical_align: Align,
    #[serde(default)]
    pub adjust_color: Option<AdjustColor>,
    #[serde(default = "default_one")]
    pub content_scale: f64,
    #[serde(default)]
    pub original_width: Option<f64>,
    #[serde(default)]
    pub original_height: Option<f64>,
    #[serde(default)]
    pub crop_data: Option<CropData>,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub autoplay: Autoplay,
    #[serde(default)]
    pub controls: bool,
    #[serde(default, rename = "loop")]
    pub looped: bool,
    #[serde(default)]
    pub sound_on_hover: bool,
    #[serde(default = "default_one")]
    pub volume: f64,
    #[serde(default)]
    pub mask_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    pub url: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default = "default_one")]
    pub volume: f64,
    #[serde(default)]
    pub sound_on_hover: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    pub url: String,
    /// Original color → replacement color.
    #[serde(default)]
    pub color_groups: BTreeMap<String, String>,
    #[serde(default)]
    pub original_width: Option<f64>,
    #[serde(default)]
    pub original_height: Option<f64>,
    /// Key into the design's `resources` table.
    #[serde(default)]
    pub resource_key: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    #[default]
    Rectangle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default, rename = "type")]
    pub shape: ShapeType,
    #[serde(default)]
    pub background_color: Option<Fill>,
    #[serde(default)]
    pub border: Option<ShapeBorder>,
    #[serde(default)]
    pub crop_data: Option<CropData>,
    #[serde(default)]
    pub blend_mode: Option<BlendMode>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonLabelStyle {
    #[serde(flatten)]
    pub font: FontSettings,
    #[serde(default)]
    pub font_design: Option<String>,
    #[serde(default)]
    pub text_transform: Option<TextTransform>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub drop_shadow: Option<Shadow>,
    #[serde(default)]
    pub initial_font_size: Option<f64>,
    #[serde(default)]
    pub text_direction: Option<String>,
}

/// Overrides applied while the pointer is over a button. Each present field replaces the base
/// attribute of the same name outright.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverState {
    #[serde(default)]
    pub background_color: Option<Fill>,
    #[serde(default)]
    pub border: Option<ShapeBorder>,
    #[serde(default)]
    pub drop_shadow: Option<Shadow>,
    #[serde(default)]
    pub label_shadow: Option<Shadow>,
    #[serde(default)]
    pub label_style: Option<ButtonLabelStyle>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default)]
    pub button_label: String,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub background_color: Option<Fill>,
    #[serde(default)]
    pub background_over_color: Option<String>,
    #[serde(default)]
    pub label_shadow: Option<Shadow>,
    #[serde(default)]
    pub label_style: ButtonLabelStyle,
    #[serde(default)]
    pub label_offset_x: f64,
    #[serde(default)]
    pub label_offset_y: f64,
    #[serde(default)]
    pub border: Option<ShapeBorder>,
    #[serde(default)]
    pub hover_state: Option<HoverState>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseIframe {
    #[default]
    Auto,
    Yes,
    No,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    pub code: String,
    #[serde(default)]
    pub background_color: Option<Background>,
    #[serde(default)]
    pub use_border: Option<bool>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub margin: f64,
    #[serde(default)]
    pub original_width: Option<f64>,
    #[serde(default)]
    pub use_iframe: UseIframe,
    #[serde(default)]
    pub scrollbar: bool,
    #[serde(default)]
    pub auto_resize: bool,
    #[serde(default)]
    pub adjust_color: Option<AdjustColor>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(rename = "youtubeURL")]
    pub youtube_url: String,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default, rename = "loop")]
    pub looped: bool,
    #[serde(default)]
    pub adjust_color: Option<AdjustColor>,
    #[serde(default)]
    pub display_youtube_logo: bool,
    #[serde(default)]
    pub sound_on_mouse_over: bool,
    #[serde(default = "default_one")]
    pub volume: f64,
    #[serde(default)]
    pub start_at: bool,
    #[serde(default)]
    pub start_at_time: Option<String>,
    #[serde(default)]
    pub hide_controls: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipartProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default)]
    pub svg_object: Value,
}

/// Countdown target: a date string or a number of seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountValue {
    Seconds(f64),
    Date(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default)]
    pub count_to_date: bool,
    #[serde(default)]
    pub count_value: Option<CountValue>,
    /// Offset from UTC in hours.
    #[serde(default)]
    pub count_time_zone: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    #[serde(default = "default_one")]
    pub scale: f64,
    #[serde(default)]
    pub text_shadow: Option<Shadow>,
    #[serde(default)]
    pub alignment: TextAlign,
    /// Per-segment style records (text encoding B).
    #[serde(default)]
    pub config: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub density: f64,
    #[serde(default)]
    pub particle_size: f64,
    #[serde(default)]
    pub splash_effect: bool,
    #[serde(default)]
    pub splash_effect_particle_size: f64,
    #[serde(default)]
    pub splash_effect_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub density: f64,
    #[serde(default)]
    pub particle_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FogProperties {
    #[serde(flatten)]
    pub base: BaseProperties,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub density: f64,
}

/// A layer, tagged by `layerType`. The tag fixes which property set applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layerType", rename_all = "lowercase")]
pub enum Element {
    Text { properties: TextProperties },
    Image { properties: ImageProperties },
    Video { properties: VideoProperties },
    Audio { properties: AudioProperties },
    Svg { properties: SvgProperties },
    Shape { properties: ShapeProperties },
    Button { properties: ButtonProperties },
    Embed { properties: EmbedProperties },
    Youtube { properties: YoutubeProperties },
    Clipart { properties: ClipartProperties },
    Countdown { properties: CountdownProperties },
    Rain { properties: RainProperties },
    Snow { properties: SnowProperties },
    Fog { properties: FogProperties },
}

impl Element {
    /// Attributes shared by every kind.
    pub fn base(&self) -> &BaseProperties {
        match self {
            Self::Text { properties } => &properties.base,
            Self::Image { properties } => &properties.base,
            Self::Video { properties } => &properties.base,
            Self::Audio { properties } => &properties.base,
            Self::Svg { properties } => &properties.base,
            Self::Shape { properties } => &properties.base,
            Self::Button { properties } => &properties.base,
            Self::Embed { properties } => &properties.base,
            Self::Youtube { properties } => &properties.base,
            Self::Clipart { properties } => &properties.base,
            Self::Countdown { properties } => &properties.base,
            Self::Rain { properties } => &properties.base,
            Self::Snow { properties } => &properties.base,
            Self::Fog { properties } => &properties.base,
        }
    }

    pub fn id(&self) -> u64 {
        self.base().id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/element.rs"]
mod tests;
