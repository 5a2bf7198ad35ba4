//! Render descriptors: what adapters consume.
//!
//! Geometry is absolute, in design pixels. Opacity is normalized to `0..=1`; every other
//! number is the document's own value.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::{
    action::ActionDescriptor,
    animation::AnimationDescriptor,
    fill::{PaintDescriptor, Stroke},
};
use crate::{
    classify::LayerKind,
    foundation::core::{Affine, Rect, box_bounds},
    schema::{
        element::{BlendMode, ButtonLabelStyle, CountValue, ShapeType, TextAlign, UseIframe, VerticalAlign},
        feed::LayerFeed,
        fill::{Align, CropData, ScaleMode},
        text::{ContentBoundary, ContentHeight, TextDocument},
    },
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_deg: f64,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Rotation about the box centre composed with the flip, in design space.
    pub transform: Affine,
}

impl Geometry {
    pub fn bounds(&self) -> Rect {
        box_bounds(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowDescriptor {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorAdjustment {
    pub brightness: f64,
    pub contrast: f64,
    pub saturate: f64,
    pub hue: f64,
}

/// Media source and its placement, in application order: crop, then alignment and scale,
/// then color adjustment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPlacement {
    pub url: String,
    pub hq_url: Option<String>,
    pub crop: Option<CropData>,
    pub horizontal_align: Align,
    pub vertical_align: Align,
    pub scale_mode: ScaleMode,
    pub content_scale: f64,
    pub content_offset_x: f64,
    pub content_offset_y: f64,
    pub intrinsic_width: Option<f64>,
    pub intrinsic_height: Option<f64>,
    pub color_adjust: Option<ColorAdjustment>,
    pub mask_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub document: TextDocument,
    pub font_size: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
    pub alignment: TextAlign,
    pub vertical_align: VerticalAlign,
    pub height_mode: ContentHeight,
    pub boundary: ContentBoundary,
    pub min_font_size: Option<f64>,
    pub text_shadow: Option<ShadowDescriptor>,
    pub outline: Option<Stroke>,
    pub scale: Option<f64>,
    pub text_direction: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    #[serde(flatten)]
    pub media: MediaPlacement,
    pub format: Option<String>,
    pub start_time: f64,
    pub end_time: Option<f64>,
    pub duration: Option<f64>,
    pub autoplay: bool,
    pub controls: bool,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub sound_on_hover: bool,
    pub volume: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioContent {
    pub url: String,
    pub format: Option<String>,
    pub start_time: f64,
    pub end_time: Option<f64>,
    pub duration: Option<f64>,
    pub volume: f64,
    pub sound_on_hover: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgContent {
    pub url: String,
    pub color_groups: BTreeMap<String, String>,
    pub intrinsic_width: Option<f64>,
    pub intrinsic_height: Option<f64>,
    /// Inline body from the design's resource table, when the layer references one.
    pub inline_source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeContent {
    pub shape: ShapeType,
    pub fill: Option<PaintDescriptor>,
    pub border: Option<Stroke>,
    pub crop: Option<CropData>,
}

/// Everything about a button that the hover state can swap out.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonState {
    pub fill: Option<PaintDescriptor>,
    pub border: Option<Stroke>,
    pub shadow: Option<ShadowDescriptor>,
    pub label_shadow: Option<ShadowDescriptor>,
    pub label_style: ButtonLabelStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonContent {
    pub label: String,
    pub html: Option<String>,
    pub label_offset_x: f64,
    pub label_offset_y: f64,
    pub normal: ButtonState,
    pub hover: Option<ButtonState>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedContent {
    pub code: String,
    pub fill: Option<PaintDescriptor>,
    pub margin: f64,
    pub use_iframe: UseIframe,
    pub scrollbar: bool,
    pub auto_resize: bool,
    pub color_adjust: Option<ColorAdjustment>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeContent {
    pub url: String,
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub display_logo: bool,
    pub sound_on_mouse_over: bool,
    pub volume: f64,
    /// Start offset, set only when the layer opts into starting mid-video.
    pub start_at: Option<String>,
    pub hide_controls: bool,
    pub color_adjust: Option<ColorAdjustment>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownContent {
    pub count_to_date: bool,
    pub count_value: Option<CountValue>,
    pub count_time_zone: f64,
    pub font_size: f64,
    pub letter_spacing: f64,
    pub line_height: f64,
    pub scale: f64,
    pub alignment: TextAlign,
    pub text_shadow: Option<ShadowDescriptor>,
    /// Segment styles, adapted like legacy text records.
    pub segments: TextDocument,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Splash {
    pub size: f64,
    pub particle_size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherContent {
    pub size: f64,
    pub speed: f64,
    pub density: f64,
    pub particle_size: Option<f64>,
    pub splash: Option<Splash>,
}

/// Kind-specific part of a descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Content {
    Text(TextContent),
    Image(MediaPlacement),
    Video(VideoContent),
    Audio(AudioContent),
    Svg(SvgContent),
    Shape(ShapeContent),
    Button(ButtonContent),
    Embed(EmbedContent),
    Youtube(YoutubeContent),
    Clipart { svg_object: Value },
    Countdown(CountdownContent),
    Rain(WeatherContent),
    Snow(WeatherContent),
    Fog(WeatherContent),
}

/// Feed binding as seen by adapters.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FeedDescriptor {
    Bound { binding: LayerFeed },
    Unrecognized { reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    pub id: u64,
    pub kind: LayerKind,
    pub name: String,
    pub group: Option<u64>,
    pub visible: bool,
    pub geometry: Geometry,
    /// `0..=1`.
    pub opacity: f64,
    pub shadow: Option<ShadowDescriptor>,
    /// Blur radius in pixels.
    pub blur: Option<f64>,
    pub blend_mode: Option<BlendMode>,
    pub animation: AnimationDescriptor,
    pub actions: Vec<ActionDescriptor>,
    pub feed: Option<FeedDescriptor>,
    pub content: Content,
}
