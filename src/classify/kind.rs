use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::BannerError,
    schema::element::{
        AudioProperties, ButtonProperties, ClipartProperties, CountdownProperties, Element,
        EmbedProperties, FogProperties, ImageProperties, RainProperties, ShapeProperties,
        SnowProperties, SvgProperties, TextProperties, VideoProperties, YoutubeProperties,
    },
};

/// Layer kind, the value of an element's `layerType` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Text,
    Image,
    Video,
    Audio,
    Svg,
    Shape,
    Button,
    Embed,
    Youtube,
    Clipart,
    Countdown,
    Rain,
    Snow,
    Fog,
}

/// Tags that old documents still carry but that no longer render.
pub const RETIRED_LAYER_TAGS: &[&str] = &["menu"];

impl LayerKind {
    pub const ALL: [LayerKind; 14] = [
        Self::Text,
        Self::Image,
        Self::Video,
        Self::Audio,
        Self::Svg,
        Self::Shape,
        Self::Button,
        Self::Embed,
        Self::Youtube,
        Self::Clipart,
        Self::Countdown,
        Self::Rain,
        Self::Snow,
        Self::Fog,
    ];

    /// Parse a `layerType` tag. Unknown and retired tags give `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Svg => "svg",
            Self::Shape => "shape",
            Self::Button => "button",
            Self::Embed => "embed",
            Self::Youtube => "youtube",
            Self::Clipart => "clipart",
            Self::Countdown => "countdown",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Fog => "fog",
        }
    }

    pub fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Svg | Self::Video | Self::Audio)
    }

    pub fn is_weather(self) -> bool {
        matches!(self, Self::Rain | Self::Snow | Self::Fog)
    }

    /// Kinds that move on their own, with or without transitions.
    pub fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::Video
                | Self::Audio
                | Self::Youtube
                | Self::Embed
                | Self::Countdown
                | Self::Rain
                | Self::Snow
                | Self::Fog
        )
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerKind {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if RETIRED_LAYER_TAGS.contains(&s) {
            return Err(BannerError::schema_mismatch(format!(
                "layer type '{s}' is no longer supported"
            )));
        }
        Self::from_tag(s)
            .ok_or_else(|| BannerError::schema_mismatch(format!("unknown layer type '{s}'")))
    }
}

macro_rules! narrow {
    ($($fn_name:ident => $variant:ident($props:ty)),+ $(,)?) => {
        impl Element {
            $(
                pub fn $fn_name(&self) -> Option<&$props> {
                    match self {
                        Self::$variant { properties } => Some(properties),
                        _ => None,
                    }
                }
            )+
        }
    };
}

narrow! {
    as_text => Text(TextProperties),
    as_image => Image(ImageProperties),
    as_video => Video(VideoProperties),
    as_audio => Audio(AudioProperties),
    as_svg => Svg(SvgProperties),
    as_shape => Shape(ShapeProperties),
    as_button => Button(ButtonProperties),
    as_embed => Embed(EmbedProperties),
    as_youtube => Youtube(YoutubeProperties),
    as_clipart => Clipart(ClipartProperties),
    as_countdown => Countdown(CountdownProperties),
    as_rain => Rain(RainProperties),
    as_snow => Snow(SnowProperties),
    as_fog => Fog(FogProperties),
}

impl Element {
    pub fn kind(&self) -> LayerKind {
        match self {
            Self::Text { .. } => LayerKind::Text,
            Self::Image { .. } => LayerKind::Image,
            Self::Video { .. } => LayerKind::Video,
            Self::Audio { .. } => LayerKind::Audio,
            Self::Svg { .. } => LayerKind::Svg,
            Self::Shape { .. } => LayerKind::Shape,
            Self::Button { .. } => LayerKind::Button,
            Self::Embed { .. } => LayerKind::Embed,
            Self::Youtube { .. } => LayerKind::Youtube,
            Self::Clipart { .. } => LayerKind::Clipart,
            Self::Countdown { .. } => LayerKind::Countdown,
            Self::Rain { .. } => LayerKind::Rain,
            Self::Snow { .. } => LayerKind::Snow,
            Self::Fog { .. } => LayerKind::Fog,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/kind.rs"]
mod tests;
