use std::collections::BTreeMap;

use super::{
    action::resolve_actions,
    animation::resolve_animation,
    descriptor::{
        AudioContent, ButtonContent, ButtonState, ColorAdjustment, Content, CountdownContent,
        ElementDescriptor, EmbedContent, FeedDescriptor, Geometry, MediaPlacement,
        ShadowDescriptor, ShapeContent, Splash, SvgContent, TextContent, VideoContent,
        WeatherContent, YoutubeContent,
    },
    fill::{FILL_BORDER_WIDTH, PaintDescriptor, Stroke, resolve_fill, shape_border},
};
use crate::{
    config::ResolveConfig,
    foundation::{
        core::{box_bounds, box_transform},
        error::BannerResult,
    },
    schema::{
        design::Resource,
        element::{
            AdjustColor, Autoplay, BaseProperties, BlendMode, Blur, ButtonProperties, Element,
            ImageProperties, Shadow, TextOutline, TextProperties, VideoProperties,
        },
        feed::{FeedClass, classify_layer_feed},
        fill::{Background, BorderFlag, Fill},
    },
    text::{countdown_content, text_content},
};

/// Inputs shared by every element of one resolution pass.
#[derive(Clone, Copy, Debug)]
pub struct ResolveContext<'a> {
    pub config: &'a ResolveConfig,
    pub resources: Option<&'a BTreeMap<String, Resource>>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(config: &'a ResolveConfig) -> Self {
        Self {
            config,
            resources: None,
        }
    }

    pub fn with_resources(mut self, resources: &'a BTreeMap<String, Resource>) -> Self {
        self.resources = Some(resources);
        self
    }
}

/// Resolve one element into its render descriptor.
pub fn resolve_element(element: &Element, ctx: &ResolveContext<'_>) -> BannerResult<ElementDescriptor> {
    let base = element.base();
    base.validate()?;

    let content = match element {
        Element::Text { properties } => Content::Text(text(properties)?),
        Element::Image { properties } => Content::Image(image(properties, ctx.config)?),
        Element::Video { properties } => Content::Video(video(properties, ctx.config)?),
        Element::Audio { properties: p } => Content::Audio(AudioContent {
            url: ctx.config.resolve_asset(&p.url)?,
            format: p.format.clone(),
            start_time: p.start_time,
            end_time: p.end_time,
            duration: p.duration,
            volume: p.volume,
            sound_on_hover: p.sound_on_hover,
        }),
        Element::Svg { properties: p } => {
            let inline_source = p
                .resource_key
                .as_deref()
                .and_then(|key| ctx.resources?.get(key))
                .map(|r| r.content.clone());
            Content::Svg(SvgContent {
                url: ctx.config.resolve_asset(&p.url)?,
                color_groups: p.color_groups.clone(),
                intrinsic_width: p.original_width,
                intrinsic_height: p.original_height,
                inline_source,
            })
        }
        Element::Shape { properties: p } => Content::Shape(ShapeContent {
            shape: p.shape,
            fill: optional_fill(p.background_color.as_ref(), ctx.config)?,
            border: shape_border(p.border.as_ref())?,
            crop: p.crop_data,
        }),
        Element::Button { properties } => Content::Button(button(properties, ctx.config)?),
        Element::Embed { properties: p } => {
            let fill = Fill {
                background: p.background_color.clone().unwrap_or(Background::None),
                border: BorderFlag {
                    use_border: p.use_border,
                    border_color: p.border_color.clone(),
                },
            };
            Content::Embed(EmbedContent {
                code: p.code.clone(),
                fill: resolve_fill(&fill, ctx.config)?,
                margin: p.margin,
                use_iframe: p.use_iframe,
                scrollbar: p.scrollbar,
                auto_resize: p.auto_resize,
                color_adjust: color_adjust(p.adjust_color.as_ref()),
            })
        }
        Element::Youtube { properties: p } => Content::Youtube(YoutubeContent {
            url: p.youtube_url.clone(),
            autoplay: p.autoplay,
            looped: p.looped,
            display_logo: p.display_youtube_logo,
            sound_on_mouse_over: p.sound_on_mouse_over,
            volume: p.volume,
            start_at: if p.start_at {
                p.start_at_time.clone()
            } else {
                None
            },
            hide_controls: p.hide_controls,
            color_adjust: color_adjust(p.adjust_color.as_ref()),
        }),
        Element::Clipart { properties: p } => Content::Clipart {
            svg_object: p.svg_object.clone(),
        },
        Element::Countdown { properties: p } => Content::Countdown(CountdownContent {
            count_to_date: p.count_to_date,
            count_value: p.count_value.clone(),
            count_time_zone: p.count_time_zone,
            font_size: p.font_size,
            letter_spacing: p.letter_spacing,
            line_height: p.line_height,
            scale: p.scale,
            alignment: p.alignment,
            text_shadow: shadow(p.text_shadow.as_ref()),
            segments: countdown_content(p)?,
        }),
        Element::Rain { properties: p } => Content::Rain(WeatherContent {
            size: p.size,
            speed: p.speed,
            density: p.density,
            particle_size: Some(p.particle_size),
            splash: p.splash_effect.then_some(Splash {
                size: p.splash_effect_size,
                particle_size: p.splash_effect_particle_size,
            }),
        }),
        Element::Snow { properties: p } => Content::Snow(WeatherContent {
            size: p.size,
            speed: p.speed,
            density: p.density,
            particle_size: Some(p.particle_size),
            splash: None,
        }),
        Element::Fog { properties: p } => Content::Fog(WeatherContent {
            size: p.size,
            speed: p.speed,
            density: p.density,
            particle_size: None,
            splash: None,
        }),
    };

    Ok(ElementDescriptor {
        id: base.id,
        kind: element.kind(),
        name: base.layer_name.clone(),
        group: base.group,
        visible: base.visible,
        geometry: geometry(base),
        opacity: base.opacity / 100.0,
        shadow: shadow(base.drop_shadow.as_ref()),
        blur: blur(base.blur.as_ref()),
        blend_mode: blend_mode(element),
        animation: resolve_animation(element),
        actions: resolve_actions(&base.actions),
        feed: feed(base),
        content,
    })
}

pub fn geometry(base: &BaseProperties) -> Geometry {
    let bounds = box_bounds(base.x, base.y, base.width, base.height);
    Geometry {
        x: base.x,
        y: base.y,
        width: base.width,
        height: base.height,
        rotation_deg: base.rotation,
        flip_x: base.flip.horizontal(),
        flip_y: base.flip.vertical(),
        transform: box_transform(
            bounds,
            base.rotation,
            base.flip.horizontal(),
            base.flip.vertical(),
        ),
    }
}

/// Shadow parameters, only when the shadow is switched on.
pub fn shadow(shadow: Option<&Shadow>) -> Option<ShadowDescriptor> {
    let s = shadow.filter(|s| s.use_shadow)?;
    Some(ShadowDescriptor {
        offset_x: s.h_shadow,
        offset_y: s.v_shadow,
        blur: s.blur,
        spread: s.spread,
        color: s.color.clone(),
    })
}

fn blur(blur: Option<&Blur>) -> Option<f64> {
    blur.filter(|b| b.use_blur).map(|b| b.pixels)
}

fn color_adjust(adjust: Option<&AdjustColor>) -> Option<ColorAdjustment> {
    let a = adjust.filter(|a| a.use_adjust_color)?;
    Some(ColorAdjustment {
        brightness: a.brightness,
        contrast: a.contrast,
        saturate: a.saturate,
        hue: a.hue,
    })
}

fn blend_mode(element: &Element) -> Option<BlendMode> {
    match element {
        Element::Text { properties } => properties.blend_mode,
        Element::Image { properties } => properties.blend_mode,
        Element::Shape { properties } => properties.blend_mode,
        _ => None,
    }
}

fn feed(base: &BaseProperties) -> Option<FeedDescriptor> {
    match classify_layer_feed(base.feed.as_ref()) {
        FeedClass::Absent => None,
        FeedClass::Bound(binding) => Some(FeedDescriptor::Bound { binding }),
        FeedClass::Unrecognized(reason) => Some(FeedDescriptor::Unrecognized { reason }),
    }
}

fn optional_fill(
    fill: Option<&Fill>,
    config: &ResolveConfig,
) -> BannerResult<Option<PaintDescriptor>> {
    match fill {
        Some(fill) => resolve_fill(fill, config),
        None => Ok(None),
    }
}

fn text(p: &TextProperties) -> BannerResult<TextContent> {
    let document = text_content(p)?;
    let boundary = document.boundary.unwrap_or_default();
    Ok(TextContent {
        font_size: p.font_size,
        line_height: p.line_height,
        letter_spacing: p.letter_spacing,
        alignment: p.alignment,
        vertical_align: p.vertical_align,
        height_mode: p.content_height_type.unwrap_or_default(),
        boundary: boundary.kind.unwrap_or_default(),
        min_font_size: boundary.min_font_size,
        text_shadow: shadow(p.text_shadow.as_ref()),
        outline: outline(p.outline.as_ref()),
        scale: p.scale,
        text_direction: p.text_direction.clone(),
        document,
    })
}

fn outline(outline: Option<&TextOutline>) -> Option<Stroke> {
    let o = outline.filter(|o| o.use_outline == Some(true))?;
    Some(Stroke {
        color: o.color.clone().unwrap_or_default(),
        width: o.weight.unwrap_or(FILL_BORDER_WIDTH),
        radius: 0.0,
    })
}

fn image(p: &ImageProperties, config: &ResolveConfig) -> BannerResult<MediaPlacement> {
    Ok(MediaPlacement {
        url: config.resolve_asset(&p.url)?,
        hq_url: p
            .hq_url
            .as_deref()
            .map(|u| config.resolve_asset(u))
            .transpose()?,
        crop: p.crop_data,
        horizontal_align: p.horizontal_align,
        vertical_align: p.vertical_align,
        scale_mode: p.scale_mode,
        content_scale: p.content_scale,
        content_offset_x: p.content_offset_x,
        content_offset_y: p.content_offset_y,
        intrinsic_width: p.original_width,
        intrinsic_height: p.original_height,
        color_adjust: color_adjust(p.adjust_color.as_ref()),
        mask_image: p.mask_image.clone(),
    })
}

fn video(p: &VideoProperties, config: &ResolveConfig) -> BannerResult<VideoContent> {
    Ok(VideoContent {
        media: MediaPlacement {
            url: config.resolve_asset(&p.url)?,
            hq_url: None,
            crop: p.crop_data,
            horizontal_align: p.horizontal_align,
            vertical_align: p.vertical_align,
            scale_mode: p.scale_mode,
            content_scale: p.content_scale,
            content_offset_x: 0.0,
            content_offset_y: 0.0,
            intrinsic_width: p.original_width,
            intrinsic_height: p.original_height,
            color_adjust: color_adjust(p.adjust_color.as_ref()),
            mask_image: p.mask_image.clone(),
        },
        format: p.format.clone(),
        start_time: p.start_time,
        end_time: p.end_time,
        duration: p.duration,
        autoplay: p.autoplay == Autoplay::Enabled,
        controls: p.controls,
        looped: p.looped,
        sound_on_hover: p.sound_on_hover,
        volume: p.volume,
    })
}

fn button(p: &ButtonProperties, config: &ResolveConfig) -> BannerResult<ButtonContent> {
    let normal = ButtonState {
        fill: optional_fill(p.background_color.as_ref(), config)?,
        border: shape_border(p.border.as_ref())?,
        shadow: shadow(p.base.drop_shadow.as_ref()),
        label_shadow: shadow(p.label_shadow.as_ref()),
        label_style: p.label_style.clone(),
    };

    // Each field the hover state sets replaces the normal one outright.
    let hover = match &p.hover_state {
        None => None,
        Some(h) => Some(ButtonState {
            fill: match &h.background_color {
                Some(fill) => resolve_fill(fill, config)?,
                None => normal.fill.clone(),
            },
            border: match &h.border {
                Some(border) => shape_border(Some(border))?,
                None => normal.border.clone(),
            },
            shadow: match &h.drop_shadow {
                Some(s) => shadow(Some(s)),
                None => normal.shadow.clone(),
            },
            label_shadow: match &h.label_shadow {
                Some(s) => shadow(Some(s)),
                None => normal.label_shadow.clone(),
            },
            label_style: h
                .label_style
                .clone()
                .unwrap_or_else(|| normal.label_style.clone()),
        }),
    };

    Ok(ButtonContent {
        label: p.button_label.clone(),
        html: p.html.clone(),
        label_offset_x: p.label_offset_x,
        label_offset_y: p.label_offset_y,
        normal,
        hover,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/element.rs"]
mod tests;
