use serde::Serialize;

use crate::{
    config::ResolveConfig,
    foundation::error::{BannerError, BannerResult},
    schema::fill::{
        Align, Background, BorderFlag, CropData, Fill, GradColor, ImageFill, RadialAnchor,
        ScaleMode, ShapeBorder,
    },
};

/// Width of the border that rides along with a fill.
pub const FILL_BORDER_WIDTH: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: String,
    pub offset: f64,
}

/// Placement of an image paint inside its box.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePaint {
    pub url: String,
    /// Only `tile` repeats; every other mode places the image once.
    pub repeat: bool,
    pub scale_mode: ScaleMode,
    pub horizontal_align: Align,
    pub vertical_align: Align,
    pub rotation_deg: f64,
    pub content_scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub crop: Option<CropData>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Paint {
    Solid {
        color: String,
    },
    LinearGradient {
        stops: Vec<GradientStop>,
        rotation_deg: f64,
    },
    RadialGradient {
        stops: Vec<GradientStop>,
        anchor: RadialAnchor,
    },
    Image(ImagePaint),
}

/// An outline: uniform width, optional corner radius.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub radius: f64,
}

/// Resolved paint plus the border drawn around it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaintDescriptor {
    #[serde(flatten)]
    pub paint: Paint,
    pub border: Option<Stroke>,
}

/// Resolve a fill. `none` paints nothing and yields `None`.
pub fn resolve_fill(fill: &Fill, config: &ResolveConfig) -> BannerResult<Option<PaintDescriptor>> {
    let Some(paint) = resolve_background(&fill.background, config)? else {
        return Ok(None);
    };
    Ok(Some(PaintDescriptor {
        paint,
        border: fill_border(&fill.border),
    }))
}

/// Resolve the paint source alone, without any border.
pub fn resolve_background(
    background: &Background,
    config: &ResolveConfig,
) -> BannerResult<Option<Paint>> {
    let paint = match background {
        Background::None => return Ok(None),
        Background::Solid(solid) => Paint::Solid {
            color: solid.scolor.clone(),
        },
        Background::LinearGradient(lgrad) => Paint::LinearGradient {
            stops: stops(&lgrad.grad_colors)?,
            rotation_deg: lgrad.background_rotation.unwrap_or(0.0),
        },
        Background::RadialGradient(rgrad) => Paint::RadialGradient {
            stops: stops(&rgrad.grad_colors)?,
            anchor: rgrad.rgrad_pos.unwrap_or_default(),
        },
        Background::Image(image) => Paint::Image(image_paint(image, config)?),
    };
    Ok(Some(paint))
}

/// A fill border is drawn only when its flag is explicitly `true`.
pub fn fill_border(flag: &BorderFlag) -> Option<Stroke> {
    match flag.use_border {
        Some(true) => Some(Stroke {
            color: flag.border_color.clone().unwrap_or_default(),
            width: FILL_BORDER_WIDTH,
            radius: 0.0,
        }),
        Some(false) | None => None,
    }
}

/// Shape and button outlines are drawn only when they have some weight.
pub fn shape_border(border: Option<&ShapeBorder>) -> BannerResult<Option<Stroke>> {
    let Some(border) = border else {
        return Ok(None);
    };
    if !border.weight.is_finite() || border.weight < 0.0 {
        return Err(BannerError::invalid_range(format!(
            "border weight {} must be finite and >= 0",
            border.weight
        )));
    }
    if border.weight == 0.0 {
        return Ok(None);
    }
    Ok(Some(Stroke {
        color: border.color.clone(),
        width: border.weight,
        radius: border.radius.max(0.0),
    }))
}

fn stops(colors: &[GradColor]) -> BannerResult<Vec<GradientStop>> {
    colors
        .iter()
        .map(|stop| {
            if !stop.p.is_finite() {
                return Err(BannerError::invalid_range(format!(
                    "gradient stop position {} must be finite",
                    stop.p
                )));
            }
            Ok(GradientStop {
                color: stop.c.clone(),
                offset: stop.p,
            })
        })
        .collect()
}

fn image_paint(image: &ImageFill, config: &ResolveConfig) -> BannerResult<ImagePaint> {
    Ok(ImagePaint {
        url: config.resolve_asset(&image.url)?,
        repeat: image.scale_mode == ScaleMode::Tile,
        scale_mode: image.scale_mode,
        horizontal_align: image.horizontal_align,
        vertical_align: image.vertical_align,
        rotation_deg: image.background_rotation.unwrap_or(0.0),
        content_scale: image.content_scale.unwrap_or(1.0),
        offset_x: image.content_offset_x.unwrap_or(0.0),
        offset_y: image.content_offset_y.unwrap_or(0.0),
        crop: image.crop_data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/fill.rs"]
mod tests;
