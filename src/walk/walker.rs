use rayon::prelude::*;
use serde::Serialize;

use crate::{
    config::ResolveConfig,
    foundation::error::{BannerResult, ErrorKind},
    resolve::{
        animation::{SlideTransitionDescriptor, resolve_slide_transition},
        descriptor::{ElementDescriptor, FeedDescriptor},
        element::{ResolveContext, resolve_element},
        fill::{PaintDescriptor, resolve_fill},
    },
    schema::{
        design::{Design, Guidelines, Layer, MeasureUnit, Node, Slide},
        feed::{DesignFeed, FeedClass, classify_design_feed},
    },
};

/// Design-level facts adapters need before painting any element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDescriptor {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub unit: MeasureUnit,
    pub background: Option<PaintDescriptor>,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub loop_count: Option<u32>,
    pub version: String,
    pub feed: Option<DesignFeed>,
    pub slide_count: usize,
    pub banner_url: Option<String>,
    pub use_as_click_tag: Option<bool>,
    pub fallback_image_slide_index: Option<u64>,
}

/// Slide an element was found under. Elements of single-slide documents get the implicit
/// context, which has no index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContext {
    pub index: Option<usize>,
    pub duration: f64,
    pub stop: bool,
    pub transition: Option<SlideTransitionDescriptor>,
    pub guidelines: Option<Guidelines>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderItem {
    pub slide: SlideContext,
    pub element: ElementDescriptor,
}

/// A node that was skipped or partly understood, with a JSON-pointer style path to it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolveWarning {
    pub path: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// Resolved document: paint order is `items` order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderSequence {
    pub design: DesignDescriptor,
    pub items: Vec<RenderItem>,
    pub warnings: Vec<ResolveWarning>,
}

impl RenderSequence {
    pub fn elements(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.items.iter().map(|item| &item.element)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct Walker;

impl Walker {
    /// Validate `design` and resolve every element in document order.
    #[tracing::instrument(skip(design, config), fields(name = %design.properties.name))]
    pub fn resolve(design: &Design, config: &ResolveConfig) -> BannerResult<RenderSequence> {
        design.validate()?;

        let ctx = ResolveContext::new(config).with_resources(&design.resources);
        let mut warnings = Vec::new();
        let design_descriptor = describe_design(design, config, &mut warnings)?;

        let mut items = Vec::new();
        let mut slide_index = 0usize;
        for (i, node) in design.elements.iter().enumerate() {
            let path = format!("/elements/{i}");
            match node {
                Node::Slide(slide) => {
                    let context = slide_context(slide, slide_index);
                    tracing::debug!(
                        slide = slide_index,
                        elements = slide.elements.len(),
                        "resolving slide"
                    );
                    for (j, layer) in slide.elements.iter().enumerate() {
                        let path = format!("{path}/elements/{j}");
                        walk_layer(layer, &context, &path, &ctx, &mut items, &mut warnings)?;
                    }
                    slide_index += 1;
                }
                Node::Layer(layer) => {
                    walk_layer(
                        layer,
                        &SlideContext::default(),
                        &path,
                        &ctx,
                        &mut items,
                        &mut warnings,
                    )?;
                }
            }
        }

        Ok(RenderSequence {
            design: design_descriptor,
            items,
            warnings,
        })
    }
}

/// Resolve a batch of independent designs on the rayon pool. Results keep input order.
#[tracing::instrument(skip_all, fields(count = designs.len()))]
pub fn resolve_many(
    designs: &[Design],
    config: &ResolveConfig,
) -> Vec<BannerResult<RenderSequence>> {
    designs
        .par_iter()
        .map(|design| Walker::resolve(design, config))
        .collect()
}

fn describe_design(
    design: &Design,
    config: &ResolveConfig,
    warnings: &mut Vec<ResolveWarning>,
) -> BannerResult<DesignDescriptor> {
    let p = &design.properties;
    let background = match &p.background_color {
        Some(fill) => resolve_fill(fill, config)?,
        None => None,
    };
    let feed = match classify_design_feed(p.feed.as_ref()) {
        FeedClass::Absent => None,
        FeedClass::Bound(feed) => Some(feed),
        FeedClass::Unrecognized(reason) => {
            warn(warnings, "/properties/feed", ErrorKind::SchemaMismatch, reason);
            None
        }
    };

    Ok(DesignDescriptor {
        name: p.name.clone(),
        width: p.width,
        height: p.height,
        unit: p.measure_unit,
        background,
        looped: p.looped,
        loop_count: p.loop_count,
        version: p.version.clone(),
        feed,
        slide_count: design
            .elements
            .iter()
            .filter(|n| matches!(n, Node::Slide(_)))
            .count(),
        banner_url: p.banner_url.clone(),
        use_as_click_tag: p.use_as_click_tag,
        fallback_image_slide_index: p.fallback_image_slide_index,
    })
}

fn slide_context(slide: &Slide, index: usize) -> SlideContext {
    let p = &slide.properties;
    SlideContext {
        index: Some(index),
        duration: p.duration,
        stop: p.stop_slide,
        transition: p.transition.as_ref().map(resolve_slide_transition),
        guidelines: p.guidelines.clone(),
    }
}

fn walk_layer(
    layer: &Layer,
    context: &SlideContext,
    path: &str,
    ctx: &ResolveContext<'_>,
    items: &mut Vec<RenderItem>,
    warnings: &mut Vec<ResolveWarning>,
) -> BannerResult<()> {
    let element = match layer {
        Layer::Supported(element) => element,
        Layer::Unsupported(skipped) => {
            let message = match skipped.id {
                Some(id) => format!("skipped element {id}: {}", skipped.reason),
                None => format!("skipped node: {}", skipped.reason),
            };
            warn(warnings, path, ErrorKind::SchemaMismatch, message);
            return Ok(());
        }
    };

    let descriptor = resolve_element(element, ctx)?;
    if let Some(FeedDescriptor::Unrecognized { reason }) = &descriptor.feed {
        warn(
            warnings,
            &format!("{path}/properties/feed"),
            ErrorKind::SchemaMismatch,
            reason.clone(),
        );
    }
    items.push(RenderItem {
        slide: context.clone(),
        element: descriptor,
    });
    Ok(())
}

fn warn(warnings: &mut Vec<ResolveWarning>, path: &str, kind: ErrorKind, message: String) {
    tracing::warn!(path, ?kind, "{message}");
    warnings.push(ResolveWarning {
        path: path.to_string(),
        kind,
        message,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/walk/walker.rs"]
mod tests;
