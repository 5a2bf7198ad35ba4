use std::fmt::Write as _;

use askama::Template;
use serde::Serialize;
use url::Url;

use super::RenderAdapter;
use crate::{
    classify::LayerKind,
    foundation::error::{BannerError, BannerResult},
    resolve::{
        descriptor::{
            ButtonContent, ColorAdjustment, Content, ElementDescriptor, MediaPlacement,
            ShadowDescriptor, TextContent,
        },
        fill::{Paint, PaintDescriptor, Stroke},
    },
    schema::{
        element::{ShapeType, TextAlign, UseIframe},
        fill::ScaleMode,
        text::{TextDecoration, TextNode, TextRun, TextScript, TextTransform},
    },
    walk::{RenderItem, RenderSequence},
};

/// Renders absolutely positioned boxes, one per element, inside a fixed-size banner root.
///
/// Animation and action intent are attached as `data-*` JSON attributes for a player script
/// to pick up; nothing here animates.
#[derive(Clone, Debug, Default)]
pub struct HtmlAdapter {
    /// Wrap the fragment in a complete `<!DOCTYPE html>` page.
    pub full_page: bool,
    /// Emit elements whose `visible` flag is off (as `display:none`).
    pub include_hidden: bool,
}

impl HtmlAdapter {
    pub fn fragment() -> Self {
        Self::default()
    }

    pub fn page() -> Self {
        Self {
            full_page: true,
            ..Self::default()
        }
    }
}

#[derive(Template)]
#[template(path = "banner_page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    banner: &'a str,
}

#[derive(Template)]
#[template(path = "banner.html")]
struct BannerTemplate {
    style: String,
    groups: Vec<SlideGroup>,
}

/// Consecutive elements sharing one slide. Groups of the implicit slide have no wrapper.
struct SlideGroup {
    slide: Option<SlideView>,
    elements: Vec<String>,
}

impl SlideGroup {
    fn index(&self) -> Option<usize> {
        self.slide.as_ref().map(|s| s.index)
    }
}

struct SlideView {
    index: usize,
    duration: String,
    stop: bool,
    transition: Option<String>,
}

#[derive(Template)]
#[template(path = "banner_element.html")]
struct ElementTemplate<'a> {
    kind: LayerKind,
    id: u64,
    name: &'a str,
    animation: Option<String>,
    actions: Option<String>,
    style: String,
    content: String,
}

impl RenderAdapter for HtmlAdapter {
    type Output = String;

    fn render(&self, sequence: &RenderSequence) -> BannerResult<String> {
        let banner = self.banner(sequence)?.render().map_err(template_failed)?;
        if !self.full_page {
            return Ok(banner);
        }
        PageTemplate {
            title: &sequence.design.name,
            banner: &banner,
        }
        .render()
        .map_err(template_failed)
    }
}

impl HtmlAdapter {
    fn banner(&self, seq: &RenderSequence) -> BannerResult<BannerTemplate> {
        let d = &seq.design;
        let unit = d.unit.css_unit();
        let mut style = format!(
            "position:relative;overflow:hidden;width:{}{unit};height:{}{unit};",
            num(d.width),
            num(d.height)
        );
        if let Some(bg) = &d.background {
            style.push_str(&paint_css(bg));
        }

        let mut groups: Vec<SlideGroup> = Vec::new();
        for item in &seq.items {
            if !item.element.visible && !self.include_hidden {
                continue;
            }
            let html = element_html(&item.element)?;
            match groups.last_mut() {
                Some(group) if group.index() == item.slide.index => group.elements.push(html),
                _ => groups.push(SlideGroup {
                    slide: slide_view(item)?,
                    elements: vec![html],
                }),
            }
        }
        Ok(BannerTemplate { style, groups })
    }
}

fn slide_view(item: &RenderItem) -> BannerResult<Option<SlideView>> {
    let Some(index) = item.slide.index else {
        return Ok(None);
    };
    Ok(Some(SlideView {
        index,
        duration: num(item.slide.duration),
        stop: item.slide.stop,
        transition: item.slide.transition.as_ref().map(to_json).transpose()?,
    }))
}

fn element_html(e: &ElementDescriptor) -> BannerResult<String> {
    let animated = e.animation.has_animation || e.animation.is_animated;
    let mut content = String::new();
    write_content(&mut content, &e.content)?;
    ElementTemplate {
        kind: e.kind,
        id: e.id,
        name: &e.name,
        animation: animated.then(|| to_json(&e.animation)).transpose()?,
        actions: (!e.actions.is_empty()).then(|| to_json(&e.actions)).transpose()?,
        style: element_style(e)?,
        content,
    }
    .render()
    .map_err(template_failed)
}

fn element_style(e: &ElementDescriptor) -> BannerResult<String> {
    let g = &e.geometry;
    let mut style = format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;opacity:{};",
        num(g.x),
        num(g.y),
        num(g.width),
        num(g.height),
        num(e.opacity)
    );
    let mut transforms = Vec::new();
    if g.rotation_deg != 0.0 {
        transforms.push(format!("rotate({}deg)", num(g.rotation_deg)));
    }
    if g.flip_x || g.flip_y {
        transforms.push(format!(
            "scale({},{})",
            if g.flip_x { -1 } else { 1 },
            if g.flip_y { -1 } else { 1 }
        ));
    }
    if !transforms.is_empty() {
        write!(style, "transform:{};", transforms.join(" "))?;
    }
    if let Some(shadow) = &e.shadow {
        write!(style, "box-shadow:{};", shadow_css(shadow))?;
    }
    let mut filters = Vec::new();
    if let Some(px) = e.blur {
        filters.push(format!("blur({}px)", num(px)));
    }
    if let Some(adjust) = content_color_adjust(&e.content) {
        filters.extend(adjust_filters(adjust));
    }
    if !filters.is_empty() {
        write!(style, "filter:{};", filters.join(" "))?;
    }
    if let Some(mode) = e.blend_mode {
        write!(style, "mix-blend-mode:{};", mode.css_keyword())?;
    }
    if !e.visible {
        style.push_str("display:none;");
    }
    Ok(style)
}

fn write_content(out: &mut String, content: &Content) -> BannerResult<()> {
    const FILL: &str = "width:100%;height:100%;";
    match content {
        Content::Text(text) => write_text(out, text)?,
        Content::Image(media) => writeln!(
            out,
            "<img src=\"{}\" alt=\"\" style=\"{FILL}{}\">",
            escape(&media.url),
            escape(&media_css(media))
        )?,
        Content::Video(video) => {
            write!(
                out,
                "<video src=\"{}\" style=\"{FILL}{}\" playsinline",
                escape(&video.media.url),
                escape(&media_css(&video.media))
            )?;
            if video.autoplay {
                out.push_str(" autoplay muted");
            }
            if video.controls {
                out.push_str(" controls");
            }
            if video.looped {
                out.push_str(" loop");
            }
            out.push_str("></video>\n");
        }
        Content::Audio(audio) => writeln!(
            out,
            "<audio src=\"{}\" data-volume=\"{}\" preload=\"auto\"></audio>",
            escape(&audio.url),
            num(audio.volume)
        )?,
        Content::Svg(svg) => match &svg.inline_source {
            // Inline resources are the document's own markup.
            Some(source) => writeln!(out, "{source}")?,
            None => writeln!(
                out,
                "<img src=\"{}\" alt=\"\" style=\"{FILL}\">",
                escape(&svg.url)
            )?,
        },
        Content::Shape(shape) => {
            let mut style = FILL.to_string();
            if let Some(fill) = &shape.fill {
                style.push_str(&paint_css(fill));
            }
            if let Some(border) = &shape.border {
                style.push_str(&stroke_css(border));
            }
            if shape.shape == ShapeType::Circle {
                style.push_str("border-radius:50%;");
            }
            writeln!(out, "<div class=\"shape\" style=\"{}\"></div>", escape(&style))?;
        }
        Content::Button(button) => write_button(out, button)?,
        Content::Embed(embed) => {
            let mut style = format!("{FILL}box-sizing:border-box;padding:{}px;", num(embed.margin));
            if let Some(fill) = &embed.fill {
                style.push_str(&paint_css(fill));
            }
            if embed.use_iframe == UseIframe::No {
                writeln!(out, "<div style=\"{}\">{}</div>", escape(&style), embed.code)?;
            } else {
                writeln!(
                    out,
                    "<iframe srcdoc=\"{}\" scrolling=\"{}\" style=\"border:0;{}\"></iframe>",
                    escape(&embed.code),
                    if embed.scrollbar { "yes" } else { "no" },
                    escape(&style)
                )?;
            }
        }
        Content::Youtube(yt) => {
            let src = youtube_embed_url(&yt.url, yt.autoplay, yt.looped, yt.hide_controls)
                .unwrap_or_else(|| yt.url.clone());
            writeln!(
                out,
                "<iframe src=\"{}\" allow=\"autoplay; encrypted-media\" allowfullscreen style=\"border:0;{FILL}\"></iframe>",
                escape(&src)
            )?;
        }
        Content::Clipart { svg_object } => writeln!(
            out,
            "<div class=\"clipart\" data-svg-object=\"{}\" style=\"{FILL}\"></div>",
            escape(&to_json(svg_object)?)
        )?,
        Content::Countdown(countdown) => {
            write!(
                out,
                "<div class=\"countdown\" data-countdown=\"{}\" style=\"{FILL}font-size:{}px;text-align:{};\">",
                escape(&to_json(countdown)?),
                num(countdown.font_size),
                align_keyword(countdown.alignment)
            )?;
            for run in countdown.segments.runs() {
                write_run(out, run)?;
            }
            out.push_str("</div>\n");
        }
        Content::Rain(w) | Content::Snow(w) | Content::Fog(w) => writeln!(
            out,
            "<canvas class=\"weather\" data-weather=\"{}\" style=\"{FILL}\"></canvas>",
            escape(&to_json(w)?)
        )?,
    }
    Ok(())
}

fn write_text(out: &mut String, text: &TextContent) -> BannerResult<()> {
    write!(
        out,
        "<div class=\"text\" style=\"font-size:{}px;line-height:{};letter-spacing:{}px;text-align:{};",
        num(text.font_size),
        num(text.line_height),
        num(text.letter_spacing),
        align_keyword(text.alignment)
    )?;
    if let Some(shadow) = &text.text_shadow {
        write!(
            out,
            "text-shadow:{}px {}px {}px {};",
            num(shadow.offset_x),
            num(shadow.offset_y),
            num(shadow.blur),
            escape(&shadow.color)
        )?;
    }
    out.push_str("\">\n");
    for node in &text.document.nodes {
        write_text_node(out, node)?;
    }
    out.push_str("</div>\n");
    Ok(())
}

fn write_text_node(out: &mut String, node: &TextNode) -> BannerResult<()> {
    match node {
        TextNode::Run(run) => write_run(out, run),
        TextNode::Block(block) => {
            out.push_str("<p style=\"margin:0\">");
            for child in &block.children {
                write_text_node(out, child)?;
            }
            out.push_str("</p>\n");
            Ok(())
        }
    }
}

fn write_run(out: &mut String, run: &TextRun) -> BannerResult<()> {
    let s = &run.style;
    let mut style = String::new();
    if !s.font_settings.font_family.is_empty() {
        write!(style, "font-family:'{}';", s.font_settings.font_family)?;
    }
    write!(style, "font-weight:{};", s.font_settings.font_weight.0)?;
    if let Some(color) = &s.color {
        write!(style, "color:{color};")?;
    }
    if let Some(size) = s.font_size {
        write!(style, "font-size:{}px;", num(size))?;
    } else if let Some(pct) = s.font_size_percent {
        write!(style, "font-size:{}%;", num(pct))?;
    }
    match s.text_decoration {
        TextDecoration::None => {}
        TextDecoration::Underline => style.push_str("text-decoration:underline;"),
        TextDecoration::LineThrough => style.push_str("text-decoration:line-through;"),
    }
    match s.text_transform {
        TextTransform::None => {}
        TextTransform::Uppercase => style.push_str("text-transform:uppercase;"),
        TextTransform::Lowercase => style.push_str("text-transform:lowercase;"),
        TextTransform::Capitalize => style.push_str("text-transform:capitalize;"),
    }
    match s.text_script {
        TextScript::None => {}
        TextScript::Superscript => style.push_str("vertical-align:super;"),
        TextScript::Subscript => style.push_str("vertical-align:sub;"),
    }
    write!(
        out,
        "<span style=\"{}\">{}</span>",
        escape(&style),
        escape(&run.text)
    )?;
    Ok(())
}

fn write_button(out: &mut String, button: &ButtonContent) -> BannerResult<()> {
    let state = &button.normal;
    let mut style = String::from(
        "width:100%;height:100%;display:flex;align-items:center;justify-content:center;box-sizing:border-box;",
    );
    if let Some(fill) = &state.fill {
        style.push_str(&paint_css(fill));
    }
    if let Some(border) = &state.border {
        style.push_str(&stroke_css(border));
    }
    let label = &state.label_style;
    if !label.font.font_family.is_empty() {
        write!(style, "font-family:'{}';", label.font.font_family)?;
    }
    if let Some(size) = label.font_size {
        write!(style, "font-size:{}px;", num(size))?;
    }
    if let Some(color) = &label.color {
        write!(style, "color:{color};")?;
    }
    if let Some(shadow) = &state.label_shadow {
        write!(
            style,
            "text-shadow:{}px {}px {}px {};",
            num(shadow.offset_x),
            num(shadow.offset_y),
            num(shadow.blur),
            shadow.color
        )?;
    }
    out.push_str("<div class=\"button\"");
    if let Some(hover) = &button.hover {
        write!(out, " data-hover=\"{}\"", escape(&to_json(hover)?))?;
    }
    write!(out, " style=\"{}\">", escape(&style))?;
    write!(
        out,
        "<span style=\"position:relative;left:{}px;top:{}px\">",
        num(button.label_offset_x),
        num(button.label_offset_y)
    )?;
    match &button.html {
        Some(html) => out.push_str(html),
        None => out.push_str(&escape(&button.label)),
    }
    out.push_str("</span></div>\n");
    Ok(())
}

/// CSS declarations for a paint and its border.
pub fn paint_css(paint: &PaintDescriptor) -> String {
    let mut css = match &paint.paint {
        Paint::Solid { color } => format!("background-color:{color};"),
        Paint::LinearGradient {
            stops,
            rotation_deg,
        } => format!(
            "background:linear-gradient({}deg, {});",
            num(*rotation_deg),
            stops
                .iter()
                .map(|s| format!("{} {}%", s.color, num(s.offset * 100.0)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Paint::RadialGradient { stops, anchor } => format!(
            "background:radial-gradient(circle at {}, {});",
            anchor.as_str(),
            stops
                .iter()
                .map(|s| format!("{} {}%", s.color, num(s.offset * 100.0)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Paint::Image(image) => format!(
            "background-image:url('{}');background-size:{};background-position:{} {};background-repeat:{};",
            css_url(&image.url),
            background_size(image.scale_mode),
            image.horizontal_align.css_keyword(),
            image.vertical_align.css_keyword(),
            if image.repeat { "repeat" } else { "no-repeat" }
        ),
    };
    if let Some(border) = &paint.border {
        css.push_str(&stroke_css(border));
    }
    css
}

fn stroke_css(stroke: &Stroke) -> String {
    let mut css = format!("border:{}px solid {};", num(stroke.width), stroke.color);
    if stroke.radius > 0.0 {
        css.push_str(&format!("border-radius:{}px;", num(stroke.radius)));
    }
    css
}

fn shadow_css(s: &ShadowDescriptor) -> String {
    format!(
        "{}px {}px {}px {}px {}",
        num(s.offset_x),
        num(s.offset_y),
        num(s.blur),
        num(s.spread),
        s.color
    )
}

fn media_css(media: &MediaPlacement) -> String {
    let fit = match media.scale_mode {
        ScaleMode::Stretch => "fill",
        ScaleMode::Aspect => "contain",
        ScaleMode::Tile => "none",
        ScaleMode::Mask | ScaleMode::Crop | ScaleMode::UserCrop => "cover",
    };
    format!(
        "object-fit:{fit};object-position:{} {};",
        media.horizontal_align.css_keyword(),
        media.vertical_align.css_keyword()
    )
}

fn background_size(mode: ScaleMode) -> &'static str {
    match mode {
        ScaleMode::Stretch => "100% 100%",
        ScaleMode::Aspect => "contain",
        ScaleMode::Tile => "auto",
        ScaleMode::Mask | ScaleMode::Crop | ScaleMode::UserCrop => "cover",
    }
}

fn content_color_adjust(content: &Content) -> Option<&ColorAdjustment> {
    match content {
        Content::Image(media) => media.color_adjust.as_ref(),
        Content::Video(video) => video.media.color_adjust.as_ref(),
        Content::Embed(embed) => embed.color_adjust.as_ref(),
        Content::Youtube(yt) => yt.color_adjust.as_ref(),
        _ => None,
    }
}

// Adjustments are stored as percentage offsets from neutral.
fn adjust_filters(a: &ColorAdjustment) -> Vec<String> {
    vec![
        format!("brightness({}%)", num(100.0 + a.brightness)),
        format!("contrast({}%)", num(100.0 + a.contrast)),
        format!("saturate({}%)", num(100.0 + a.saturate)),
        format!("hue-rotate({}deg)", num(a.hue)),
    ]
}

fn align_keyword(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Right => "right",
        TextAlign::Center => "center",
        TextAlign::Justify => "justify",
    }
}

/// Embed url for a YouTube watch/share link, or `None` when the link is not recognised.
pub fn youtube_embed_url(link: &str, autoplay: bool, looped: bool, hide_controls: bool) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    let host = parsed.host_str()?.trim_start_matches("www.");
    let id = match host {
        "youtu.be" => parsed.path_segments()?.next()?.to_string(),
        "youtube.com" | "m.youtube.com" => match parsed.path() {
            "/watch" => parsed
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())?,
            path => path.strip_prefix("/embed/")?.to_string(),
        },
        _ => return None,
    };
    if id.is_empty() {
        return None;
    }

    let mut embed = Url::parse("https://www.youtube.com/embed/").ok()?.join(&id).ok()?;
    {
        let mut q = embed.query_pairs_mut();
        if autoplay {
            q.append_pair("autoplay", "1").append_pair("mute", "1");
        }
        if looped {
            q.append_pair("loop", "1").append_pair("playlist", &id);
        }
        if hide_controls {
            q.append_pair("controls", "0");
        }
    }
    if embed.query() == Some("") {
        embed.set_query(None);
    }
    Some(embed.into())
}

fn to_json<T: Serialize>(value: &T) -> BannerResult<String> {
    serde_json::to_string(value).map_err(|e| BannerError::serde(format!("html data attribute: {e}")))
}

fn template_failed(err: askama::Error) -> BannerError {
    BannerError::Other(anyhow::Error::new(err).context("html template rendering failed"))
}

/// Percent-encode the characters that would end or split a quoted CSS `url()`.
fn css_url(url: &str) -> String {
    let mut encoded = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '\'' | '"' | '(' | ')' | '\\' => encoded.push_str(&format!("%{:02X}", ch as u32)),
            c if c.is_whitespace() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    encoded.push_str(&format!("%{byte:02X}"));
                }
            }
            _ => encoded.push(ch),
        }
    }
    encoded
}

/// Shortest decimal form: integers print without a fraction.
fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "../../tests/unit/adapter/html.rs"]
mod tests;
