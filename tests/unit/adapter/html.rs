use super::*;
use crate::{
    config::ResolveConfig,
    resolve::fill::{GradientStop, ImagePaint},
    schema::{design::Design, fill::Align},
    walk::Walker,
};
use serde_json::{Value, json};

fn sequence(elements: Value, last_id: u64) -> RenderSequence {
    let design = Design::from_value(json!({
        "properties": { "name": "Sale <50%>", "width": 300, "height": 250, "lastId": last_id },
        "elements": elements
    }))
    .unwrap();
    Walker::resolve(&design, &ResolveConfig::new()).unwrap()
}

/// Decode the entities an HTML escaper may produce, whichever spelling it picks.
fn unescape(html: &str) -> String {
    [
        ("&quot;", "\""),
        ("&#34;", "\""),
        ("&#39;", "'"),
        ("&#x27;", "'"),
        ("&lt;", "<"),
        ("&#60;", "<"),
        ("&gt;", ">"),
        ("&#62;", ">"),
        ("&amp;", "&"),
        ("&#38;", "&"),
    ]
    .iter()
    .fold(html.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Raw (still escaped) value of the first `name="..."` attribute.
fn attr<'a>(html: &'a str, name: &str) -> &'a str {
    let key = format!("{name}=\"");
    let start = html.find(&key).unwrap() + key.len();
    let end = start + html[start..].find('"').unwrap();
    &html[start..end]
}

fn shape(id: u64, extra: Value) -> Value {
    let mut properties = json!({ "id": id, "x": 5, "y": 6, "width": 20, "height": 10 });
    if let (Some(p), Value::Object(extra)) = (properties.as_object_mut(), extra) {
        p.extend(extra);
    }
    json!({ "type": "layer", "layerType": "shape", "properties": properties })
}

#[test]
fn fragment_positions_each_element() {
    let seq = sequence(json!([shape(1, json!({ "opacity": 50, "rotation": 45 }))]), 1);
    let html = HtmlAdapter::fragment().render(&seq).unwrap();
    assert!(html.starts_with("<div class=\"banner\" style=\"position:relative;overflow:hidden;width:300px;height:250px;\">"));
    assert!(html.contains("data-id=\"1\" data-layer-type=\"shape\""));
    assert!(html.contains("left:5px;top:6px;width:20px;height:10px;opacity:0.5;transform:rotate(45deg);"));
    assert!(!html.contains("<!DOCTYPE"));
}

#[test]
fn page_title_is_escaped() {
    let seq = sequence(json!([]), 0);
    let html = HtmlAdapter::page().render(&seq).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    let start = html.find("<title>").unwrap() + "<title>".len();
    let end = html.find("</title>").unwrap();
    let title = &html[start..end];
    assert!(!title.contains('<'));
    assert_eq!(unescape(title), "Sale <50%>");
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn elements_are_grouped_by_slide() {
    let seq = sequence(
        json!([
            { "type": "slide", "properties": { "duration": 2 }, "elements": [shape(1, json!({})), shape(2, json!({}))] },
            { "type": "slide", "properties": { "duration": 3, "stopSlide": true }, "elements": [shape(3, json!({}))] }
        ]),
        3,
    );
    let html = HtmlAdapter::fragment().render(&seq).unwrap();
    assert_eq!(html.matches("<div class=\"slide\"").count(), 2);
    assert!(html.contains("data-slide-index=\"0\" data-duration=\"2\""));
    assert!(html.contains("data-slide-index=\"1\" data-duration=\"3\" data-stop=\"true\""));
    let second_slide = html.find("data-slide-index=\"1\"").unwrap();
    assert!(html.find("data-id=\"2\"").unwrap() < second_slide);
    assert!(html.find("data-id=\"3\"").unwrap() > second_slide);
}

#[test]
fn hidden_elements_are_skipped_unless_requested() {
    let seq = sequence(json!([shape(1, json!({ "visible": false })), shape(2, json!({}))]), 2);
    let html = HtmlAdapter::fragment().render(&seq).unwrap();
    assert!(!html.contains("data-id=\"1\""));
    assert!(html.contains("data-id=\"2\""));

    let adapter = HtmlAdapter {
        include_hidden: true,
        ..HtmlAdapter::fragment()
    };
    let html = adapter.render(&seq).unwrap();
    assert!(html.contains("data-id=\"1\""));
    assert!(html.contains("display:none;"));
}

#[test]
fn text_and_attributes_are_escaped() {
    let seq = sequence(
        json!([{
            "type": "layer",
            "layerType": "text",
            "properties": {
                "id": 1, "x": 0, "y": 0, "width": 100, "height": 20,
                "layerName": "\"quoted\"",
                "text": "Tom & <Jerry>"
            }
        }]),
        1,
    );
    let html = HtmlAdapter::fragment().render(&seq).unwrap();
    assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
    assert_eq!(unescape(attr(&html, "data-name")), "\"quoted\"");
    assert!(!html.contains("<Jerry>"));
}

#[test]
fn actions_are_attached_as_json() {
    let seq = sequence(
        json!([shape(1, json!({
            "actions": [{ "type": "gotoURL", "event": "click", "url": "https://example.com/?a=1&b=2" }]
        }))]),
        1,
    );
    let html = HtmlAdapter::fragment().render(&seq).unwrap();
    let raw = attr(&html, "data-actions");
    assert!(!raw.contains("&b="));
    let actions: Value = serde_json::from_str(&unescape(raw)).unwrap();
    assert_eq!(actions[0]["event"], "click");
    assert_eq!(actions[0]["action"]["url"], "https://example.com/?a=1&b=2");
}

#[test]
fn paint_css_covers_solid_and_gradients() {
    let solid = PaintDescriptor {
        paint: Paint::Solid { color: "#fff".into() },
        border: Some(Stroke {
            color: "#000".into(),
            width: 1.0,
            radius: 4.0,
        }),
    };
    assert_eq!(
        paint_css(&solid),
        "background-color:#fff;border:1px solid #000;border-radius:4px;"
    );

    let linear = PaintDescriptor {
        paint: Paint::LinearGradient {
            stops: vec![
                GradientStop { color: "red".into(), offset: 0.0 },
                GradientStop { color: "blue".into(), offset: 0.5 },
            ],
            rotation_deg: 90.0,
        },
        border: None,
    };
    assert_eq!(
        paint_css(&linear),
        "background:linear-gradient(90deg, red 0%, blue 50%);"
    );
}

#[test]
fn youtube_links_map_to_embed_urls() {
    assert_eq!(
        youtube_embed_url("https://www.youtube.com/watch?v=abc123", false, false, false).as_deref(),
        Some("https://www.youtube.com/embed/abc123")
    );
    assert_eq!(
        youtube_embed_url("https://youtu.be/abc123", true, true, true).as_deref(),
        Some("https://www.youtube.com/embed/abc123?autoplay=1&mute=1&loop=1&playlist=abc123&controls=0")
    );
    assert_eq!(youtube_embed_url("https://vimeo.com/1", false, false, false), None);
    assert_eq!(youtube_embed_url("not a url", false, false, false), None);
}

#[test]
fn num_drops_integral_fractions() {
    assert_eq!(num(3.0), "3");
    assert_eq!(num(-2.0), "-2");
    assert_eq!(num(0.25), "0.25");
}

#[test]
fn banner_size_uses_the_design_unit() {
    let design = Design::from_value(json!({
        "properties": { "name": "Print", "width": 100, "height": 50, "measureUnit": "mm", "lastId": 1 },
        "elements": [shape(1, json!({}))]
    }))
    .unwrap();
    let seq = Walker::resolve(&design, &ResolveConfig::new()).unwrap();
    let html = HtmlAdapter::fragment().render(&seq).unwrap();
    assert!(html.contains("width:100mm;height:50mm;"));
    assert!(!html.contains("width:100px;height:50px;"));
    // Element boxes keep pixel geometry.
    assert!(html.contains("left:5px;top:6px;width:20px;height:10px;"));
}

#[test]
fn image_urls_cannot_break_out_of_css_strings() {
    assert_eq!(css_url("a.png"), "a.png");
    assert_eq!(css_url("it's (1).png"), "it%27s%20%281%29.png");
    assert_eq!(css_url("x\"y\\z"), "x%22y%5Cz");

    let paint = PaintDescriptor {
        paint: Paint::Image(ImagePaint {
            url: "https://cdn.example.com/a');color:red;('.png".into(),
            scale_mode: ScaleMode::Mask,
            horizontal_align: Align::Center,
            vertical_align: Align::Top,
            repeat: false,
            rotation_deg: 0.0,
            content_scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            crop: None,
        }),
        border: None,
    };
    let css = paint_css(&paint);
    assert!(css.starts_with("background-image:url('https://cdn.example.com/a%27%29;color:red;%28%27.png');"));
    assert_eq!(css.matches('\'').count(), 2);
}
