use super::*;
use crate::{
    classify::LayerKind,
    foundation::{
        core::Point,
        error::ErrorKind,
    },
    resolve::fill::Paint,
};
use serde_json::{Value, json};

fn element(layer_type: &str, extra: Value) -> Element {
    let mut properties = json!({ "id": 7, "x": 10, "y": 20, "width": 100, "height": 50 });
    if let (Some(props), Value::Object(extra)) = (properties.as_object_mut(), extra) {
        props.extend(extra);
    }
    serde_json::from_value(json!({ "layerType": layer_type, "properties": properties })).unwrap()
}

fn resolve(e: &Element) -> ElementDescriptor {
    resolve_element(e, &ResolveContext::new(&ResolveConfig::new())).unwrap()
}

#[test]
fn opacity_is_normalized() {
    for (raw, expected) in [(0.0, 0.0), (50.0, 0.5), (100.0, 1.0)] {
        let d = resolve(&element("image", json!({ "url": "a.png", "opacity": raw })));
        assert_eq!(d.opacity, expected);
    }
}

#[test]
fn out_of_range_opacity_is_rejected() {
    let e = element("image", json!({ "url": "a.png", "opacity": 140 }));
    let err = resolve_element(&e, &ResolveContext::new(&ResolveConfig::new())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRange);
}

#[test]
fn shadow_and_blur_only_when_switched_on() {
    let off = resolve(&element(
        "image",
        json!({
            "url": "a.png",
            "dropShadow": { "useShadow": false, "hShadow": 3, "color": "#000" },
            "blur": { "useBlur": false, "pixels": 4 }
        }),
    ));
    assert!(off.shadow.is_none());
    assert!(off.blur.is_none());

    let on = resolve(&element(
        "image",
        json!({
            "url": "a.png",
            "dropShadow": { "useShadow": true, "hShadow": 3, "vShadow": 4, "blur": 5, "color": "#000" },
            "blur": { "useBlur": true, "pixels": 4 }
        }),
    ));
    let shadow = on.shadow.unwrap();
    assert_eq!((shadow.offset_x, shadow.offset_y, shadow.blur), (3.0, 4.0, 5.0));
    assert_eq!(on.blur, Some(4.0));
}

#[test]
fn geometry_rotates_about_the_box_centre() {
    let d = resolve(&element("shape", json!({ "rotation": 180 })));
    assert_eq!(d.kind, LayerKind::Shape);
    assert_eq!(d.geometry.bounds().center(), Point::new(60.0, 45.0));
    let corner = d.geometry.transform * Point::new(10.0, 20.0);
    assert!((corner.x - 110.0).abs() < 1e-9);
    assert!((corner.y - 70.0).abs() < 1e-9);
}

#[test]
fn flip_is_reported_per_axis() {
    let d = resolve(&element("shape", json!({ "flip": "horizontal" })));
    assert!(d.geometry.flip_x);
    assert!(!d.geometry.flip_y);
    let mirrored = d.geometry.transform * Point::new(10.0, 20.0);
    assert!((mirrored.x - 110.0).abs() < 1e-9);
    assert!((mirrored.y - 20.0).abs() < 1e-9);
}

#[test]
fn legacy_inline_text_becomes_a_document() {
    let d = resolve(&element("text", json!({ "text": "Hello", "color": "#123456" })));
    let Content::Text(text) = &d.content else {
        panic!("expected text content");
    };
    assert_eq!(text.document.plain_text(), "Hello");
    assert_eq!(text.document.runs()[0].style.color.as_deref(), Some("#123456"));
    assert_eq!(text.font_size, 16.0);
}

#[test]
fn svg_inlines_referenced_resource() {
    let resources: BTreeMap<String, Resource> = serde_json::from_value(json!({
        "logo": { "content": "<svg/>", "usages": 1 }
    }))
    .unwrap();
    let config = ResolveConfig::new();
    let ctx = ResolveContext::new(&config).with_resources(&resources);

    let d = resolve_element(&element("svg", json!({ "url": "logo.svg", "resourceKey": "logo" })), &ctx).unwrap();
    let Content::Svg(svg) = &d.content else {
        panic!("expected svg content");
    };
    assert_eq!(svg.inline_source.as_deref(), Some("<svg/>"));

    let d = resolve_element(&element("svg", json!({ "url": "logo.svg", "resourceKey": "other" })), &ctx).unwrap();
    let Content::Svg(svg) = &d.content else {
        panic!("expected svg content");
    };
    assert!(svg.inline_source.is_none());
}

#[test]
fn button_hover_replaces_label_style_wholesale() {
    let d = resolve(&element(
        "button",
        json!({
            "buttonLabel": "Buy",
            "backgroundColor": { "type": "solid", "scolor": "#111" },
            "labelStyle": { "fontFamily": "Inter", "color": "#fff", "fontSize": 14 },
            "hoverState": { "labelStyle": { "color": "#f00" } }
        }),
    ));
    let Content::Button(button) = &d.content else {
        panic!("expected button content");
    };
    assert_eq!(button.normal.label_style.font.font_family, "Inter");
    let hover = button.hover.as_ref().unwrap();
    assert_eq!(hover.label_style.color.as_deref(), Some("#f00"));
    assert_eq!(hover.label_style.font.font_family, "");
    assert_eq!(hover.label_style.font_size, None);
    // Fields the hover state leaves out keep the normal value.
    assert_eq!(hover.fill, button.normal.fill);
    assert!(matches!(
        hover.fill.as_ref().map(|f| &f.paint),
        Some(Paint::Solid { .. })
    ));
}

#[test]
fn unrecognized_feed_is_reported_not_raised() {
    let d = resolve(&element("image", json!({ "url": "a.png", "feed": 42 })));
    assert!(matches!(d.feed, Some(FeedDescriptor::Unrecognized { .. })));

    let d = resolve(&element("image", json!({ "url": "a.png", "feed": { "url": "image_col" } })));
    assert!(matches!(d.feed, Some(FeedDescriptor::Bound { .. })));

    let d = resolve(&element("image", json!({ "url": "a.png" })));
    assert!(d.feed.is_none());
}

#[test]
fn youtube_start_needs_its_flag() {
    let d = resolve(&element(
        "youtube",
        json!({ "youtubeURL": "https://youtu.be/abc", "startAtTime": "0:30" }),
    ));
    let Content::Youtube(yt) = &d.content else {
        panic!("expected youtube content");
    };
    assert!(yt.start_at.is_none());

    let d = resolve(&element(
        "youtube",
        json!({ "youtubeURL": "https://youtu.be/abc", "startAt": true, "startAtTime": "0:30" }),
    ));
    let Content::Youtube(yt) = &d.content else {
        panic!("expected youtube content");
    };
    assert_eq!(yt.start_at.as_deref(), Some("0:30"));
}

#[test]
fn only_rain_has_a_splash() {
    let d = resolve(&element("rain", json!({ "splashEffect": true, "splashEffectSize": 2 })));
    let Content::Rain(rain) = d.content else {
        panic!("expected rain content");
    };
    assert_eq!(rain.splash.map(|s| s.size), Some(2.0));

    let d = resolve(&element("fog", json!({ "size": 3 })));
    let Content::Fog(fog) = d.content else {
        panic!("expected fog content");
    };
    assert!(fog.particle_size.is_none());
    assert!(fog.splash.is_none());
}

#[test]
fn descriptor_serializes_kind_and_content_tag() {
    let d = resolve(&element("clipart", json!({ "svgObject": { "paths": [] } })));
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["kind"], "clipart");
    assert_eq!(v["content"]["type"], "clipart");
    assert_eq!(v["content"]["svgObject"], json!({ "paths": [] }));
}
