use super::*;
use crate::schema::fill::Background;
use serde_json::json;

fn base_json() -> serde_json::Value {
    json!({ "id": 7, "x": 10, "y": 20, "width": 100, "height": 50 })
}

fn with(kind: &str, extra: serde_json::Value) -> serde_json::Value {
    let mut props = base_json();
    if let (Some(p), Some(e)) = (props.as_object_mut(), extra.as_object()) {
        for (k, v) in e {
            p.insert(k.clone(), v.clone());
        }
    }
    json!({ "type": "layer", "layerType": kind, "properties": props })
}

#[test]
fn base_defaults_apply_when_fields_are_absent() {
    let e: Element = serde_json::from_value(with("shape", json!({}))).unwrap();
    let b = e.base();
    assert_eq!(b.id, 7);
    assert_eq!(b.opacity, 100.0);
    assert_eq!(b.rotation, 0.0);
    assert_eq!(b.flip, Flip::None);
    assert!(b.visible);
    assert!(!b.locked);
    assert_eq!(b.layer_name, "");
    assert!(b.group.is_none());
    assert!(b.actions.is_empty());
    assert!(b.build_in.is_none());
}

#[test]
fn missing_geometry_is_an_error() {
    let err = serde_json::from_value::<Element>(json!({
        "layerType": "shape",
        "properties": { "id": 1, "x": 0, "y": 0, "width": 10 }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("height"), "{err}");
}

#[test]
fn image_requires_url_and_defaults_placement() {
    assert!(serde_json::from_value::<Element>(with("image", json!({}))).is_err());

    let e: Element = serde_json::from_value(with("image", json!({ "url": "a.png" }))).unwrap();
    let Element::Image { properties } = e else {
        panic!("expected an image");
    };
    assert_eq!(properties.url, "a.png");
    assert_eq!(properties.scale_mode, ScaleMode::Stretch);
    assert_eq!(properties.horizontal_align, Align::Center);
    assert_eq!(properties.vertical_align, Align::Center);
    assert_eq!(properties.content_scale, 1.0);
    assert_eq!(properties.content_offset_x, 0.0);
}

#[test]
fn text_defaults_and_inline_legacy_style() {
    let e: Element = serde_json::from_value(with(
        "text",
        json!({ "text": "Hello", "fontFamily": "Arial", "color": "#123456" }),
    ))
    .unwrap();
    let Element::Text { properties } = e else {
        panic!("expected text");
    };
    assert_eq!(properties.font_size, 16.0);
    assert_eq!(properties.line_height, 1.2);
    assert_eq!(properties.alignment, TextAlign::Left);
    assert_eq!(properties.vertical_align, VerticalAlign::Top);
    assert_eq!(properties.text.as_deref(), Some("Hello"));
    assert_eq!(properties.inline_style.font_family.as_deref(), Some("Arial"));
    assert_eq!(properties.inline_style.color.as_deref(), Some("#123456"));
    assert!(properties.config.is_none());
}

#[test]
fn video_defaults() {
    let e: Element = serde_json::from_value(with("video", json!({ "url": "v.mp4" }))).unwrap();
    let Element::Video { properties } = e else {
        panic!("expected video");
    };
    assert_eq!(properties.autoplay, Autoplay::Enabled);
    assert_eq!(properties.volume, 1.0);
    assert!(!properties.looped);
}

#[test]
fn shape_reads_fill_border_and_type() {
    let e: Element = serde_json::from_value(with(
        "shape",
        json!({
            "type": "circle",
            "backgroundColor": { "type": "solid", "scolor": "#f00", "useBorder": true, "borderColor": "#000" },
            "border": { "color": "#0f0", "weight": 2, "radius": 4 }
        }),
    ))
    .unwrap();
    let Element::Shape { properties } = e else {
        panic!("expected shape");
    };
    assert_eq!(properties.shape, ShapeType::Circle);
    let fill = properties.background_color.unwrap();
    assert!(matches!(fill.background, Background::Solid(_)));
    assert_eq!(fill.border.use_border, Some(true));
    assert_eq!(properties.border.unwrap().weight, 2.0);
}

#[test]
fn youtube_and_embed_required_fields() {
    assert!(serde_json::from_value::<Element>(with("youtube", json!({}))).is_err());
    assert!(serde_json::from_value::<Element>(with("embed", json!({}))).is_err());

    let e: Element = serde_json::from_value(with(
        "youtube",
        json!({ "youtubeURL": "https://youtu.be/abc" }),
    ))
    .unwrap();
    assert_eq!(e.as_youtube().unwrap().youtube_url, "https://youtu.be/abc");

    let e: Element = serde_json::from_value(with("embed", json!({ "code": "<b>x</b>" }))).unwrap();
    let embed = e.as_embed().unwrap();
    assert_eq!(embed.use_iframe, UseIframe::Auto);
    assert_eq!(embed.margin, 0.0);
}

#[test]
fn countdown_value_is_number_or_string() {
    let e: Element =
        serde_json::from_value(with("countdown", json!({ "countValue": 90 }))).unwrap();
    assert_eq!(
        e.as_countdown().unwrap().count_value,
        Some(CountValue::Seconds(90.0))
    );

    let e: Element = serde_json::from_value(with(
        "countdown",
        json!({ "countValue": "2030-01-01 00:00" }),
    ))
    .unwrap();
    assert!(matches!(
        e.as_countdown().unwrap().count_value,
        Some(CountValue::Date(_))
    ));
}

#[test]
fn validate_rejects_out_of_range_opacity_and_negative_size() {
    let e: Element = serde_json::from_value(with("shape", json!({ "opacity": 101 }))).unwrap();
    assert!(matches!(
        e.base().validate(),
        Err(BannerError::InvalidRange(_))
    ));

    let e: Element = serde_json::from_value(with("shape", json!({ "width": -1 }))).unwrap();
    assert!(matches!(
        e.base().validate(),
        Err(BannerError::InvalidRange(_))
    ));

    let e: Element = serde_json::from_value(with("shape", json!({ "opacity": 0 }))).unwrap();
    assert!(e.base().validate().is_ok());
}

#[test]
fn flip_axes() {
    assert!(Flip::Both.horizontal() && Flip::Both.vertical());
    assert!(Flip::Horizontal.horizontal() && !Flip::Horizontal.vertical());
    assert!(!Flip::None.horizontal() && !Flip::None.vertical());
}
