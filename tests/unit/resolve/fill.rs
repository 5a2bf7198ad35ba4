use super::*;
use crate::schema::fill::{LinearGradientFill, SolidFill};
use serde_json::json;

fn fill(v: serde_json::Value) -> Fill {
    serde_json::from_value(v).unwrap()
}

#[test]
fn solid_fill_serializes_with_null_border() {
    let out = resolve_fill(
        &fill(json!({ "type": "solid", "scolor": "#ff0000" })),
        &ResolveConfig::default(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({ "kind": "solid", "color": "#ff0000", "border": null })
    );
}

#[test]
fn border_needs_an_explicit_true_flag() {
    let cfg = ResolveConfig::default();
    for flag in [json!(null), json!(false)] {
        let mut v = json!({ "type": "solid", "scolor": "#fff", "borderColor": "#000" });
        if !flag.is_null() {
            v["useBorder"] = flag;
        }
        assert_eq!(resolve_fill(&fill(v), &cfg).unwrap().unwrap().border, None);
    }

    let out = resolve_fill(
        &fill(json!({ "type": "solid", "scolor": "#fff", "useBorder": true, "borderColor": "#000" })),
        &cfg,
    )
    .unwrap()
    .unwrap();
    assert_eq!(
        out.border,
        Some(Stroke {
            color: "#000".to_string(),
            width: FILL_BORDER_WIDTH,
            radius: 0.0
        })
    );
}

#[test]
fn none_paints_nothing() {
    assert_eq!(resolve_fill(&Fill::none(), &ResolveConfig::default()).unwrap(), None);
}

#[test]
fn linear_gradient_defaults_rotation_and_keeps_stop_order() {
    let out = resolve_background(
        &Background::LinearGradient(LinearGradientFill {
            grad_colors: vec![
                GradColor { c: "#fff".into(), p: 0.0 },
                GradColor { c: "#000".into(), p: 1.0 },
            ],
            background_rotation: None,
        }),
        &ResolveConfig::default(),
    )
    .unwrap();
    assert_eq!(
        out,
        Some(Paint::LinearGradient {
            stops: vec![
                GradientStop { color: "#fff".into(), offset: 0.0 },
                GradientStop { color: "#000".into(), offset: 1.0 },
            ],
            rotation_deg: 0.0,
        })
    );
}

#[test]
fn radial_gradient_defaults_anchor() {
    let out = resolve_background(
        &fill(json!({ "type": "rgrad", "gradColors": [] })).background,
        &ResolveConfig::default(),
    )
    .unwrap();
    assert_eq!(
        out,
        Some(Paint::RadialGradient {
            stops: vec![],
            anchor: RadialAnchor::CenterCenter
        })
    );
}

#[test]
fn image_repeats_only_when_tiled() {
    let cfg = ResolveConfig::default();
    for (mode, repeat) in [("tile", true), ("stretch", false), ("aspect", false), ("crop", false)] {
        let out = resolve_background(
            &fill(json!({ "type": "image", "url": "bg.png", "scaleMode": mode })).background,
            &cfg,
        )
        .unwrap();
        let Some(Paint::Image(img)) = out else {
            panic!("expected image paint");
        };
        assert_eq!(img.repeat, repeat, "{mode}");
    }
}

#[test]
fn image_url_joins_asset_base() {
    let cfg = ResolveConfig::new()
        .with_asset_base_url(url::Url::parse("https://cdn.example.com/media/").unwrap());
    let out = resolve_background(
        &fill(json!({ "type": "image", "url": "bg.png" })).background,
        &cfg,
    )
    .unwrap();
    let Some(Paint::Image(img)) = out else {
        panic!("expected image paint");
    };
    assert_eq!(img.url, "https://cdn.example.com/media/bg.png");
}

#[test]
fn shape_border_needs_weight() {
    let none = ShapeBorder { color: "#000".into(), weight: 0.0, radius: 3.0 };
    assert_eq!(shape_border(Some(&none)).unwrap(), None);

    let some = ShapeBorder { color: "#000".into(), weight: 2.0, radius: 3.0 };
    assert_eq!(
        shape_border(Some(&some)).unwrap(),
        Some(Stroke { color: "#000".into(), width: 2.0, radius: 3.0 })
    );

    let bad = ShapeBorder { color: "#000".into(), weight: -1.0, radius: 0.0 };
    assert!(matches!(shape_border(Some(&bad)), Err(BannerError::InvalidRange(_))));
}

#[test]
fn solid_fill_variant_is_distinct_from_none() {
    let f = Fill {
        background: Background::Solid(SolidFill { scolor: "#abc".into(), feed: None }),
        border: BorderFlag::default(),
    };
    assert!(resolve_fill(&f, &ResolveConfig::default()).unwrap().is_some());
}
