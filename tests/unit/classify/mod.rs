use super::*;
use serde_json::json;

fn element(kind: &str, slots: serde_json::Value) -> Element {
    let mut props = json!({ "id": 1, "x": 0, "y": 0, "width": 1, "height": 1, "url": "u", "code": "c", "youtubeURL": "y" });
    if let (Some(p), Some(s)) = (props.as_object_mut(), slots.as_object()) {
        for (k, v) in s {
            p.insert(k.clone(), v.clone());
        }
    }
    serde_json::from_value(json!({ "layerType": kind, "properties": props })).unwrap()
}

fn slot(kind: &str) -> serde_json::Value {
    json!({ "type": kind, "duration": 1 })
}

#[test]
fn node_shapes() {
    assert_eq!(classify_node(&json!({ "type": "slide" })), NodeClass::Slide);
    assert_eq!(classify_node(&json!({ "type": "layer" })), NodeClass::Element);
    assert_eq!(classify_node(&json!({ "layerType": "text" })), NodeClass::Element);
    assert_eq!(classify_node(&json!({ "properties": {} })), NodeClass::Design);
}

#[test]
fn has_animation_needs_all_three_slots() {
    let all = element(
        "shape",
        json!({ "buildIn": slot("alpha"), "buildMid": slot("none"), "buildOut": slot("none") }),
    );
    assert!(has_animation(&all));

    let missing_mid = element(
        "shape",
        json!({ "buildIn": slot("alpha"), "buildOut": slot("alpha") }),
    );
    assert!(!has_animation(&missing_mid));

    let missing_out = element(
        "shape",
        json!({ "buildIn": slot("alpha"), "buildMid": slot("pulse") }),
    );
    assert!(!has_animation(&missing_out));
}

#[test]
fn all_none_slots_do_not_animate() {
    let e = element(
        "shape",
        json!({ "buildIn": slot("none"), "buildMid": slot("none"), "buildOut": slot("none") }),
    );
    assert!(!has_animation(&e));
    assert!(!is_animated(&e));
}

#[test]
fn time_based_kinds_are_always_animated() {
    for kind in ["video", "audio", "youtube", "embed", "countdown", "rain", "snow", "fog"] {
        let e = element(kind, json!({}));
        assert!(is_animated(&e), "{kind}");
        assert!(!has_animation(&e), "{kind}");
    }
    assert!(!is_animated(&element("image", json!({}))));
}

#[test]
fn media_and_weather_predicates() {
    assert!(is_media(&element("svg", json!({}))));
    assert!(!is_media(&element("shape", json!({}))));
    assert!(is_weather(&element("fog", json!({}))));
}
