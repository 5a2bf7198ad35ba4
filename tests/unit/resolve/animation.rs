use super::*;
use serde_json::json;

fn transition(v: serde_json::Value) -> Transition {
    serde_json::from_value(v).unwrap()
}

#[test]
fn plain_transition_has_no_keyframes() {
    let d = resolve_transition(&transition(json!({
        "type": "slide", "direction": "l2r", "duration": 0.5, "delay": 0.2,
        "tween": "Back", "ease": "easeOut", "preset": "fromLeft"
    })));
    assert_eq!(d.kind, "slide");
    assert_eq!(d.direction.as_deref(), Some("l2r"));
    assert_eq!(d.duration, 0.5);
    assert_eq!(d.delay, 0.2);
    assert_eq!(d.easing, Easing { tween: Tween::Back, curve: Ease::EaseOut });
    assert!(d.keyframes.is_empty());
    assert_eq!(d.options.preset.as_deref(), Some("fromLeft"));
    assert!(!d.is_none());
}

#[test]
fn advanced_keyframes_flatten_in_group_order() {
    let d = resolve_transition(&transition(json!({
        "type": "advanced",
        "advancedProperties": {
            "blur": [{ "from": 4, "to": 0 }],
            "opacity": [{ "from": 0, "to": 1, "duration": 1 }],
            "scale": [{ "from": [0.5, 0.5], "to": [1, 1], "transformOrigin": { "from": "center", "to": "top" } }],
            "rotate": [{ "from": 0, "to": 90 }],
            "move": [{ "fromX": -10, "toX": 0, "fromY": 5, "toY": 0 }]
        }
    })));
    let order: Vec<&str> = d
        .keyframes
        .iter()
        .map(|k| match k {
            Keyframe::Move { .. } => "move",
            Keyframe::Rotate { .. } => "rotate",
            Keyframe::Scale { .. } => "scale",
            Keyframe::Opacity { .. } => "opacity",
            Keyframe::Blur { .. } => "blur",
        })
        .collect();
    assert_eq!(order, vec!["move", "rotate", "scale", "opacity", "blur"]);
    let Keyframe::Move { from, to, .. } = &d.keyframes[0] else {
        panic!("expected move");
    };
    assert_eq!((*from, *to), ([-10.0, 5.0], [0.0, 0.0]));
    let Keyframe::Scale { transform_origin, .. } = &d.keyframes[2] else {
        panic!("expected scale");
    };
    assert_eq!(transform_origin.as_ref().unwrap().to, "top");
}

#[test]
fn keyframes_are_ignored_for_non_advanced_types() {
    let d = resolve_transition(&transition(json!({
        "type": "alpha",
        "advancedProperties": { "rotate": [{ "from": 0, "to": 90 }] }
    })));
    assert!(d.keyframes.is_empty());
}

#[test]
fn mid_transition_carries_its_own_options() {
    let mid: TransitionMid = serde_json::from_value(json!({
        "type": "pulse", "duration": 1, "variation": "soft", "motionTime": 2, "startEnd": "start",
        "gradient": { "gradColors": [{ "c": "#fff", "p": 0 }] }
    }))
    .unwrap();
    let d = resolve_mid(&mid);
    assert_eq!(d.kind, "pulse");
    assert_eq!(d.options.variation.as_deref(), Some("soft"));
    assert_eq!(d.options.motion_time, Some(2.0));
    assert_eq!(d.options.gradient.len(), 1);
}

#[test]
fn slide_transition_keeps_cross_mode() {
    let tr: SlideTransition = serde_json::from_value(json!({
        "type": "alpha", "duration": 1, "crosstype": "hide"
    }))
    .unwrap();
    let d = resolve_slide_transition(&tr);
    assert_eq!(d.cross, CrossType::Hide);
    assert_eq!(d.transition.kind, "alpha");
}

#[test]
fn element_animation_copies_capability_answers() {
    let e: Element = serde_json::from_value(json!({
        "layerType": "video",
        "properties": {
            "id": 1, "x": 0, "y": 0, "width": 1, "height": 1, "url": "v.mp4",
            "buildIn": { "type": "none" }
        }
    }))
    .unwrap();
    let a = resolve_animation(&e);
    assert!(!a.has_animation);
    assert!(a.is_animated);
    assert!(a.build_in.unwrap().is_none());
    assert!(a.build_mid.is_none());
}
