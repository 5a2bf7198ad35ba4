use super::*;
use serde_json::json;

#[test]
fn known_and_unknown_preset_names_round_trip() {
    let t: TransitionType = serde_json::from_value(json!("slideBounce")).unwrap();
    assert_eq!(t, TransitionType::SlideBounce);

    let t: TransitionType = serde_json::from_value(json!("warpDrive")).unwrap();
    assert_eq!(t, TransitionType::Other("warpDrive".to_string()));
    assert_eq!(serde_json::to_value(&t).unwrap(), json!("warpDrive"));
}

#[test]
fn transition_defaults_fill_optional_fields() {
    let t: Transition = serde_json::from_value(json!({ "type": "alpha" })).unwrap();
    assert_eq!(t.kind, TransitionType::Alpha);
    assert_eq!(t.duration, 0.0);
    assert_eq!(t.tween, Tween::Sine);
    assert_eq!(t.ease, Ease::Linear);
    assert!(t.advanced_properties.is_none());
}

#[test]
fn transition_without_type_is_rejected() {
    assert!(serde_json::from_value::<Transition>(json!({ "duration": 1.0 })).is_err());
}

#[test]
fn slide_transition_keeps_cross_mode() {
    let t: SlideTransition = serde_json::from_value(json!({
        "type": "slide",
        "direction": "l2r",
        "duration": 0.5,
        "crosstype": "hide"
    }))
    .unwrap();
    assert_eq!(t.crosstype, CrossType::Hide);
    assert_eq!(t.transition.direction, Some(Direction::LeftToRight));
}

#[test]
fn advanced_groups_decode() {
    let adv: AdvancedProperties = serde_json::from_value(json!({
        "move": [{ "delay": 0, "duration": 1, "fromX": 0, "toX": 10, "fromY": 0, "toY": 5, "tween": "Back", "ease": "easeOut" }],
        "scale": [{ "delay": 0, "duration": 1, "from": [1, 1], "to": [2, 2], "tween": "Quad", "ease": "easeIn",
                    "transformOrigin": { "from": "center", "to": "top left" } }]
    }))
    .unwrap();
    assert_eq!(adv.moves.len(), 1);
    assert_eq!(adv.moves[0].to_x, 10.0);
    assert_eq!(adv.scale[0].to, [2.0, 2.0]);
    assert!(adv.rotate.is_empty());
}
