use super::*;
use serde_json::{Value, json};

fn layer(id: u64, kind: &str) -> Value {
    json!({
        "type": "layer",
        "layerType": kind,
        "properties": { "id": id, "x": id, "y": 0, "width": 10, "height": 10, "url": "m.png" }
    })
}

fn design(elements: Value, last_id: u64) -> Design {
    Design::from_value(json!({
        "properties": { "name": "promo", "width": 300, "height": 250, "lastId": last_id },
        "elements": elements
    }))
    .unwrap()
}

fn ids(seq: &RenderSequence) -> Vec<u64> {
    seq.elements().map(|e| e.id).collect()
}

#[test]
fn items_follow_slide_then_element_order() {
    let d = design(
        json!([
            {
                "type": "slide",
                "properties": { "duration": 2, "transition": { "type": "alpha", "duration": 0.5 } },
                "elements": [layer(1, "image"), layer(2, "shape")]
            },
            {
                "type": "slide",
                "properties": { "duration": 3, "stopSlide": true },
                "elements": [layer(3, "video")]
            }
        ]),
        3,
    );
    let seq = Walker::resolve(&d, &ResolveConfig::new()).unwrap();
    assert_eq!(ids(&seq), vec![1, 2, 3]);
    assert!(seq.warnings.is_empty());
    assert_eq!(seq.design.slide_count, 2);

    let first = &seq.items[0].slide;
    assert_eq!(first.index, Some(0));
    assert_eq!(first.duration, 2.0);
    assert_eq!(first.transition.as_ref().map(|t| t.transition.kind.as_str()), Some("alpha"));
    let last = &seq.items[2].slide;
    assert_eq!(last.index, Some(1));
    assert!(last.stop);
}

#[test]
fn unsupported_layers_become_warnings() {
    let d = design(
        json!([{
            "type": "slide",
            "elements": [
                layer(1, "image"),
                { "type": "layer", "layerType": "banana", "properties": { "id": 2 } },
                layer(3, "shape")
            ]
        }]),
        3,
    );
    let seq = Walker::resolve(&d, &ResolveConfig::new()).unwrap();
    assert_eq!(ids(&seq), vec![1, 3]);
    assert_eq!(seq.warnings.len(), 1);
    let w = &seq.warnings[0];
    assert_eq!(w.path, "/elements/0/elements/1");
    assert_eq!(w.kind, ErrorKind::SchemaMismatch);
    assert!(w.message.contains("element 2"), "{}", w.message);
}

#[test]
fn bare_elements_use_the_implicit_slide() {
    let d = design(json!([layer(1, "image"), layer(2, "image")]), 2);
    let seq = Walker::resolve(&d, &ResolveConfig::new()).unwrap();
    assert_eq!(ids(&seq), vec![1, 2]);
    assert_eq!(seq.design.slide_count, 0);
    assert!(seq.items.iter().all(|i| i.slide == SlideContext::default()));
}

#[test]
fn empty_design_yields_an_empty_sequence() {
    let seq = Walker::resolve(&design(json!([]), 0), &ResolveConfig::new()).unwrap();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.design.name, "promo");
    assert_eq!((seq.design.width, seq.design.height), (300.0, 250.0));
}

#[test]
fn stale_last_id_fails_before_resolving() {
    let d = design(json!([layer(9, "image")]), 4);
    let err = Walker::resolve(&d, &ResolveConfig::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRange);
}

#[test]
fn feed_problems_are_warnings() {
    let d = Design::from_value(json!({
        "properties": { "width": 300, "height": 250, "lastId": 1, "feed": 5 },
        "elements": [{
            "type": "layer",
            "layerType": "image",
            "properties": { "id": 1, "x": 0, "y": 0, "width": 1, "height": 1, "url": "a.png", "feed": "col" }
        }]
    }))
    .unwrap();
    let seq = Walker::resolve(&d, &ResolveConfig::new()).unwrap();
    assert_eq!(seq.len(), 1);
    assert!(seq.design.feed.is_none());
    let paths: Vec<&str> = seq.warnings.iter().map(|w| w.path.as_str()).collect();
    assert_eq!(paths, vec!["/properties/feed", "/elements/0/properties/feed"]);
}

#[test]
fn asset_base_applies_to_every_element() {
    let config = ResolveConfig::new()
        .with_asset_base_url(url::Url::parse("https://cdn.example.com/assets").unwrap());
    let seq = Walker::resolve(&design(json!([layer(1, "image")]), 1), &config).unwrap();
    let item = &seq.items[0].element;
    let crate::resolve::descriptor::Content::Image(media) = &item.content else {
        panic!("expected image content");
    };
    assert_eq!(media.url, "https://cdn.example.com/assets/m.png");
}

#[test]
fn resolve_many_keeps_input_order() {
    let designs = vec![
        design(json!([layer(1, "image")]), 1),
        design(json!([layer(5, "image")]), 2),
        design(json!([layer(1, "image"), layer(2, "shape")]), 2),
    ];
    let results = resolve_many(&designs, &ResolveConfig::new());
    assert_eq!(results.len(), 3);
    assert_eq!(ids(results[0].as_ref().unwrap()), vec![1]);
    assert_eq!(
        results[1].as_ref().unwrap_err().kind(),
        ErrorKind::InvalidRange
    );
    assert_eq!(ids(results[2].as_ref().unwrap()), vec![1, 2]);
}
