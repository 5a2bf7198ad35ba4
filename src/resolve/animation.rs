use serde::Serialize;

use super::fill::GradientStop;
use crate::{
    classify::{has_animation, is_animated},
    schema::{
        element::Element,
        transition::{
            AdvancedProperties, CrossType, Ease, OriginChange, SlideTransition, Transition,
            TransitionMid, TransitionType, Tween,
        },
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Easing {
    pub tween: Tween,
    pub curve: Ease,
}

/// One flattened keyframe of an `advanced` transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "property", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Keyframe {
    Move {
        delay: f64,
        duration: f64,
        from: [f64; 2],
        to: [f64; 2],
        easing: Easing,
    },
    Rotate {
        delay: f64,
        duration: f64,
        from: f64,
        to: f64,
        easing: Easing,
    },
    Scale {
        delay: f64,
        duration: f64,
        from: [f64; 2],
        to: [f64; 2],
        easing: Easing,
        transform_origin: Option<OriginChange>,
    },
    Opacity {
        delay: f64,
        duration: f64,
        from: f64,
        to: f64,
        easing: Easing,
    },
    Blur {
        delay: f64,
        duration: f64,
        from: f64,
        to: f64,
        easing: Easing,
    },
}

/// Preset-specific knobs, carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_appear_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_pos_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_pos_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_end: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gradient: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub direction: Option<String>,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    /// Empty unless the type is `advanced`.
    pub keyframes: Vec<Keyframe>,
    pub options: TransitionOptions,
}

impl TransitionDescriptor {
    pub fn is_none(&self) -> bool {
        self.kind == TransitionType::None.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideTransitionDescriptor {
    #[serde(flatten)]
    pub transition: TransitionDescriptor,
    pub cross: CrossType,
}

/// Animation intent of one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDescriptor {
    pub has_animation: bool,
    pub is_animated: bool,
    pub build_in: Option<TransitionDescriptor>,
    pub build_mid: Option<TransitionDescriptor>,
    pub build_out: Option<TransitionDescriptor>,
}

pub fn resolve_animation(element: &Element) -> AnimationDescriptor {
    let base = element.base();
    AnimationDescriptor {
        has_animation: has_animation(element),
        is_animated: is_animated(element),
        build_in: base.build_in.as_ref().map(resolve_transition),
        build_mid: base.build_mid.as_ref().map(resolve_mid),
        build_out: base.build_out.as_ref().map(resolve_transition),
    }
}

pub fn resolve_transition(tr: &Transition) -> TransitionDescriptor {
    TransitionDescriptor {
        kind: tr.kind.as_str().to_string(),
        direction: tr.direction.as_ref().map(|d| d.as_str().to_string()),
        duration: tr.duration,
        delay: tr.delay,
        easing: Easing {
            tween: tr.tween,
            curve: tr.ease,
        },
        keyframes: keyframes(&tr.kind, tr.advanced_properties.as_ref()),
        options: TransitionOptions {
            preset: tr.preset.clone(),
            words_duration: tr.words_duration,
            words_appear_order: tr.words_appear_order.clone(),
            slide_pos_x: tr.slide_pos_x,
            slide_pos_y: tr.slide_pos_y,
            slide_offset: tr.slide_offset,
            alpha_offset: tr.alpha_offset,
            blur_amount: tr.blur_amount,
            zoom: tr.zoom,
            color: tr.color.clone(),
            shadow_length: tr.shadow_length,
            ..TransitionOptions::default()
        },
    }
}

pub fn resolve_mid(tr: &TransitionMid) -> TransitionDescriptor {
    let gradient = tr
        .gradient
        .as_ref()
        .map(|g| {
            g.grad_colors
                .iter()
                .map(|c| GradientStop {
                    color: c.c.clone(),
                    offset: c.p,
                })
                .collect()
        })
        .unwrap_or_default();

    TransitionDescriptor {
        kind: tr.kind.as_str().to_string(),
        direction: tr.direction.as_ref().map(|d| d.as_str().to_string()),
        duration: tr.duration,
        delay: tr.delay,
        easing: Easing {
            tween: tr.tween,
            curve: tr.ease,
        },
        keyframes: keyframes(&tr.kind, tr.advanced_properties.as_ref()),
        options: TransitionOptions {
            preset: tr.preset.clone(),
            variation: tr.variation.clone(),
            motion_time: tr.motion_time,
            start_end: tr.start_end.clone(),
            gradient,
            ..TransitionOptions::default()
        },
    }
}

pub fn resolve_slide_transition(tr: &SlideTransition) -> SlideTransitionDescriptor {
    SlideTransitionDescriptor {
        transition: resolve_transition(&tr.transition),
        cross: tr.crosstype,
    }
}

/// Flatten keyframe groups in the order move, rotate, scale, opacity, blur.
fn keyframes(kind: &TransitionType, advanced: Option<&AdvancedProperties>) -> Vec<Keyframe> {
    let (TransitionType::Advanced, Some(adv)) = (kind, advanced) else {
        return Vec::new();
    };

    let moves = adv.moves.iter().map(|m| Keyframe::Move {
        delay: m.delay,
        duration: m.duration,
        from: [m.from_x, m.from_y],
        to: [m.to_x, m.to_y],
        easing: Easing {
            tween: m.tween,
            curve: m.ease,
        },
    });
    let rotates = adv.rotate.iter().map(|r| Keyframe::Rotate {
        delay: r.delay,
        duration: r.duration,
        from: r.from,
        to: r.to,
        easing: Easing {
            tween: r.tween,
            curve: r.ease,
        },
    });
    let scales = adv.scale.iter().map(|s| Keyframe::Scale {
        delay: s.delay,
        duration: s.duration,
        from: s.from,
        to: s.to,
        easing: Easing {
            tween: s.tween,
            curve: s.ease,
        },
        transform_origin: s.transform_origin.clone(),
    });
    let opacities = adv.opacity.iter().map(|o| Keyframe::Opacity {
        delay: o.delay,
        duration: o.duration,
        from: o.from,
        to: o.to,
        easing: Easing {
            tween: o.tween,
            curve: o.ease,
        },
    });
    let blurs = adv.blur.iter().map(|b| Keyframe::Blur {
        delay: b.delay,
        duration: b.duration,
        from: b.from,
        to: b.to,
        easing: Easing {
            tween: b.tween,
            curve: b.ease,
        },
    });

    moves
        .chain(rotates)
        .chain(scales)
        .chain(opacities)
        .chain(blurs)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/animation.rs"]
mod tests;
