use serde::{Deserialize, Serialize};

/// Declares a string-backed enum that keeps unrecognized names instead of rejecting them.
macro_rules! open_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A name this crate does not know; kept verbatim.
            Other(String),
        }

        impl $name {
            /// The name as spelled in documents.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(s) => s.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($text => Self::$variant,)+
                    _ => Self::Other(s),
                }
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                match v {
                    $name::Other(s) => s,
                    other => other.as_str().to_string(),
                }
            }
        }
    };
}

open_string_enum! {
    /// Transition preset name. `none` means "no animation in this slot".
    pub enum TransitionType {
        None => "none",
        Instant => "instant",
        Alpha => "alpha",
        AlphaWords => "alpha-words",
        Blur => "blur",
        BlurWords => "blur-words",
        Slide => "slide",
        SlideBounce => "slideBounce",
        SlideElastic => "slideElastic",
        Roll => "roll",
        Zoom => "zoom",
        Flip => "flip",
        Rotate => "rotate",
        Scale => "scale",
        Show => "show",
        Hide => "hide",
        Cross => "cross",
        ScaleBounce => "scaleBounce",
        ScaleElastic => "scaleElastic",
        Vibrate => "vibrate",
        Flicker => "flicker",
        Shake => "shake",
        Jello => "jello",
        Bounce => "bounce",
        Pulsate => "pulsate",
        Blink => "blink",
        Video => "video",
        Audio => "audio",
        Advanced => "advanced",
        ShadowPop => "shadowPop",
        FadeAudio => "fadeAudio",
        Swing => "swing",
        Fly => "fly",
        Tilt => "tilt",
        Slit => "slit",
        Step => "step",
        KenBurns => "kenBurns",
    }
}

open_string_enum! {
    /// Direction a transition travels in.
    pub enum Direction {
        Custom => "custom",
        LeftToRight => "l2r",
        RightToLeft => "r2l",
        TopToBottom => "t2b",
        BottomToTop => "b2t",
        Top => "top",
        Left => "left",
        Right => "right",
        Bottom => "bottom",
        TopRight => "topRight",
        TopLeft => "topLeft",
        BottomRight => "bottomRight",
        BottomLeft => "bottomLeft",
        Forward => "forward",
        Backward => "backward",
        Center => "center",
        Vertical => "vertical",
        Horizontal => "horizontal",
        Random => "random",
        TopForward => "topForward",
        TopBack => "topBack",
        RightForward => "rightForward",
        RightBack => "rightBack",
        BottomForward => "bottomForward",
        BottomBack => "bottomBack",
        LeftForward => "leftForward",
        LeftBack => "leftBack",
    }
}

/// Easing family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tween {
    #[default]
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Strong,
    Bounce,
    Back,
    Elastic,
}

/// Easing curve applied within a family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// How a slide transition treats the outgoing slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossType {
    #[default]
    Cross,
    Hide,
    Show,
}

/// Entry ("buildIn") or exit ("buildOut") transition of an element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(rename = "type")]
    pub kind: TransitionType,
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
    /// Seconds.
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub tween: Tween,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub words_duration: Option<f64>,
    #[serde(default)]
    pub words_appear_order: Option<String>,
    #[serde(default)]
    pub slide_pos_x: Option<f64>,
    #[serde(default)]
    pub slide_pos_y: Option<f64>,
    #[serde(default)]
    pub alpha_offset: Option<f64>,
    #[serde(default)]
    pub slide_offset: Option<f64>,
    #[serde(default)]
    pub blur_amount: Option<f64>,
    #[serde(default)]
    pub zoom: Option<f64>,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub shadow_length: Option<f64>,
    #[serde(default)]
    pub advanced_properties: Option<AdvancedProperties>,
}

/// Gradient sweep used by some mid-state presets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionGradient {
    #[serde(default)]
    pub grad_colors: Vec<super::fill::GradColor>,
}

/// Mid-state ("buildMid") transition: a looping emphasis between entry and exit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionMid {
    #[serde(rename = "type")]
    pub kind: TransitionType,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub motion_time: Option<f64>,
    #[serde(default)]
    pub tween: Tween,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub start_end: Option<String>,
    #[serde(default)]
    pub advanced_properties: Option<AdvancedProperties>,
    #[serde(default)]
    pub gradient: Option<TransitionGradient>,
}

/// Transition between slides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideTransition {
    #[serde(flatten)]
    pub transition: Transition,
    #[serde(default)]
    pub crosstype: CrossType,
}

/// Per-property keyframe groups of an `advanced` transition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedProperties {
    #[serde(default, rename = "move")]
    pub moves: Vec<AdvancedMove>,
    #[serde(default)]
    pub rotate: Vec<AdvancedScalar>,
    #[serde(default)]
    pub scale: Vec<AdvancedScale>,
    #[serde(default)]
    pub opacity: Vec<AdvancedScalar>,
    #[serde(default)]
    pub blur: Vec<AdvancedScalar>,
}

/// Translation keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedMove {
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub from_x: f64,
    #[serde(default)]
    pub to_x: f64,
    #[serde(default)]
    pub from_y: f64,
    #[serde(default)]
    pub to_y: f64,
    #[serde(default)]
    pub tween: Tween,
    #[serde(default)]
    pub ease: Ease,
}

/// Single-value keyframe (rotate, opacity, blur).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvancedScalar {
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub from: f64,
    #[serde(default)]
    pub to: f64,
    #[serde(default)]
    pub tween: Tween,
    #[serde(default)]
    pub ease: Ease,
}

/// Transform-origin change that accompanies a scale keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OriginChange {
    pub from: String,
    pub to: String,
}

/// Two-axis scale keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedScale {
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub duration: f64,
    pub from: [f64; 2],
    pub to: [f64; 2],
    #[serde(default)]
    pub tween: Tween,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub transform_origin: Option<OriginChange>,
}

#[cfg(test)]
#[path = "../../tests/unit/schema/transition.rs"]
mod tests;
