use serde::{Deserialize, Serialize};

/// Slide relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeSlide {
    Prev,
    Next,
    First,
    Last,
}

/// Target of a go-to-slide action: an absolute slide index or a relative step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideRef {
    Index(u64),
    Relative(RelativeSlide),
}

/// Browsing context a go-to-URL action opens in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlTarget {
    #[default]
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

impl UrlTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SelfFrame => "_self",
            Self::Parent => "_parent",
            Self::Top => "_top",
        }
    }
}

/// Interaction attached to an element, fired by a user-defined `event` name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ActionDef", into = "ActionDef")]
pub enum Action {
    None {
        event: String,
    },
    GotoUrl {
        event: String,
        url: String,
        target: UrlTarget,
        use_hand_cursor: bool,
    },
    GotoSlide {
        event: String,
        slide: SlideRef,
        use_hand_cursor: bool,
    },
    /// Go-to-slide fired when a video layer finishes playing.
    VideoEndGotoSlide {
        event: String,
        slide: SlideRef,
        url: String,
        target: Option<String>,
        use_hand_cursor: bool,
    },
}

impl Action {
    pub fn event(&self) -> &str {
        match self {
            Self::None { event }
            | Self::GotoUrl { event, .. }
            | Self::GotoSlide { event, .. }
            | Self::VideoEndGotoSlide { event, .. } => event,
        }
    }
}

// Wire shape. Both go-to-slide flavours share the `gotoSlide` tag; the video-end flavour is
// the one that carries a `url`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
enum ActionDef {
    #[serde(rename = "none")]
    None {
        #[serde(default)]
        event: String,
    },
    #[serde(rename = "gotoURL", rename_all = "camelCase")]
    GotoUrl {
        #[serde(default)]
        event: String,
        url: String,
        #[serde(default)]
        target: UrlTarget,
        #[serde(default)]
        use_hand_cursor: bool,
    },
    #[serde(rename = "gotoSlide", rename_all = "camelCase")]
    GotoSlide {
        #[serde(default)]
        event: String,
        slide: SlideRef,
        #[serde(default)]
        use_hand_cursor: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
}

impl From<ActionDef> for Action {
    fn from(def: ActionDef) -> Self {
        match def {
            ActionDef::None { event } => Self::None { event },
            ActionDef::GotoUrl {
                event,
                url,
                target,
                use_hand_cursor,
            } => Self::GotoUrl {
                event,
                url,
                target,
                use_hand_cursor,
            },
            ActionDef::GotoSlide {
                event,
                slide,
                use_hand_cursor,
                url: Some(url),
                target,
            } => Self::VideoEndGotoSlide {
                event,
                slide,
                url,
                target,
                use_hand_cursor,
            },
            ActionDef::GotoSlide {
                event,
                slide,
                use_hand_cursor,
                url: None,
                target: _,
            } => Self::GotoSlide {
                event,
                slide,
                use_hand_cursor,
            },
        }
    }
}

impl From<Action> for ActionDef {
    fn from(action: Action) -> Self {
        match action {
            Action::None { event } => Self::None { event },
            Action::GotoUrl {
                event,
                url,
                target,
                use_hand_cursor,
            } => Self::GotoUrl {
                event,
                url,
                target,
                use_hand_cursor,
            },
            Action::GotoSlide {
                event,
                slide,
                use_hand_cursor,
            } => Self::GotoSlide {
                event,
                slide,
                use_hand_cursor,
                url: None,
                target: None,
            },
            Action::VideoEndGotoSlide {
                event,
                slide,
                url,
                target,
                use_hand_cursor,
            } => Self::GotoSlide {
                event,
                slide,
                use_hand_cursor,
                url: Some(url),
                target,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/action.rs"]
mod tests;
