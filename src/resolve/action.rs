use serde::Serialize;

use crate::schema::action::{Action, SlideRef, UrlTarget};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ResolvedAction {
    None,
    OpenUrl {
        url: String,
        target: UrlTarget,
        hand_cursor: bool,
    },
    GotoSlide {
        slide: SlideRef,
        hand_cursor: bool,
    },
    /// Fires when the element's video finishes.
    GotoSlideOnVideoEnd {
        slide: SlideRef,
        url: String,
        target: Option<String>,
        hand_cursor: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionDescriptor {
    pub event: String,
    pub action: ResolvedAction,
}

/// Resolve actions in document order. Urls pass through verbatim.
pub fn resolve_actions(actions: &[Action]) -> Vec<ActionDescriptor> {
    actions
        .iter()
        .map(|action| ActionDescriptor {
            event: action.event().to_string(),
            action: match action {
                Action::None { .. } => ResolvedAction::None,
                Action::GotoUrl {
                    url,
                    target,
                    use_hand_cursor,
                    ..
                } => ResolvedAction::OpenUrl {
                    url: url.clone(),
                    target: *target,
                    hand_cursor: *use_hand_cursor,
                },
                Action::GotoSlide {
                    slide,
                    use_hand_cursor,
                    ..
                } => ResolvedAction::GotoSlide {
                    slide: *slide,
                    hand_cursor: *use_hand_cursor,
                },
                Action::VideoEndGotoSlide {
                    slide,
                    url,
                    target,
                    use_hand_cursor,
                    ..
                } => ResolvedAction::GotoSlideOnVideoEnd {
                    slide: *slide,
                    url: url.clone(),
                    target: target.clone(),
                    hand_cursor: *use_hand_cursor,
                },
            },
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/action.rs"]
mod tests;
