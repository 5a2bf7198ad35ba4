//! Wire model of banner documents.
//!
//! Types here mirror the JSON documents one to one (camelCase names, documented defaults).
//! They carry no rendering behaviour; see [`crate::resolve`] for that.

pub mod action;
pub mod design;
pub mod element;
pub mod feed;
pub mod fill;
pub mod text;
pub mod transition;

pub use action::{Action, RelativeSlide, SlideRef, UrlTarget};
pub use design::{Design, DesignProperties, Layer, MeasureUnit, Node, Slide, SlideProperties};
pub use element::{BaseProperties, Element, Flip};
pub use fill::{Background, Fill};
pub use text::TextDocument;
pub use transition::{Transition, TransitionMid, TransitionType};
