//! Resolution of schema values into render descriptors.
//!
//! Resolvers are pure functions of their input and a [`crate::config::ResolveConfig`].

pub mod action;
pub mod animation;
pub mod descriptor;
pub mod element;
pub mod fill;

pub use action::{ActionDescriptor, ResolvedAction, resolve_actions};
pub use animation::{AnimationDescriptor, TransitionDescriptor, resolve_animation};
pub use descriptor::{Content, ElementDescriptor, FeedDescriptor, Geometry};
pub use element::{ResolveContext, resolve_element};
pub use fill::{Paint, PaintDescriptor, Stroke, resolve_fill};
