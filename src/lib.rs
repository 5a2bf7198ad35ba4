//! bannerkit turns banner documents (slides of layered elements) into render descriptors.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: JSON → [`Design`] (closed sum types; unknown layer kinds are kept as
//!    skippable placeholders, everything else fails fast).
//! 2. **Resolve**: [`Walker::resolve`] validates the design and maps every element, in paint
//!    order, to an [`ElementDescriptor`] with absolute geometry, paint, effects, animation
//!    intent and actions.
//! 3. **Adapt** (optional): a [`RenderAdapter`] such as [`HtmlAdapter`] materializes the
//!    descriptor sequence.
//!
//! Resolution is pure: no I/O, no process-global state. Retrieval lives behind
//! [`DocumentSource`]; asset urls are resolved against an explicit [`ResolveConfig`].
#![forbid(unsafe_code)]

pub mod adapter;
pub mod classify;
pub mod config;
pub mod foundation;
pub mod resolve;
pub mod schema;
pub mod source;
pub mod text;
pub mod walk;

pub use adapter::{HtmlAdapter, RenderAdapter};
pub use classify::{LayerKind, NodeClass, classify_node, has_animation, is_animated, is_media};
pub use config::ResolveConfig;
pub use foundation::error::{BannerError, BannerResult, ErrorKind};
pub use resolve::{ElementDescriptor, PaintDescriptor, resolve_element, resolve_fill};
pub use schema::{Design, Element, Layer, Node, Slide};
pub use source::{DocumentSource, FsSource};
pub use walk::{RenderSequence, ResolveWarning, Walker, resolve_many};
