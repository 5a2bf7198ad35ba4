//! Adapters turn a [`RenderSequence`] into a concrete output.
//!
//! Adapters must keep paint order and must not reinterpret descriptor semantics.

pub mod html;

pub use html::HtmlAdapter;

use crate::{foundation::error::BannerResult, walk::RenderSequence};

pub trait RenderAdapter: Send + Sync {
    type Output;

    fn render(&self, sequence: &RenderSequence) -> BannerResult<Self::Output>;
}
