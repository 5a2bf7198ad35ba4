//! Document traversal: design → slides → elements, flattened into paint order.

pub mod walker;

pub use walker::{
    DesignDescriptor, RenderItem, RenderSequence, ResolveWarning, SlideContext, Walker,
    resolve_many,
};
