//! A host-facing virtual list component for the `viewport-list` engine.
//!
//! `viewport-list` answers the windowing and scroll-state questions. This crate wraps it in a
//! component shaped like the list views of a messaging app (conversation list, chat transcript):
//!
//! - [`VirtualList`] owns the items, key extractor and callbacks (`on_scroll`, `on_end_reached`)
//!   and plans each frame as a [`RenderPlan`]: windowed rows, a sticky overlay, and the
//!   loading/empty branches.
//! - Smooth scroll-to-index via [`Tween`], delivered to the host's native container.
//! - Scroll anchoring ([`ScrollAnchor`]) so prepending older messages does not move the rows the
//!   user is reading.
//!
//! This crate is framework-agnostic: it holds no UI objects and never renders anything itself.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod list;
mod options;
mod render;
mod smooth;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, anchor_offset, capture_first_visible_anchor};
pub use list::{Tick, VirtualList};
pub use options::{
    DEFAULT_ECHO_TOLERANCE_PX, KeyExtractor, OnEndReachedCallback, OnScrollCallback, ScrollBehavior,
    VirtualListOptions,
};
pub use render::{ListFrame, RenderPlan, RenderedRow};
pub use smooth::{Easing, Tween};
