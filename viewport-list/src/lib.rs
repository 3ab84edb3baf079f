//! A headless, fixed-height list virtualization engine.
//!
//! For the host-facing list component (callbacks, smooth scrolling, render planning), see the
//! `viewport-list-adapter` crate.
//!
//! The crate renders nothing. It answers the questions a list view asks while the user scrolls
//! through a large, ordered collection:
//! - which contiguous slice of rows to materialize ([`compute_visible_range`]),
//! - whether the list is scrolling, in which direction, and whether the end of the data has been
//!   reached ([`ScrollStateMachine`]),
//! - which pinned rows go into the overlay ([`compose_sticky`]),
//! - which offset brings a given row into view ([`scroll_offset_for_index`]).
//!
//! All rows share one height. The host owns the item collection (any [`ItemSource`]) and feeds
//! native scroll events plus a monotonic millisecond clock.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod align;
mod error;
mod options;
mod scroll;
mod source;
mod state;
mod sticky;
mod timer;
mod types;
pub mod window;


pub use align::scroll_offset_for_index;
pub use error::ConfigError;
pub use options::{
    DEFAULT_END_REACHED_THRESHOLD, DEFAULT_IDLE_DELAY_MS, DEFAULT_OVERSCAN, Geometry, ListOptions,
};
pub use scroll::ScrollStateMachine;
pub use source::ItemSource;
pub use state::ViewportState;
pub use sticky::{StickyItem, StickySet, compose_sticky};
pub use timer::IdleTimer;
pub use types::{
    Align, Generation, ScrollDirection, ScrollEvent, ScrollOutcome, ScrollPhase, VisibleRange,
};
pub use window::compute_visible_range;
