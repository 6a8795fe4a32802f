//! Section lifecycle management for the `scroll-timeline` crate.
//!
//! The `scroll-timeline` crate is UI-agnostic and focuses on progress math and keyframe
//! composition. This crate wires it to a render tree through the [`Host`] trait:
//!
//! - [`SectionLifecycle`] owns a mounted section's listeners, frame request and pin, and
//!   releases all of them on teardown
//! - [`ElementRegistry`] maps stable [`ElementId`](scroll_timeline::ElementId)s to live handles
//! - [`FrameSlot`] coalesces scroll/resize bursts into one frame
//! - [`Page`] mounts sections and tears them down on navigation
//!
//! This crate is intentionally framework-agnostic (no DOM or webview bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod page;
mod registry;
mod scheduler;
mod section;

#[cfg(test)]
mod tests;

pub use host::{FrameHandle, Host, ListenerId, ListenerKind};
pub use page::Page;
pub use registry::{ElementRegistry, SharedRegistry};
pub use scheduler::FrameSlot;
pub use section::{FrameReport, SectionLifecycle, SectionState};
