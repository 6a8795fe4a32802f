//! A headless scroll-synchronized timeline engine.
//!
//! For section lifecycle management (listeners, animation frames, element registries), see the
//! `scroll-timeline-adapter` crate.
//!
//! This crate holds the pure parts of scroll-driven choreography: resolving a trigger range
//! against layout, turning a scroll offset into normalized progress, deciding when a section
//! is pinned, and mapping progress onto keyframed visual states across many elements.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - the viewport size and scroll offset
//! - each section's layout box
//! - somewhere to write the resulting [`VisualState`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod easing;
mod error;
mod frame;
mod marker;
mod phase;
mod pin;
mod state;
mod timeline;
mod tracker;
mod trigger;
mod types;
mod variant;


pub use config::SectionConfig;
pub use easing::Easing;
pub use error::TimelineError;
pub use frame::{RenderFrame, TargetState};
pub use marker::{EndMarker, Marker};
pub use phase::{Phase, Window};
pub use pin::{PinController, PinEvent, PinOptions, PinSpacing, PinState};
pub use state::{ClipInset, Rgba, VisualState, lerp};
pub use timeline::{Timeline, TimelineBuilder};
pub use tracker::{ProgressSample, ScrollTracker, TriggerEvent};
pub use trigger::{ActivationMode, MIN_RANGE_PX, ResolvedRange, TriggerRange};
pub use types::{ElementBounds, ElementId, RangePosition, ScrollDirection, Viewport};
pub use variant::{Variant, VariantChange, VariantId, VariantSelector, VariantSet, VariantSpec};
