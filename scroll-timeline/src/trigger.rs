use crate::types::{finite_or, unit};
use crate::{ElementBounds, ElementId, EndMarker, Marker, RangePosition, TimelineError, Viewport};

/// The smallest scroll distance a resolved range may cover.
///
/// Degenerate ranges (zero-height sections, inverted markers) are widened to this length so
/// that progress stays well defined.
pub const MIN_RANGE_PX: f32 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationMode {
    /// Progress follows the scroll offset; the section stays in flow.
    #[default]
    Scrub,
    /// Progress follows the scroll offset and the section is pinned while inside the range.
    Pin,
}

/// Defines when, relative to the scroll offset, a section's timeline is active.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerRange {
    pub section: ElementId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Marker,
    #[cfg_attr(feature = "serde", serde(default))]
    pub end: EndMarker,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: ActivationMode,
}

impl TriggerRange {
    /// A scrubbed range from "top of section hits top of viewport" through one viewport height.
    pub fn new(section: ElementId) -> Self {
        Self {
            section,
            start: Marker::TOP_TOP,
            end: EndMarker::ViewportHeights(1.0),
            mode: ActivationMode::Scrub,
        }
    }

    pub fn with_start(mut self, start: Marker) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: EndMarker) -> Self {
        self.end = end;
        self
    }

    pub fn with_mode(mut self, mode: ActivationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn pinned(self) -> Self {
        self.with_mode(ActivationMode::Pin)
    }

    pub fn is_pinned(&self) -> bool {
        self.mode == ActivationMode::Pin
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(TimelineError::NonFiniteMarker {
                section: self.section,
            });
        }
        Ok(())
    }

    /// Resolves the markers against the current layout.
    pub fn resolve(&self, bounds: ElementBounds, viewport: &Viewport) -> ResolvedRange {
        let bounds = ElementBounds {
            top: finite_or(bounds.top, 0.0),
            height: finite_or(bounds.height, 0.0).max(0.0),
        };
        let vh = finite_or(viewport.height, 0.0).max(0.0);
        let start = self.start.resolve(bounds, vh);
        let end = self.end.resolve(start, bounds, vh);
        ResolvedRange::new(start, end)
    }
}

/// A trigger range resolved to absolute scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedRange {
    pub start: f32,
    pub end: f32,
}

impl ResolvedRange {
    /// Builds a range, widening it to [`MIN_RANGE_PX`] when `end` does not lie past `start`.
    pub fn new(start: f32, end: f32) -> Self {
        let start = finite_or(start, 0.0);
        let end = finite_or(end, start);
        if end - start < MIN_RANGE_PX {
            twarn!(start, end, "degenerate trigger range; clamping to minimal length");
            return Self {
                start,
                end: start + MIN_RANGE_PX,
            };
        }
        Self { start, end }
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn progress(&self, scroll_y: f32) -> f32 {
        if !scroll_y.is_finite() {
            return if scroll_y == f32::INFINITY { 1.0 } else { 0.0 };
        }
        unit((scroll_y - self.start) / self.len())
    }

    pub fn position(&self, scroll_y: f32) -> RangePosition {
        if scroll_y.is_nan() || scroll_y < self.start {
            RangePosition::Before
        } else if scroll_y >= self.end {
            RangePosition::After
        } else {
            RangePosition::Inside
        }
    }
}
