use crate::ElementBounds;

/// A viewport-relative scroll position.
///
/// The marker resolves to the scroll offset at which the line `element` (a fraction of the
/// element's height, `0.0` = top edge) meets the line `viewport` (a fraction of the viewport
/// height), shifted by `offset_px`.
///
/// For example, [`Marker::TOP_BOTTOM`] is "top of element hits bottom of viewport".
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub element: f32,
    pub viewport: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset_px: f32,
}

impl Marker {
    pub const TOP_TOP: Self = Self::new(0.0, 0.0);
    pub const TOP_CENTER: Self = Self::new(0.0, 0.5);
    pub const TOP_BOTTOM: Self = Self::new(0.0, 1.0);
    pub const CENTER_CENTER: Self = Self::new(0.5, 0.5);
    pub const BOTTOM_TOP: Self = Self::new(1.0, 0.0);
    pub const BOTTOM_BOTTOM: Self = Self::new(1.0, 1.0);

    pub const fn new(element: f32, viewport: f32) -> Self {
        Self {
            element,
            viewport,
            offset_px: 0.0,
        }
    }

    pub const fn with_offset(mut self, offset_px: f32) -> Self {
        self.offset_px = offset_px;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.element.is_finite() && self.viewport.is_finite() && self.offset_px.is_finite()
    }

    pub fn resolve(&self, bounds: ElementBounds, viewport_height: f32) -> f32 {
        let line = bounds.top + self.element * bounds.height;
        line - self.viewport * viewport_height + self.offset_px
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::TOP_TOP
    }
}

/// The end of a trigger range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndMarker {
    /// An absolute viewport-relative position, like the start marker.
    At(Marker),
    /// A distance past the start, in viewport heights (`1.5` = "150% of the viewport further").
    ViewportHeights(f32),
    /// A distance past the start, in pixels.
    Pixels(f32),
}

impl EndMarker {
    pub fn is_finite(&self) -> bool {
        match self {
            Self::At(m) => m.is_finite(),
            Self::ViewportHeights(v) | Self::Pixels(v) => v.is_finite(),
        }
    }

    pub fn resolve(&self, start: f32, bounds: ElementBounds, viewport_height: f32) -> f32 {
        match self {
            Self::At(m) => m.resolve(bounds, viewport_height),
            Self::ViewportHeights(n) => start + n * viewport_height,
            Self::Pixels(px) => start + px,
        }
    }
}

impl Default for EndMarker {
    fn default() -> Self {
        Self::ViewportHeights(1.0)
    }
}
