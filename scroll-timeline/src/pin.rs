use crate::types::finite_or;
use crate::{RangePosition, TimelineError};

/// How much layout space the placeholder reserves while a section is pinned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinSpacing {
    /// The section's own height.
    #[default]
    Height,
    /// The section's height plus the scroll distance of the trigger range.
    HeightPlusDistance,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinOptions {
    pub spacing: PinSpacing,
    /// Disables pinning on viewports narrower than this width.
    pub disable_below: Option<f32>,
}

impl PinOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, spacing: PinSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_disable_below(mut self, width: Option<f32>) -> Self {
        self.disable_below = width;
        self
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        match self.disable_below {
            Some(width) if !width.is_finite() || width < 0.0 => {
                Err(TimelineError::InvalidPinBreakpoint { width })
            }
            _ => Ok(()),
        }
    }

    pub fn allows(&self, viewport_width: f32) -> bool {
        self.disable_below.is_none_or(|min| viewport_width >= min)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinState {
    pub is_pinned: bool,
    /// Height of the in-flow placeholder; `0` while unpinned.
    pub reserved_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinEvent {
    /// Fix the section in the viewport and insert a placeholder of `reserved_height`.
    Engage { reserved_height: f32 },
    /// Return the section to normal flow and remove the placeholder.
    Release,
}

/// Decides when a section is pinned.
///
/// The controller only emits an event when the pin state actually changes, so feeding it the
/// same position repeatedly (or oscillating within one side of a boundary) never re-applies.
#[derive(Clone, Debug)]
pub struct PinController {
    options: PinOptions,
    enabled: bool,
    state: PinState,
}

impl PinController {
    pub fn new(options: PinOptions) -> Self {
        Self {
            options,
            enabled: true,
            state: PinState::default(),
        }
    }

    pub fn options(&self) -> &PinOptions {
        &self.options
    }

    pub fn state(&self) -> PinState {
        self.state
    }

    pub fn is_pinned(&self) -> bool {
        self.state.is_pinned
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Applies the responsive policy. Disabling releases an engaged pin immediately.
    pub fn set_viewport_width(&mut self, width: f32) -> Option<PinEvent> {
        let enabled = self.options.allows(width);
        if enabled == self.enabled {
            return None;
        }
        tdebug!(width, enabled, "PinController::set_viewport_width");
        self.enabled = enabled;
        if enabled { None } else { self.release() }
    }

    /// Feeds the current range position.
    ///
    /// `section_height` and `range_len` size the placeholder when the pin engages.
    pub fn update(
        &mut self,
        position: RangePosition,
        section_height: f32,
        range_len: f32,
    ) -> Option<PinEvent> {
        let should_pin = self.enabled && position == RangePosition::Inside;
        if should_pin == self.state.is_pinned {
            return None;
        }
        if !should_pin {
            return self.release();
        }

        let height = finite_or(section_height, 0.0).max(0.0);
        let reserved_height = match self.options.spacing {
            PinSpacing::Height => height,
            PinSpacing::HeightPlusDistance => height + finite_or(range_len, 0.0).max(0.0),
        };
        self.state = PinState {
            is_pinned: true,
            reserved_height,
        };
        ttrace!(reserved_height, "PinController: engage");
        Some(PinEvent::Engage { reserved_height })
    }

    pub fn release(&mut self) -> Option<PinEvent> {
        if !self.state.is_pinned {
            return None;
        }
        self.state = PinState::default();
        ttrace!("PinController: release");
        Some(PinEvent::Release)
    }
}
