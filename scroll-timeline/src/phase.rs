use alloc::vec::Vec;

use crate::types::{finite_or, unit};
use crate::{Easing, ElementId, TimelineError, VisualState};

/// A sub-range of global progress for a single element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start: f32,
    pub end: f32,
}

impl Window {
    /// Maps global progress into this window's local `[0, 1]`.
    ///
    /// Before the window this is exactly `0`, after it exactly `1`. A zero-width window is a
    /// step at `start`.
    pub fn local(&self, progress: f32) -> f32 {
        if progress < self.start {
            0.0
        } else if progress >= self.end {
            1.0
        } else {
            unit((progress - self.start) / (self.end - self.start))
        }
    }

    pub fn has_started(&self, progress: f32) -> bool {
        progress >= self.start
    }
}

/// One keyframed interpolation of one or more elements over a sub-range of progress.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase {
    pub targets: Vec<ElementId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub from: VisualState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub to: VisualState,
    pub start: f32,
    pub end: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub easing: Easing,
    /// Per-index start offset, as a fraction of global progress.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stagger: f32,
}

impl Phase {
    pub fn new(targets: impl IntoIterator<Item = ElementId>, start: f32, end: f32) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            from: VisualState::EMPTY,
            to: VisualState::EMPTY,
            start,
            end,
            easing: Easing::Linear,
            stagger: 0.0,
        }
    }

    pub fn single(target: ElementId, start: f32, end: f32) -> Self {
        Self::new([target], start, end)
    }

    pub fn with_from(mut self, from: VisualState) -> Self {
        self.from = from;
        self
    }

    pub fn with_to(mut self, to: VisualState) -> Self {
        self.to = to;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn validate(&self, index: usize) -> Result<(), TimelineError> {
        let ordered = self.start.is_finite()
            && self.end.is_finite()
            && 0.0 <= self.start
            && self.start <= self.end
            && self.end <= 1.0;
        if !ordered {
            return Err(TimelineError::InvalidPhaseRange {
                index,
                start: self.start,
                end: self.end,
            });
        }
        if self.targets.is_empty() {
            return Err(TimelineError::EmptyPhase { index });
        }
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(TimelineError::InvalidStagger {
                index,
                stagger: self.stagger,
            });
        }
        if !self.from.is_finite() || !self.to.is_finite() || !self.easing.is_finite() {
            return Err(TimelineError::NonFiniteState { index });
        }
        Ok(())
    }

    /// Returns the progress window for the element at `index` within `targets`.
    ///
    /// Staggered elements start `index * stagger` later. The stagger is capped so the last
    /// element still finishes at `end`; each element's window shrinks by the total offset.
    pub fn window(&self, index: usize) -> Window {
        let n = self.targets.len();
        let stagger = finite_or(self.stagger, 0.0).max(0.0);
        if n <= 1 || stagger == 0.0 {
            return Window {
                start: self.start,
                end: self.end,
            };
        }
        let span = self.end - self.start;
        let gaps = (n - 1) as f32;
        let step = stagger.min(span / gaps);
        let duration = (span - step * gaps).max(0.0);
        let index = index.min(n - 1);
        let start = self.start + step * index as f32;
        let end = if index == n - 1 {
            self.end
        } else {
            (start + duration).min(self.end)
        };
        Window {
            start: start.min(end),
            end,
        }
    }

    /// Local progress for the element at `index`, after easing.
    pub fn eased_progress(&self, index: usize, progress: f32) -> f32 {
        self.easing.sample(self.window(index).local(progress))
    }

    /// Interpolated state for the element at `index`.
    pub fn state_at(&self, index: usize, progress: f32) -> VisualState {
        let window = self.window(index);
        let local = window.local(progress);
        // Exact endpoints, whatever the easing curve does in between.
        if local <= 0.0 {
            return VisualState::interpolate(&self.from, &self.to, 0.0);
        }
        if local >= 1.0 {
            return VisualState::interpolate(&self.from, &self.to, 1.0);
        }
        VisualState::interpolate(&self.from, &self.to, self.easing.sample(local))
    }
}
