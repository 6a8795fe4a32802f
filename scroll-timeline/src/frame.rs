use alloc::vec::Vec;

use crate::{ElementId, VisualState};

/// The resolved state for one animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetState {
    pub target: ElementId,
    pub state: VisualState,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Contribution {
    pub(crate) started: bool,
    pub(crate) start: f32,
    pub(crate) order: usize,
    pub(crate) state: VisualState,
}

/// Render instructions produced by [`crate::Timeline::sample`].
///
/// Targets appear in the order they are first referenced by the timeline's phases.
/// A frame can be reused across samples with [`crate::Timeline::sample_into`] to avoid
/// allocating on every animation frame.
#[derive(Clone, Debug, Default)]
pub struct RenderFrame {
    pub(crate) progress: f32,
    pub(crate) targets: Vec<TargetState>,
    pub(crate) scratch: Vec<Contribution>,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frame that shows every target fully visible and untransformed.
    pub fn static_fallback(targets: impl IntoIterator<Item = ElementId>) -> Self {
        let mut frame = Self::new();
        frame.fill_static(targets);
        frame
    }

    /// Replaces the contents with the static, fully visible rendering of `targets`.
    pub fn fill_static(&mut self, targets: impl IntoIterator<Item = ElementId>) {
        self.clear();
        self.progress = 1.0;
        for target in targets {
            if self.get(target).is_none() {
                self.targets.push(TargetState {
                    target,
                    state: VisualState::visible(),
                });
            }
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn targets(&self) -> &[TargetState] {
        &self.targets
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetState> {
        self.targets.iter()
    }

    pub fn get(&self, target: ElementId) -> Option<&VisualState> {
        self.targets
            .iter()
            .find(|t| t.target == target)
            .map(|t| &t.state)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn clear(&mut self) {
        self.progress = 0.0;
        self.targets.clear();
        self.scratch.clear();
    }
}

impl PartialEq for RenderFrame {
    fn eq(&self, other: &Self) -> bool {
        self.progress == other.progress && self.targets == other.targets
    }
}
