use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::frame::Contribution;
use crate::types::unit;
use crate::{ElementId, Phase, RenderFrame, TargetState, TimelineError, VisualState};

/// An ordered collection of phases sharing one trigger range.
///
/// Sampling is a pure function of `(progress, phases)`: phases never depend on each other's
/// completion, so the same progress always renders the same state regardless of scroll
/// history.
///
/// When several phases animate the same property of the same element, the most recently
/// started phase wins (ties go to the later phase). Before any of them has started, the
/// earliest one's `from` state is shown.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Phase>", into = "Vec<Phase>"))]
pub struct Timeline {
    phases: Vec<Phase>,
    targets: Vec<ElementId>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    pub fn from_phases(phases: Vec<Phase>) -> Result<Self, TimelineError> {
        for (index, phase) in phases.iter().enumerate() {
            phase.validate(index)?;
        }
        let mut targets = Vec::new();
        for phase in &phases {
            for &target in &phase.targets {
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
        }
        tdebug!(
            phases = phases.len(),
            targets = targets.len(),
            "Timeline::from_phases"
        );
        Ok(Self { phases, targets })
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Every animated element, in order of first reference.
    pub fn targets(&self) -> &[ElementId] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn sample(&self, progress: f32) -> RenderFrame {
        let mut frame = RenderFrame::new();
        self.sample_into(progress, &mut frame);
        frame
    }

    /// Same as `sample`, but writes into an existing frame.
    pub fn sample_into(&self, progress: f32, out: &mut RenderFrame) {
        let p = unit(progress);
        out.clear();
        out.progress = p;

        let mut scratch = core::mem::take(&mut out.scratch);
        for &target in &self.targets {
            scratch.clear();
            for (order, phase) in self.phases.iter().enumerate() {
                for (index, _) in phase
                    .targets
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| **t == target)
                {
                    let window = phase.window(index);
                    scratch.push(Contribution {
                        started: window.has_started(p),
                        start: window.start,
                        order,
                        state: phase.state_at(index, p),
                    });
                }
            }

            scratch.sort_by(apply_order);
            let mut state = VisualState::EMPTY;
            for c in scratch.iter() {
                state.merge(&c.state);
            }
            out.targets.push(TargetState { target, state });
        }
        scratch.clear();
        out.scratch = scratch;
    }
}

// Later entries overwrite earlier ones when merged: unstarted phases go first (the earliest
// start last), then started phases (the latest start last).
fn apply_order(a: &Contribution, b: &Contribution) -> Ordering {
    match (a.started, b.started) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.start.total_cmp(&b.start).then(a.order.cmp(&b.order)),
        (false, false) => b.start.total_cmp(&a.start).then(b.order.cmp(&a.order)),
    }
}

impl TryFrom<Vec<Phase>> for Timeline {
    type Error = TimelineError;

    fn try_from(phases: Vec<Phase>) -> Result<Self, Self::Error> {
        Self::from_phases(phases)
    }
}

impl From<Timeline> for Vec<Phase> {
    fn from(timeline: Timeline) -> Self {
        timeline.phases
    }
}

/// Collects phases and validates them on `build`.
#[derive(Clone, Debug, Default)]
pub struct TimelineBuilder {
    phases: Vec<Phase>,
}

impl TimelineBuilder {
    pub fn phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    pub fn phases(mut self, phases: impl IntoIterator<Item = Phase>) -> Self {
        self.phases.extend(phases);
        self
    }

    pub fn build(self) -> Result<Timeline, TimelineError> {
        Timeline::from_phases(self.phases)
    }
}
