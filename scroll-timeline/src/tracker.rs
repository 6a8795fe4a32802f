use core::cmp;

use crate::{ElementBounds, RangePosition, ResolvedRange, ScrollDirection, TriggerRange, Viewport};

/// A toggle-style notification derived from range position changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEvent {
    /// Entered the range scrolling forward.
    Enter,
    /// Left the range past its end.
    Leave,
    /// Re-entered the range scrolling backward.
    EnterBack,
    /// Left the range back past its start.
    LeaveBack,
}

impl TriggerEvent {
    /// Returns the events implied by moving from `prev` to `next`, in the order they happened.
    pub fn between(prev: RangePosition, next: RangePosition) -> &'static [TriggerEvent] {
        use RangePosition::*;
        match (prev, next) {
            (Before, Inside) => &[TriggerEvent::Enter],
            (Before, After) => &[TriggerEvent::Enter, TriggerEvent::Leave],
            (Inside, After) => &[TriggerEvent::Leave],
            (After, Inside) => &[TriggerEvent::EnterBack],
            (After, Before) => &[TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            (Inside, Before) => &[TriggerEvent::LeaveBack],
            _ => &[],
        }
    }
}

/// One progress reading for a trigger range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressSample {
    /// Normalized progress in `[0, 1]`.
    pub progress: f32,
    pub position: RangePosition,
    /// Position reported by the previous sample (`Before` for the first one).
    pub previous_position: RangePosition,
    pub direction: Option<ScrollDirection>,
    /// Scroll velocity in px/ms (negative when scrolling backward).
    pub velocity: f32,
}

impl ProgressSample {
    pub fn events(&self) -> &'static [TriggerEvent] {
        TriggerEvent::between(self.previous_position, self.position)
    }

    pub fn is_active(&self) -> bool {
        self.position == RangePosition::Inside
    }
}

/// Observes the scroll offset relative to a section and produces normalized progress.
///
/// The tracker holds no UI objects. An adapter feeds it:
/// - `on_layout` whenever the section's geometry or the viewport changes
/// - `sample` once per animation frame with the current scroll offset
///
/// A detached tracker never produces samples, and calling `sample` on it is always safe.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    trigger: TriggerRange,
    range: Option<ResolvedRange>,
    bounds: Option<ElementBounds>,
    last_scroll_y: Option<f32>,
    last_ms: Option<u64>,
    last_position: Option<RangePosition>,
    direction: Option<ScrollDirection>,
    velocity: f32,
}

impl ScrollTracker {
    pub fn new(trigger: TriggerRange) -> Self {
        Self {
            trigger,
            range: None,
            bounds: None,
            last_scroll_y: None,
            last_ms: None,
            last_position: None,
            direction: None,
            velocity: 0.0,
        }
    }

    pub fn trigger(&self) -> &TriggerRange {
        &self.trigger
    }

    pub fn range(&self) -> Option<ResolvedRange> {
        self.range
    }

    pub fn bounds(&self) -> Option<ElementBounds> {
        self.bounds
    }

    pub fn is_attached(&self) -> bool {
        self.range.is_some()
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    /// Re-resolves the trigger range against new geometry.
    ///
    /// Returns the resolved range.
    pub fn on_layout(&mut self, bounds: ElementBounds, viewport: &Viewport) -> ResolvedRange {
        let range = self.trigger.resolve(bounds, viewport);
        ttrace!(
            section = self.trigger.section.get(),
            start = range.start,
            end = range.end,
            "ScrollTracker::on_layout"
        );
        self.range = Some(range);
        self.bounds = Some(bounds);
        range
    }

    /// Stops producing samples until the next `on_layout`.
    pub fn detach(&mut self) {
        self.range = None;
        self.bounds = None;
        self.last_scroll_y = None;
        self.last_ms = None;
        self.last_position = None;
        self.direction = None;
        self.velocity = 0.0;
    }

    /// Computes progress for the given scroll offset.
    ///
    /// Returns `None` when the tracker is detached or has not been laid out yet.
    pub fn sample(&mut self, scroll_y: f32, now_ms: u64) -> Option<ProgressSample> {
        let range = self.range?;

        if let (Some(prev), true) = (self.last_scroll_y, scroll_y.is_finite()) {
            self.direction = match scroll_y.partial_cmp(&prev) {
                Some(cmp::Ordering::Greater) => Some(ScrollDirection::Forward),
                Some(cmp::Ordering::Less) => Some(ScrollDirection::Backward),
                _ => self.direction,
            };
            let dt = match self.last_ms {
                Some(last) => now_ms.saturating_sub(last).max(1),
                None => 1,
            };
            self.velocity = (scroll_y - prev) / dt as f32;
        }
        if scroll_y.is_finite() {
            self.last_scroll_y = Some(scroll_y);
            self.last_ms = Some(now_ms);
        }

        let position = range.position(scroll_y);
        let previous_position = self.last_position.unwrap_or(RangePosition::Before);
        self.last_position = Some(position);

        Some(ProgressSample {
            progress: range.progress(scroll_y),
            position,
            previous_position,
            direction: self.direction,
            velocity: self.velocity,
        })
    }
}
