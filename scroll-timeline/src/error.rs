use crate::ElementId;

/// Configuration errors reported when building timelines, sections and variant sets.
///
/// Runtime faults (detached targets, degenerate geometry) are never errors: they are
/// recovered where they happen.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("phase {index} has an invalid range [{start}, {end}] (expected 0 <= start <= end <= 1)")]
    InvalidPhaseRange { index: usize, start: f32, end: f32 },
    #[error("phase {index} has no targets")]
    EmptyPhase { index: usize },
    #[error("phase {index} has an invalid stagger ({stagger})")]
    InvalidStagger { index: usize, stagger: f32 },
    #[error("phase {index} has a non-finite visual state or easing")]
    NonFiniteState { index: usize },
    #[error("trigger markers for section {section} are not finite")]
    NonFiniteMarker { section: ElementId },
    #[error("pin breakpoint {width} is not a valid viewport width")]
    InvalidPinBreakpoint { width: f32 },
    #[error("variant set is empty")]
    EmptyVariantSet,
    #[error("variant breakpoint {min_width} is not a valid viewport width")]
    InvalidBreakpoint { min_width: f32 },
    #[error("variant breakpoint {min_width} is declared more than once")]
    DuplicateBreakpoint { min_width: f32 },
}
