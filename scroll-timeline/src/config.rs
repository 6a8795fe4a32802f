use crate::{PinOptions, Timeline, TimelineError, TriggerRange};

/// Everything a section needs to animate: when (`trigger`), what (`timeline`) and how it pins.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionConfig {
    pub trigger: TriggerRange,
    pub timeline: Timeline,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pin: PinOptions,
}

impl SectionConfig {
    pub fn new(trigger: TriggerRange, timeline: Timeline) -> Self {
        Self {
            trigger,
            timeline,
            pin: PinOptions::default(),
        }
    }

    pub fn with_pin(mut self, pin: PinOptions) -> Self {
        self.pin = pin;
        self
    }

    /// Whether this configuration ever pins.
    pub fn pins(&self) -> bool {
        self.trigger.is_pinned()
    }

    /// Checks the trigger and pin options. Timelines are validated when they are built.
    pub fn validate(&self) -> Result<(), TimelineError> {
        self.trigger.validate()?;
        self.pin.validate()
    }
}
