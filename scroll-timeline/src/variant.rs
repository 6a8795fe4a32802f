use alloc::string::String;
use alloc::vec::Vec;

use crate::{ElementId, SectionConfig, TimelineError};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariantSpec {
    Animated(SectionConfig),
    /// Non-animated, fully visible content.
    Static,
}

/// An alternate timeline/pinning configuration that applies from `min_width` upward.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub name: String,
    pub min_width: f32,
    pub spec: VariantSpec,
}

impl Variant {
    pub fn animated(name: impl Into<String>, min_width: f32, config: SectionConfig) -> Self {
        Self {
            name: name.into(),
            min_width,
            spec: VariantSpec::Animated(config),
        }
    }

    pub fn static_content(name: impl Into<String>, min_width: f32) -> Self {
        Self {
            name: name.into(),
            min_width,
            spec: VariantSpec::Static,
        }
    }

    pub fn config(&self) -> Option<&SectionConfig> {
        match &self.spec {
            VariantSpec::Animated(config) => Some(config),
            VariantSpec::Static => None,
        }
    }
}

/// Index of a variant within its [`VariantSet`] (narrowest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantId(pub usize);

/// A validated set of variants, ordered by breakpoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Variant>", into = "Vec<Variant>"))]
pub struct VariantSet {
    variants: Vec<Variant>,
}

impl VariantSet {
    pub fn new(mut variants: Vec<Variant>) -> Result<Self, TimelineError> {
        if variants.is_empty() {
            return Err(TimelineError::EmptyVariantSet);
        }
        for v in &variants {
            if !v.min_width.is_finite() || v.min_width < 0.0 {
                return Err(TimelineError::InvalidBreakpoint {
                    min_width: v.min_width,
                });
            }
            if let Some(config) = v.config() {
                config.validate()?;
            }
        }
        variants.sort_by(|a, b| a.min_width.total_cmp(&b.min_width));
        if let Some(pair) = variants.windows(2).find(|w| w[0].min_width == w[1].min_width) {
            return Err(TimelineError::DuplicateBreakpoint {
                min_width: pair[0].min_width,
            });
        }
        Ok(Self { variants })
    }

    /// A set with one variant that applies at every width.
    pub fn single(config: SectionConfig) -> Result<Self, TimelineError> {
        Self::new(alloc::vec![Variant::animated("default", 0.0, config)])
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, id: VariantId) -> Option<&Variant> {
        self.variants.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    /// Selects the widest variant whose breakpoint fits `width`.
    ///
    /// Widths below every breakpoint (and NaN) select the narrowest variant.
    pub fn select(&self, width: f32) -> VariantId {
        let index = self
            .variants
            .iter()
            .rposition(|v| width >= v.min_width)
            .unwrap_or(0);
        VariantId(index)
    }

    /// Every element animated by any variant, in order of first reference.
    pub fn targets(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        for config in self.variants.iter().filter_map(Variant::config) {
            for &target in config.timeline.targets() {
                if !out.contains(&target) {
                    out.push(target);
                }
            }
        }
        out
    }
}

impl TryFrom<Vec<Variant>> for VariantSet {
    type Error = TimelineError;

    fn try_from(variants: Vec<Variant>) -> Result<Self, Self::Error> {
        Self::new(variants)
    }
}

impl From<VariantSet> for Vec<Variant> {
    fn from(set: VariantSet) -> Self {
        set.variants
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantChange {
    pub previous: Option<VariantId>,
    pub current: VariantId,
}

/// Tracks the active variant across resizes.
#[derive(Clone, Debug)]
pub struct VariantSelector {
    set: VariantSet,
    current: Option<VariantId>,
}

impl VariantSelector {
    pub fn new(set: VariantSet) -> Self {
        Self { set, current: None }
    }

    pub fn set(&self) -> &VariantSet {
        &self.set
    }

    pub fn current(&self) -> Option<VariantId> {
        self.current
    }

    pub fn current_variant(&self) -> Option<&Variant> {
        self.current.and_then(|id| self.set.get(id))
    }

    /// Re-evaluates the selection for `width`.
    ///
    /// Returns `Some` only when the selected variant changes (including the first call).
    pub fn update(&mut self, width: f32) -> Option<VariantChange> {
        let next = self.set.select(width);
        if self.current == Some(next) {
            return None;
        }
        let change = VariantChange {
            previous: self.current,
            current: next,
        };
        tdebug!(
            width,
            previous = ?change.previous,
            current = next.0,
            "VariantSelector::update"
        );
        self.current = Some(next);
        Some(change)
    }

    /// Forgets the current selection so the next `update` reports a change.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
