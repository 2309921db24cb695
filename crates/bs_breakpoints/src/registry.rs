use crate::RegistryError;
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::fmt;

/// Bootstrap grid tiers and their minimum widths in pixels.
pub const BOOTSTRAP_TIERS: [(&str, u32); 6] = [
    ("xs", 0),
    ("sm", 576),
    ("md", 768),
    ("lg", 992),
    ("xl", 1200),
    ("xxl", 1400),
];

#[expect(
    clippy::non_std_lazy_statics,
    reason = "Workspace standardises on once_cell for lazy statics"
)]
static BOOTSTRAP: Lazy<BreakpointRegistry> = Lazy::new(|| BreakpointRegistry {
    tiers: BOOTSTRAP_TIERS
        .iter()
        .enumerate()
        .map(|(index, (name, min_width))| Tier {
            name: (*name).to_owned(),
            index,
            min_width: *min_width,
        })
        .collect(),
});

/// The process-wide Bootstrap registry.
pub fn bootstrap() -> &'static BreakpointRegistry {
    &BOOTSTRAP
}

/// How a query compares the viewport against a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Viewport at least as wide as the tier's minimum.
    Min,
    /// Viewport no wider than the tier's maximum.
    Max,
    /// Viewport inside the tier's own range.
    Same,
}

/// A tier given either by name or by ordinal index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BreakpointId {
    /// Tier name, such as `md`.
    ByName(String),
    /// Zero-based position, narrowest tier first.
    ByIndex(usize),
}

impl From<&str> for BreakpointId {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_owned())
    }
}

impl From<String> for BreakpointId {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl From<usize> for BreakpointId {
    fn from(index: usize) -> Self {
        Self::ByIndex(index)
    }
}

impl From<&Tier> for BreakpointId {
    fn from(tier: &Tier) -> Self {
        Self::ByIndex(tier.index)
    }
}

impl fmt::Display for BreakpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => write!(f, "{name}"),
            Self::ByIndex(index) => write!(f, "#{index}"),
        }
    }
}

/// One named tier of the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tier {
    name: String,
    index: usize,
    min_width: u32,
}

impl Tier {
    /// Name the tier is looked up by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the registry, zero for the narrowest tier.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Minimum viewport width in pixels.
    pub const fn min_width(&self) -> u32 {
        self.min_width
    }
}

/// Ordered set of responsive tiers, narrowest first.
///
/// Invariants (checked by [`BreakpointRegistry::new`]): at least one tier, unique
/// names, contiguous indices starting at zero, strictly increasing minimum widths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointRegistry {
    tiers: Vec<Tier>,
}

impl BreakpointRegistry {
    /// Build a registry from `(name, min_width)` pairs, narrowest first.
    ///
    /// # Errors
    /// Returns `RegistryError::Empty`, `DuplicateTier` or `NotIncreasing` when the
    /// pairs do not describe a valid tier sequence.
    pub fn new<I, S>(tiers: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut built: Vec<Tier> = Vec::new();
        for (index, (name, min_width)) in tiers.into_iter().enumerate() {
            let name = name.into();
            if built.iter().any(|tier| tier.name == name) {
                return Err(RegistryError::DuplicateTier(name));
            }
            if let Some(previous) = built.last()
                && previous.min_width >= min_width
            {
                return Err(RegistryError::NotIncreasing {
                    name,
                    min_width,
                    previous: previous.min_width,
                });
            }
            built.push(Tier {
                name,
                index,
                min_width,
            });
        }
        if built.is_empty() {
            return Err(RegistryError::Empty);
        }
        debug!(target: "bs_breakpoints", "Built breakpoint registry with {} tiers", built.len());
        Ok(Self { tiers: built })
    }

    /// All tiers, narrowest first.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Tier names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(Tier::name)
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Whether `tier` is the widest tier.
    pub fn is_last(&self, tier: &Tier) -> bool {
        tier.index + 1 == self.tiers.len()
    }

    /// The tier directly above `tier`, if any.
    pub fn next(&self, tier: &Tier) -> Option<&Tier> {
        self.tiers.get(tier.index + 1)
    }

    /// Index of the named tier.
    ///
    /// # Errors
    /// Returns `RegistryError::UnknownTier` when no tier has this name.
    pub fn name_to_index(&self, name: &str) -> Result<usize, RegistryError> {
        self.by_name(name).map(Tier::index)
    }

    /// Name of the tier at `index`.
    ///
    /// # Errors
    /// Returns `RegistryError::IndexOutOfRange` when `index` is past the widest tier.
    pub fn index_to_name(&self, index: usize) -> Result<&str, RegistryError> {
        self.by_index(index).map(Tier::name)
    }

    /// Minimum width in pixels of the named tier.
    ///
    /// # Errors
    /// Returns `RegistryError::UnknownTier` when no tier has this name.
    pub fn min_width(&self, name: &str) -> Result<u32, RegistryError> {
        self.by_name(name).map(Tier::min_width)
    }

    /// Maximum width in pixels of the tier, `None` for the widest tier.
    ///
    /// # Errors
    /// Propagates the lookup failure for an unknown identifier.
    pub fn max_width(&self, id: &BreakpointId) -> Result<Option<u32>, RegistryError> {
        let tier = self.tier(id)?;
        Ok(self.upper_bound(tier))
    }

    /// Look up a tier by name or index.
    ///
    /// # Errors
    /// Returns `UnknownTier` or `IndexOutOfRange` for identifiers the registry does not hold.
    pub fn tier(&self, id: &BreakpointId) -> Result<&Tier, RegistryError> {
        match id {
            BreakpointId::ByName(name) => self.by_name(name),
            BreakpointId::ByIndex(index) => self.by_index(*index),
        }
    }

    /// Pixel range `(min, max)` matched by a query of the given intent.
    ///
    /// - `Min`: from the tier's minimum, unbounded above.
    /// - `Max`: from zero up to the tier's maximum.
    /// - `Same`: the tier's own range.
    ///
    /// A `None` maximum means unbounded above. Maxima are inclusive: a tier ends one
    /// pixel below where the next one starts.
    ///
    /// # Errors
    /// Propagates the lookup failure for an unknown identifier.
    pub fn comparison_range(
        &self,
        id: &BreakpointId,
        intent: Intent,
    ) -> Result<(u32, Option<u32>), RegistryError> {
        let tier = self.tier(id)?;
        let max = self.upper_bound(tier);
        let range = match intent {
            Intent::Min => (tier.min_width, None),
            Intent::Max => (0, max),
            Intent::Same => (tier.min_width, max),
        };
        trace!(target: "bs_breakpoints", "{intent:?} range for {}: {range:?}", tier.name);
        Ok(range)
    }

    // Strictly increasing widths keep the next minimum above zero.
    fn upper_bound(&self, tier: &Tier) -> Option<u32> {
        self.next(tier).map(|next| next.min_width - 1)
    }

    fn by_name(&self, name: &str) -> Result<&Tier, RegistryError> {
        self.tiers
            .iter()
            .find(|tier| tier.name == name)
            .ok_or_else(|| RegistryError::UnknownTier(name.to_owned()))
    }

    fn by_index(&self, index: usize) -> Result<&Tier, RegistryError> {
        self.tiers
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                len: self.tiers.len(),
            })
    }
}
