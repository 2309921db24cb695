//! Breakpoint-aware media queries.
//!
//! Pixel widths always come from the registry; the resolver only picks which
//! boundary an intent needs and hands it to the width primitives in [`crate::media`].

use crate::fragment::{Interpolation, StyleFragment};
use crate::media::{Width, max_width, min_width, width_range};
use bs_breakpoints::{BreakpointId, BreakpointRegistry, Intent, RegistryError, bootstrap};
use log::trace;

/// Turns a breakpoint identifier plus intent into a media-query fragment.
///
/// Registry failures (unknown names, out-of-range indices) are returned unchanged.
#[derive(Clone, Copy, Debug)]
pub struct BreakpointQueryResolver<'registry> {
    registry: &'registry BreakpointRegistry,
}

impl BreakpointQueryResolver<'static> {
    /// Resolver over the default Bootstrap tiers.
    pub fn bootstrap() -> Self {
        Self::new(bootstrap())
    }
}

impl<'registry> BreakpointQueryResolver<'registry> {
    /// Resolver over a caller-supplied registry.
    pub const fn new(registry: &'registry BreakpointRegistry) -> Self {
        Self { registry }
    }

    /// The registry widths are read from.
    pub const fn registry(&self) -> &'registry BreakpointRegistry {
        self.registry
    }

    /// Dispatch on `intent`.
    ///
    /// # Errors
    /// Propagates the registry's error for an unknown identifier.
    pub fn resolve(
        &self,
        intent: Intent,
        breakpoint: impl Into<BreakpointId>,
        content: impl Into<Interpolation>,
    ) -> Result<StyleFragment, RegistryError> {
        match intent {
            Intent::Min => self.resolve_min(breakpoint, content),
            Intent::Max => self.resolve_max(breakpoint, content),
            Intent::Same => self.resolve_same(breakpoint, content),
        }
    }

    /// Viewport at least as wide as the tier's minimum.
    ///
    /// # Errors
    /// Propagates the registry's error for an unknown identifier.
    pub fn resolve_min(
        &self,
        breakpoint: impl Into<BreakpointId>,
        content: impl Into<Interpolation>,
    ) -> Result<StyleFragment, RegistryError> {
        let name = match breakpoint.into() {
            BreakpointId::ByName(name) => name,
            BreakpointId::ByIndex(index) => self.registry.index_to_name(index)?.to_owned(),
        };
        let width = self.registry.min_width(&name)?;
        trace!(target: "styled_utils", "min query for {name}: {width}px");
        Ok(min_width(Width::Px(width), content))
    }

    /// Viewport no wider than the tier's maximum.
    ///
    /// The bound is the next tier's minimum minus one pixel so that `max(n)` and
    /// `min(n + 1)` never both match. The widest tier has no pixel maximum and is
    /// bounded by `100%` instead.
    ///
    /// # Errors
    /// Propagates the registry's error for an unknown identifier.
    pub fn resolve_max(
        &self,
        breakpoint: impl Into<BreakpointId>,
        content: impl Into<Interpolation>,
    ) -> Result<StyleFragment, RegistryError> {
        let index = match breakpoint.into() {
            BreakpointId::ByName(name) => self.registry.name_to_index(&name)?,
            id @ BreakpointId::ByIndex(_) => self.registry.tier(&id)?.index(),
        };
        let bound = if index + 1 == self.registry.len() {
            Width::FULL
        } else {
            let next = self.registry.index_to_name(index + 1)?;
            Width::Px(self.registry.min_width(next)? - 1)
        };
        trace!(target: "styled_utils", "max query for #{index}: {bound}");
        Ok(max_width(bound, content))
    }

    /// Viewport inside the tier's own range, as the registry defines it.
    ///
    /// # Errors
    /// Propagates the registry's error for an unknown identifier.
    pub fn resolve_same(
        &self,
        breakpoint: impl Into<BreakpointId>,
        content: impl Into<Interpolation>,
    ) -> Result<StyleFragment, RegistryError> {
        let id = breakpoint.into();
        let (min, max) = self.registry.comparison_range(&id, Intent::Same)?;
        trace!(target: "styled_utils", "same query for {id}: {min}..={max:?}");
        Ok(width_range(Width::Px(min), max.map(Width::Px), content))
    }
}

/// [`BreakpointQueryResolver::resolve_min`] over the Bootstrap tiers.
///
/// # Errors
/// Propagates the registry's error for an unknown identifier.
pub fn breakpoint_min(
    breakpoint: impl Into<BreakpointId>,
    content: impl Into<Interpolation>,
) -> Result<StyleFragment, RegistryError> {
    BreakpointQueryResolver::bootstrap().resolve_min(breakpoint, content)
}

/// [`BreakpointQueryResolver::resolve_max`] over the Bootstrap tiers.
///
/// # Errors
/// Propagates the registry's error for an unknown identifier.
pub fn breakpoint_max(
    breakpoint: impl Into<BreakpointId>,
    content: impl Into<Interpolation>,
) -> Result<StyleFragment, RegistryError> {
    BreakpointQueryResolver::bootstrap().resolve_max(breakpoint, content)
}

/// [`BreakpointQueryResolver::resolve_same`] over the Bootstrap tiers.
///
/// # Errors
/// Propagates the registry's error for an unknown identifier.
pub fn breakpoint_same(
    breakpoint: impl Into<BreakpointId>,
    content: impl Into<Interpolation>,
) -> Result<StyleFragment, RegistryError> {
    BreakpointQueryResolver::bootstrap().resolve_same(breakpoint, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css;

    fn three_tiers() -> Result<BreakpointRegistry, RegistryError> {
        BreakpointRegistry::new([("sm", 0), ("md", 768), ("lg", 1200)])
    }

    /// Tests the min query for a middle tier
    ///
    /// # Errors
    /// Returns an error if the test registry is invalid
    #[test]
    fn test_min_md() -> Result<(), RegistryError> {
        let registry = three_tiers()?;
        let resolver = BreakpointQueryResolver::new(&registry);
        let rendered = resolver.resolve_min("md", css!("color: red;"))?.render();
        assert_eq!(rendered, "@media (min-width: 768px) {\ncolor: red;\n}\n");
        Ok(())
    }

    /// Tests the max query stops one pixel below the next tier
    ///
    /// # Errors
    /// Returns an error if the test registry is invalid
    #[test]
    fn test_max_md() -> Result<(), RegistryError> {
        let registry = three_tiers()?;
        let resolver = BreakpointQueryResolver::new(&registry);
        let rendered = resolver.resolve_max("md", css!("color: red;"))?.render();
        assert_eq!(rendered, "@media (max-width: 1199px) {\ncolor: red;\n}\n");
        assert!(!rendered.contains("min-width"));
        Ok(())
    }

    /// Tests the widest tier's max query is bounded by 100%
    ///
    /// # Errors
    /// Returns an error if the test registry is invalid
    #[test]
    fn test_max_last_tier() -> Result<(), RegistryError> {
        let registry = three_tiers()?;
        let resolver = BreakpointQueryResolver::new(&registry);
        let by_name = resolver.resolve_max("lg", css!("color: red;"))?.render();
        assert_eq!(by_name, "@media (max-width: 100%) {\ncolor: red;\n}\n");
        let by_index = resolver.resolve_max(2usize, css!("color: red;"))?.render();
        assert_eq!(by_index, by_name);
        Ok(())
    }

    /// Tests the same-tier query for middle and widest tiers
    ///
    /// # Errors
    /// Returns an error if the test registry is invalid
    #[test]
    fn test_same() -> Result<(), RegistryError> {
        let registry = three_tiers()?;
        let resolver = BreakpointQueryResolver::new(&registry);
        assert_eq!(
            resolver.resolve_same("md", css!("color: red;"))?.render(),
            "@media (min-width: 768px) and (max-width: 1199px) {\ncolor: red;\n}\n"
        );
        assert_eq!(
            resolver.resolve_same("lg", css!("color: red;"))?.render(),
            "@media (min-width: 1200px) {\ncolor: red;\n}\n"
        );
        assert_eq!(
            resolver.resolve_same(0usize, css!("color: red;"))?.render(),
            "@media (min-width: 0px) and (max-width: 767px) {\ncolor: red;\n}\n"
        );
        Ok(())
    }

    /// Tests name and index produce identical fragments
    ///
    /// # Errors
    /// Returns an error if a Bootstrap tier fails to resolve
    #[test]
    fn test_name_and_index_agree() -> Result<(), RegistryError> {
        let resolver = BreakpointQueryResolver::bootstrap();
        for tier in resolver.registry().tiers() {
            for intent in [Intent::Min, Intent::Max, Intent::Same] {
                let by_name = resolver.resolve(intent, tier.name(), css!("a: b;"))?;
                let by_index = resolver.resolve(intent, tier.index(), css!("a: b;"))?;
                assert_eq!(by_name, by_index);
            }
        }
        Ok(())
    }

    /// Tests unknown identifiers return the registry's error unchanged
    ///
    /// # Errors
    /// Returns an error if the test registry is invalid
    #[test]
    fn test_unknown_breakpoints() -> Result<(), RegistryError> {
        let registry = three_tiers()?;
        let resolver = BreakpointQueryResolver::new(&registry);
        let unknown = RegistryError::UnknownTier("xxl".to_owned());
        let out_of_range = RegistryError::IndexOutOfRange { index: 7, len: 3 };

        assert_eq!(resolver.resolve_min("xxl", css!("")), Err(unknown.clone()));
        assert_eq!(resolver.resolve_max("xxl", css!("")), Err(unknown.clone()));
        assert_eq!(resolver.resolve_same("xxl", css!("")), Err(unknown));
        assert_eq!(resolver.resolve_min(7usize, css!("")), Err(out_of_range.clone()));
        assert_eq!(resolver.resolve_max(7usize, css!("")), Err(out_of_range.clone()));
        assert_eq!(resolver.resolve_same(7usize, css!("")), Err(out_of_range));
        Ok(())
    }

    /// Tests the free functions use the Bootstrap tiers
    ///
    /// # Errors
    /// Returns an error if a Bootstrap tier fails to resolve
    #[test]
    fn test_bootstrap_shortcuts() -> Result<(), RegistryError> {
        assert!(breakpoint_min("md", css!(""))?.render().contains("(min-width: 768px)"));
        assert!(breakpoint_max("xl", css!(""))?.render().contains("(max-width: 1399px)"));
        assert!(breakpoint_max("xxl", css!(""))?.render().contains("(max-width: 100%)"));
        assert!(
            breakpoint_same("xs", css!(""))?
                .render()
                .contains("(min-width: 0px) and (max-width: 575px)")
        );
        Ok(())
    }
}
