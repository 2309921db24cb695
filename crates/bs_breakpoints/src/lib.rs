//! Responsive breakpoint registry.
//!
//! A registry is an ordered, immutable list of named tiers. Each tier carries the
//! minimum viewport width (in pixels) at which it starts; the tier's maximum is one
//! pixel below the next tier's minimum, and the widest tier is unbounded above.
//! The default tier set mirrors the Bootstrap grid.

#![forbid(unsafe_code)]

mod config;
mod error;
mod registry;

pub use config::{RegistryConfig, TierConfig};
pub use error::{ConfigError, RegistryError};
pub use registry::{BOOTSTRAP_TIERS, BreakpointId, BreakpointRegistry, Intent, Tier, bootstrap};
