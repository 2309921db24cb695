//! Styled-component helpers.
//!
//! Builds composable CSS fragments for component styles: responsive media queries
//! keyed on breakpoint tiers, alignment and spacing mixins, nested rules, and the
//! prop records components use to accept extra CSS.

#![forbid(unsafe_code)]

pub mod fragment;
pub mod media;
pub mod mixins;
pub mod props;
pub mod resolver;
pub mod rule;

pub use bs_breakpoints::{BreakpointId, BreakpointRegistry, Intent, RegistryError};
pub use fragment::{Interpolation, StyleFragment, Template};
pub use media::{Width, max_width, min_width, width_range};
pub use mixins::{
    align_left, align_right, all_link_pseudo, center_horizontal, margin_x, margin_y, padding_x,
    padding_y,
};
pub use props::{StyleProps, StyledProps, WithCss};
pub use resolver::{BreakpointQueryResolver, breakpoint_max, breakpoint_min, breakpoint_same};
pub use rule::Rule;
