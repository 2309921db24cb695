//! Width media queries.
//!
//! These primitives know nothing about breakpoints; they wrap content in
//! `@media` conditions over literal widths. All media-query text is assembled by
//! [`media_block`], so pixel and percentage bounds take the same path.

use crate::css;
use crate::fragment::{Interpolation, StyleFragment};
use std::fmt;

/// A CSS width used as a media-query bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Width {
    /// Pixels.
    Px(u32),
    /// Percentage of the viewport.
    Percent(u32),
    /// Any other absolute length, passed through verbatim (`40em`, `30rem`).
    Raw(String),
}

impl Width {
    /// `100%`, the bound used when a range is open above.
    pub const FULL: Self = Self::Percent(100);
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(pixels) => write!(f, "{pixels}px"),
            Self::Percent(percent) => write!(f, "{percent}%"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<u32> for Width {
    fn from(pixels: u32) -> Self {
        Self::Px(pixels)
    }
}

impl From<&str> for Width {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_owned())
    }
}

impl From<String> for Width {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Width> for Interpolation {
    fn from(width: Width) -> Self {
        Self::Text(width.to_string())
    }
}

impl From<&Width> for Interpolation {
    fn from(width: &Width) -> Self {
        Self::Text(width.to_string())
    }
}

fn feature(name: &str, width: &Width) -> StyleFragment {
    css!("(" { name } ": " { width } ")")
}

fn media_block(condition: StyleFragment, content: Interpolation) -> StyleFragment {
    css!("@media " { condition } " {\n" { content } "\n}\n")
}

/// `@media (min-width: width) { content }`
pub fn min_width(width: impl Into<Width>, content: impl Into<Interpolation>) -> StyleFragment {
    width_range(width, None, content)
}

/// `@media (max-width: width) { content }`
pub fn max_width(width: impl Into<Width>, content: impl Into<Interpolation>) -> StyleFragment {
    media_block(feature("max-width", &width.into()), content.into())
}

/// Wrap `content` in a min-width query, bounded above when `max` is given.
pub fn width_range(
    min: impl Into<Width>,
    max: Option<Width>,
    content: impl Into<Interpolation>,
) -> StyleFragment {
    let lower = feature("min-width", &min.into());
    let condition = match max {
        None => lower,
        Some(max) => css!({ lower } " and " { feature("max-width", &max) }),
    };
    media_block(condition, content.into())
}
