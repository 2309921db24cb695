//! Alignment, spacing and pseudo-class mixins.
//!
//! Values are embedded as given; nothing here inspects them.

use crate::css;
use crate::fragment::{Interpolation, StyleFragment};

/// Center a block horizontally inside its parent.
pub fn center_horizontal() -> StyleFragment {
    css!("margin-left: auto;\nmargin-right: auto;\n")
}

/// Push a block to the left edge of its parent.
pub fn align_left() -> StyleFragment {
    css!("margin-right: auto;\n")
}

/// Push a block to the right edge of its parent.
pub fn align_right() -> StyleFragment {
    css!("margin-left: auto;\n")
}

// Vertical alignment has to be set on the parent, so there is no align_top/bottom.

/// Same padding on the left and right.
pub fn padding_x(value: impl Into<Interpolation>) -> StyleFragment {
    let value = value.into();
    css!("padding-left: " { &value } ";\npadding-right: " { value } ";\n")
}

/// Same padding on the top and bottom.
pub fn padding_y(value: impl Into<Interpolation>) -> StyleFragment {
    let value = value.into();
    css!("padding-top: " { &value } ";\npadding-bottom: " { value } ";\n")
}

/// Same margin on the left and right.
pub fn margin_x(value: impl Into<Interpolation>) -> StyleFragment {
    let value = value.into();
    css!("margin-left: " { &value } ";\nmargin-right: " { value } ";\n")
}

/// Same margin on the top and bottom.
pub fn margin_y(value: impl Into<Interpolation>) -> StyleFragment {
    let value = value.into();
    css!("margin-top: " { &value } ";\nmargin-bottom: " { value } ";\n")
}

/// Apply `content` to the visited, hover and active states of a link.
pub fn all_link_pseudo(content: impl Into<Interpolation>) -> StyleFragment {
    css!("&:visited,\n&:hover,\n&:active {\n" { content.into() } "\n}\n")
}
