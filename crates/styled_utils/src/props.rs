//! Component prop records.
//!
//! A component declares its functional props and its style props as two plain
//! structs. [`StyledProps`] carries both, and [`WithCss`] adds the optional extra
//! CSS a caller can hand to any component instance.

use crate::fragment::StyleFragment;

/// Style props that render straight into the component's CSS.
pub trait StyleProps {
    /// CSS declarations for the current prop values.
    fn to_fragment(&self) -> StyleFragment;
}

/// Functional and style props of one component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledProps<F, S> {
    /// Props the component uses for behaviour and markup.
    pub functional: F,
    /// Props that only affect styling.
    pub style: S,
}

impl<F, S> StyledProps<F, S> {
    /// Pair functional and style props.
    pub const fn new(functional: F, style: S) -> Self {
        Self { functional, style }
    }

    /// Split back into functional and style props.
    pub fn into_parts(self) -> (F, S) {
        (self.functional, self.style)
    }

    /// Attach extra CSS to this instance.
    pub fn with_css(self, css: StyleFragment) -> WithCss<Self> {
        WithCss::new(self).css(css)
    }
}

impl<F, S: StyleProps> StyledProps<F, S> {
    /// CSS rendered from the style props alone.
    pub fn style_fragment(&self) -> StyleFragment {
        self.style.to_fragment()
    }
}

/// Props plus optional caller-supplied CSS, applied after the component's own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WithCss<T> {
    /// The wrapped component props.
    pub props: T,
    /// Extra CSS, rendered after the component's own.
    pub css: Option<StyleFragment>,
}

impl<T> WithCss<T> {
    /// Wrap props with no extra CSS.
    pub const fn new(props: T) -> Self {
        Self { props, css: None }
    }

    /// Set the extra CSS, replacing any given before.
    #[must_use]
    pub fn css(mut self, css: StyleFragment) -> Self {
        self.css = Some(css);
        self
    }

    /// The extra CSS, or an empty fragment when none was given.
    pub fn css_fragment(&self) -> StyleFragment {
        self.css.clone().unwrap_or_default()
    }
}

impl<F, S: StyleProps> WithCss<StyledProps<F, S>> {
    /// Style props followed by the extra CSS.
    pub fn fragment(&self) -> StyleFragment {
        StyleFragment::concat([self.props.style_fragment(), self.css_fragment()])
    }
}
