//! Template combinator (styled-components `css` pattern)
//!
//! A [`StyleFragment`] is an immutable chunk of CSS text that may embed other
//! fragments. Fragments are only ever built by a [`Template`] (or the [`css!`]
//! macro) and composed by embedding; their contents are never parsed.

use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Text(String),
    Nested(StyleFragment),
}

/// Opaque, immutable, composable CSS fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleFragment {
    pieces: Arc<[Piece]>,
}

impl StyleFragment {
    /// A fragment rendering to nothing.
    pub fn empty() -> Self {
        Self {
            pieces: Arc::from(Vec::new()),
        }
    }

    /// Whether the fragment renders to an empty string.
    pub fn is_empty(&self) -> bool {
        self.pieces.iter().all(|piece| match piece {
            Piece::Text(text) => text.is_empty(),
            Piece::Nested(fragment) => fragment.is_empty(),
        })
    }

    /// Embed several fragments one after another.
    pub fn concat<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let pieces: Vec<Piece> = fragments
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .map(Piece::Nested)
            .collect();
        Self {
            pieces: Arc::from(pieces),
        }
    }

    /// Render the fragment, including every nested fragment, to CSS text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for StyleFragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &*self.pieces {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Nested(fragment) => fmt::Display::fmt(fragment, f)?,
            }
        }
        Ok(())
    }
}

/// A value embedded into a template.
///
/// `Empty` renders nothing, so optional values can be embedded directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Renders nothing.
    #[default]
    Empty,
    /// Plain text, embedded verbatim.
    Text(String),
    /// A nested fragment.
    Fragment(StyleFragment),
}

impl From<&str> for Interpolation {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Interpolation {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Interpolation {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<u32> for Interpolation {
    fn from(number: u32) -> Self {
        Self::Text(number.to_string())
    }
}

impl From<StyleFragment> for Interpolation {
    fn from(fragment: StyleFragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<&StyleFragment> for Interpolation {
    fn from(fragment: &StyleFragment) -> Self {
        Self::Fragment(fragment.clone())
    }
}

impl From<&Self> for Interpolation {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<Self>> From<Option<T>> for Interpolation {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Builder pairing literal CSS text with embedded values.
#[derive(Debug, Default)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Start an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    /// Append an embedded value or fragment.
    #[must_use]
    pub fn value(mut self, value: impl Into<Interpolation>) -> Self {
        match value.into() {
            Interpolation::Empty => {}
            Interpolation::Text(text) => self.push_text(&text),
            Interpolation::Fragment(fragment) => self.pieces.push(Piece::Nested(fragment)),
        }
        self
    }

    /// Freeze the template into a fragment.
    pub fn finish(self) -> StyleFragment {
        StyleFragment {
            pieces: Arc::from(self.pieces),
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Piece::Text(last)) = self.pieces.last_mut() {
            last.push_str(text);
        } else {
            self.pieces.push(Piece::Text(text.to_owned()));
        }
    }
}

/// Build a [`StyleFragment`] from string literals and `{ value }` embeds.
///
/// ```
/// use styled_utils::css;
///
/// let gap = "10px";
/// let fragment = css!("padding-left: " { gap } ";\npadding-right: " { gap } ";\n");
/// assert_eq!(fragment.render(), "padding-left: 10px;\npadding-right: 10px;\n");
/// ```
#[macro_export]
macro_rules! css {
    (@build ($template:expr) ;) => {
        $template.finish()
    };
    (@build ($template:expr) ; $text:literal $($rest:tt)*) => {
        $crate::css!(@build ($template.text($text)) ; $($rest)*)
    };
    (@build ($template:expr) ; { $value:expr } $($rest:tt)*) => {
        $crate::css!(@build ($template.value($value)) ; $($rest)*)
    };
    ($($body:tt)*) => {
        $crate::css!(@build ($crate::fragment::Template::new()) ; $($body)*)
    };
}
