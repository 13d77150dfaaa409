//! Renderable option labels.

use std::fmt;

use selkit_fuzzy::Fragment;

/// Rich label text handed to presentation layers.
///
/// A label is an optional prefix followed by literal and highlighted runs.
/// How highlighted runs are drawn is up to the renderer; [`Display`] yields
/// the plain text.
///
/// [`Display`]: fmt::Display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    prefix: Option<String>,
    fragments: Vec<Fragment<String>>,
}

impl Label {
    /// A label with no highlighting.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let fragments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Fragment::Literal(text)]
        };
        Self {
            prefix: None,
            fragments,
        }
    }

    /// A label built from highlight fragments.
    #[must_use]
    pub fn highlighted(fragments: Vec<Fragment<String>>) -> Self {
        Self {
            prefix: None,
            fragments,
        }
    }

    /// Set the prefix shown before the label body.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn fragments(&self) -> &[Fragment<String>] {
        &self.fragments
    }

    /// Whether any run of the label is highlighted.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.fragments.iter().any(Fragment::is_matched)
    }

    /// The label body without prefix.
    #[must_use]
    pub fn body(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            f.write_str(prefix)?;
        }
        for fragment in &self.fragments {
            f.write_str(fragment.as_str())?;
        }
        Ok(())
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}
