use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Declarative tag attached to a method.
///
/// A marker carries exactly one attribute, the display `label`.
/// It is attached when the method is declared and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Marker {
    label: Cow<'static, str>,
}

impl Marker {
    /// Create a marker, rejecting blank labels.
    ///
    /// # Examples
    /// ```
    /// use tagwrap_model::Marker;
    ///
    /// let m = Marker::new("MyGeneratedClass").unwrap();
    /// assert_eq!(m.label(), "MyGeneratedClass");
    /// assert!(Marker::new("   ").is_err());
    /// ```
    pub fn new(label: impl Into<Cow<'static, str>>) -> ModelResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ModelError::EmptyLabel);
        }
        Ok(Self { label })
    }

    /// Build a marker from a label that was already checked at compile time.
    ///
    /// Used by code generated from `#[marker(label = "...")]`.
    #[doc(hidden)]
    pub const fn from_static(label: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
        }
    }

    /// Declared label, verbatim.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl FromStr for Marker {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Marker {
    type Error = ModelError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Marker> for String {
    fn from(m: Marker) -> Self {
        m.label.into_owned()
    }
}
