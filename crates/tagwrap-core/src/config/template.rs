use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Placeholder replaced with the marker label.
pub const PLACEHOLDER_LABEL: &str = "label";
/// Placeholder replaced with the method name.
pub const PLACEHOLDER_METHOD: &str = "method";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Label,
    Method,
}

/// One line of notice text with optional `{label}` / `{method}` placeholders.
///
/// The raw string is validated when parsed, so a constructed template always
/// renders. Literal braces are written as `{{` and `}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct NoticeTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl NoticeTemplate {
    /// # Examples
    /// ```
    /// use tagwrap_core::NoticeTemplate;
    ///
    /// let t = NoticeTemplate::new("Generated class: {label}").unwrap();
    /// assert_eq!(t.render("my_function", "MyGeneratedClass"), "Generated class: MyGeneratedClass");
    /// assert!(NoticeTemplate::new("{unknown}").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, ConfigError> {
        Self::try_from(s.into())
    }

    /// Template text as written in config.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute placeholders.
    pub fn render(&self, method: &str, label: &str) -> String {
        let mut out = String::with_capacity(self.raw.len() + label.len());
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(s),
                Segment::Label => out.push_str(label),
                Segment::Method => out.push_str(method),
            }
        }
        out
    }
}

fn parse(src: &str) -> Result<Vec<Segment>, ConfigError> {
    let mut segments = Vec::new();
    let mut lit = String::new();
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                lit.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(ConfigError::UnbalancedBrace(src.to_string())),
                    }
                }
                let seg = match name.as_str() {
                    PLACEHOLDER_LABEL => Segment::Label,
                    PLACEHOLDER_METHOD => Segment::Method,
                    _ => {
                        return Err(ConfigError::UnknownPlaceholder {
                            placeholder: name,
                            template: src.to_string(),
                        });
                    }
                };
                if !lit.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut lit)));
                }
                segments.push(seg);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                lit.push('}');
            }
            '}' => return Err(ConfigError::UnbalancedBrace(src.to_string())),
            '\n' | '\r' => return Err(ConfigError::MultiLine(src.to_string())),
            c => lit.push(c),
        }
    }
    if !lit.is_empty() {
        segments.push(Segment::Literal(lit));
    }
    Ok(segments)
}

impl PartialEq for NoticeTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for NoticeTemplate {}

impl fmt::Display for NoticeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for NoticeTemplate {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for NoticeTemplate {
    type Error = ConfigError;
    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let segments = parse(&raw)?;
        Ok(Self { raw, segments })
    }
}

impl From<NoticeTemplate> for String {
    fn from(t: NoticeTemplate) -> Self {
        t.raw
    }
}
