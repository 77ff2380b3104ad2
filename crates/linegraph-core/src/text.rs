// File: crates/linegraph-core/src/text.rs
// Summary: Font description (CSS shorthand parsing) and text anchoring enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Font request handed to the surface. Backends resolve `family` against what they have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Font {
    pub size: f64,
    pub family: String,
    pub bold: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontParseError {
    #[error("font shorthand is missing a size: `{0}`")]
    MissingSize(String),
    #[error("font shorthand is missing a family: `{0}`")]
    MissingFamily(String),
}

impl Font {
    pub fn new(size: f64, family: impl Into<String>) -> Self {
        Self { size, family: family.into(), bold: false }
    }

    pub fn small() -> Self { Self::new(13.0, "sans-serif") }
    pub fn medium() -> Self { Self::new(16.0, "sans-serif") }
}

impl Default for Font {
    fn default() -> Self { Self::small() }
}

/// CSS absolute-size keywords in pixels.
fn keyword_size(token: &str) -> Option<f64> {
    let px = match token {
        "xx-small" => 9.0,
        "x-small" => 10.0,
        "small" => 13.0,
        "medium" => 16.0,
        "large" => 18.0,
        "x-large" => 24.0,
        "xx-large" => 32.0,
        _ => return None,
    };
    Some(px)
}

fn numeric_size(token: &str) -> Option<f64> {
    let (num, scale) = if let Some(n) = token.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = token.strip_suffix("pt") {
        (n, 4.0 / 3.0)
    } else {
        (token, 1.0)
    };
    num.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0).map(|v| v * scale)
}

impl FromStr for Font {
    type Err = FontParseError;

    /// Parses `[bold] <size> <family...>`, e.g. `"medium sans-serif"` or `"bold 14px Arial"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bold = false;
        let mut size = None;
        let mut family = Vec::new();
        for token in s.split_whitespace() {
            if size.is_none() {
                let lower = token.to_ascii_lowercase();
                if lower == "bold" {
                    bold = true;
                    continue;
                }
                if lower == "normal" || lower == "italic" {
                    continue;
                }
                if let Some(px) = keyword_size(&lower).or_else(|| numeric_size(&lower)) {
                    size = Some(px);
                    continue;
                }
                return Err(FontParseError::MissingSize(s.to_string()));
            }
            family.push(token.trim_matches(|c| c == '"' || c == '\''));
        }
        let size = size.ok_or_else(|| FontParseError::MissingSize(s.to_string()))?;
        if family.is_empty() {
            return Err(FontParseError::MissingFamily(s.to_string()));
        }
        Ok(Self { size, family: family.join(" "), bold })
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            write!(f, "bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}

impl From<Font> for String {
    fn from(font: Font) -> Self { font.to_string() }
}

impl TryFrom<String> for Font {
    type Error = FontParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}
