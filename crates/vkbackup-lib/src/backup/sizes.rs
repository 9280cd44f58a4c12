//! Size variant ranking
//!
//! The photo API tags every rendition with a single-letter code. The codes
//! are ranked by a fixed table rather than by measured pixel dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Per-photo selection errors. Neither aborts the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown size code '{code}' for {url}")]
    UnknownSizeCode { code: String, url: String },

    #[error("Photo has no size variants")]
    NoSizes,
}

/// Rendition codes, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeCode {
    S,
    M,
    X,
    O,
    P,
    Q,
    R,
    Y,
    Z,
    W,
}

impl SizeCode {
    /// All codes in ranking order
    pub const RANKING: [SizeCode; 10] = [
        SizeCode::S,
        SizeCode::M,
        SizeCode::X,
        SizeCode::O,
        SizeCode::P,
        SizeCode::Q,
        SizeCode::R,
        SizeCode::Y,
        SizeCode::Z,
        SizeCode::W,
    ];

    /// Position in the ranking table (0 = smallest)
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCode::S => "s",
            SizeCode::M => "m",
            SizeCode::X => "x",
            SizeCode::O => "o",
            SizeCode::P => "p",
            SizeCode::Q => "q",
            SizeCode::R => "r",
            SizeCode::Y => "y",
            SizeCode::Z => "z",
            SizeCode::W => "w",
        }
    }
}

impl fmt::Display for SizeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeCode::RANKING
            .iter()
            .find(|code| code.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid size code: {}", s))
    }
}

/// One rendition of a photo as reported by the source API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub url: String,
    #[serde(rename = "type")]
    pub code: String,
}

impl SizeVariant {
    pub fn new(url: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            code: code.into(),
        }
    }

    /// Parse this variant's code against the ranking table
    pub fn size_code(&self) -> Result<SizeCode, SelectionError> {
        self.code
            .parse()
            .map_err(|_| SelectionError::UnknownSizeCode {
                code: self.code.clone(),
                url: self.url.clone(),
            })
    }
}

/// Pick the highest-ranked variant.
///
/// Every variant's code is checked before a winner is chosen, so a photo
/// carrying any unmapped code fails as a whole. When several variants share
/// the top code the last one wins.
pub fn select_largest(variants: &[SizeVariant]) -> Result<(SizeCode, &SizeVariant), SelectionError> {
    let ranked = variants
        .iter()
        .map(|variant| variant.size_code().map(|code| (code, variant)))
        .collect::<Result<Vec<_>, _>>()?;

    ranked
        .into_iter()
        .max_by_key(|(code, _)| *code)
        .ok_or(SelectionError::NoSizes)
}

#[cfg(test)]
mod tests {
    include!("sizes.test.rs");
}
