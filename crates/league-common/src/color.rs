//! Team display colors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::TeamColors;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[a-fA-F0-9]{6}$").expect("valid hex color pattern"));

/// A validated 6-hex-digit team color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TeamColor {
    /// Fallback used when a team has no usable primary color.
    pub const DEFAULT: TeamColor = TeamColor { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`. Anything else (short forms, names, missing `#`) is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        if !HEX_COLOR.is_match(value) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&value[i..i + 2], 16).ok();
        Some(Self {
            r: channel(1)?,
            g: channel(3)?,
            b: channel(5)?,
        })
    }

    /// Resolve a team's primary color, defaulting to white when absent or malformed.
    pub fn from_record(colors: Option<&TeamColors>) -> Self {
        colors
            .and_then(|c| c.primary.as_deref())
            .filter(|p| !p.is_empty())
            .and_then(Self::parse)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for TeamColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
