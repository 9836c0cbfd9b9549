//! Elevation levels.
//!
//! [`Elevation`] is a newtype over `u8` holding a level in `0..=25`, written
//! in input text as the letters `'a'..='z'`.

use std::fmt;

/// A height-map elevation level in `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevation(u8);

impl Elevation {
    /// Level `'a'`; also the level of the start marker.
    pub const LOWEST: Self = Self(0);
    /// Level `'z'`; also the level of the end marker.
    pub const HIGHEST: Self = Self(25);

    /// Create an elevation from its level, or `None` if above
    /// [`HIGHEST`](Self::HIGHEST).
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::HIGHEST.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Map a lowercase letter to its elevation.
    pub fn from_letter(ch: char) -> Option<Self> {
        ch.is_ascii_lowercase().then(|| Self(ch as u8 - b'a'))
    }

    /// The underlying level.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The letter this level is written as.
    pub fn letter(self) -> char {
        char::from(b'a' + self.0)
    }

    /// Signed difference `to - self`: positive when `to` is higher.
    pub fn rise_to(self, to: Elevation) -> i32 {
        i32::from(to.0) - i32::from(self.0)
    }
}

impl From<Elevation> for u8 {
    fn from(e: Elevation) -> Self {
        e.0
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
