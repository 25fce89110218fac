use crate::errors::{PlaylistError, Result};
use std::fmt;

/// Longest song name accepted, counted in characters.
pub const MAX_NAME_LEN: usize = 49;

/// A short song label, checked against [`MAX_NAME_LEN`].
///
/// Over-long names are rejected rather than truncated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongName(String);

impl SongName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(PlaylistError::LabelTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SongName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for SongName {
    type Error = PlaylistError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}
