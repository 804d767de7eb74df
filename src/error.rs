//! Crate-level error types.

use std::fmt;

/// Errors produced by the raypick crate.
#[derive(Debug)]
pub enum RaypickError {
    /// The ray caster could not produce a result for this frame.
    Raycast(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RaypickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raycast(msg) => write!(f, "raycast error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RaypickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RaypickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
