//! Enumeration types for configuration and output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format for the one-shot CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

/// Kind of Zotero library.
///
/// Parsed through [`FromStr`] everywhere, so the CLI flag and
/// `Config::from_env` accept the same spellings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    /// A personal library (`/users/{id}`).
    #[default]
    User,
    /// A group library (`/groups/{id}`).
    Group,
}

impl LibraryKind {
    /// Path segment used by the Zotero API.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Group => "groups",
        }
    }
}

impl FromStr for LibraryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Ok(Self::User),
            "group" | "groups" => Ok(Self::Group),
            other => Err(format!("unknown library kind '{other}' (expected user or group)")),
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Group => f.write_str("group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_kind_parse() {
        assert_eq!("user".parse::<LibraryKind>(), Ok(LibraryKind::User));
        assert_eq!("Groups".parse::<LibraryKind>(), Ok(LibraryKind::Group));
        assert!("team".parse::<LibraryKind>().is_err());
    }

    #[test]
    fn test_response_format_default_is_markdown() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Markdown);
    }
}
