//! Well-known names inside the snapshot store and the home directory.

use std::path::Path;

/// Standard store markers and default locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePath {
    /// The `.swap_for_current` pointer file inside the root
    PointerFile,
    /// The `.reserve_emacs_configs` default root under `$HOME`
    DefaultRoot,
    /// The `.emacs.d` default live configuration under `$HOME`
    DefaultLive,
}

impl StorePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointerFile => ".swap_for_current",
            Self::DefaultRoot => ".reserve_emacs_configs",
            Self::DefaultLive => ".emacs.d",
        }
    }
}

impl AsRef<Path> for StorePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for StorePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for StorePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
