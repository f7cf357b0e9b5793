//! The active-snapshot pointer.

use std::fmt;

/// Which snapshot, if any, the live configuration corresponds to.
///
/// Persisted as the trimmed content of the pointer file; empty content
/// means [`Pointer::NoActive`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Pointer {
    /// The live directory was loaded from the named snapshot
    Active(String),
    /// Nothing loaded, or the live directory is untracked
    #[default]
    NoActive,
}

impl Pointer {
    /// Interpret raw pointer file content.
    pub fn parse(content: &str) -> Self {
        match content.trim() {
            "" => Self::NoActive,
            name => Self::Active(name.to_string()),
        }
    }

    /// Name of the active snapshot, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Active(name) => Some(name),
            Self::NoActive => None,
        }
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active(name) => write!(f, "{name}"),
            Self::NoActive => write!(f, "(none)"),
        }
    }
}
