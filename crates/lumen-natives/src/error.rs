//! Errors reported by registration and invocation.

use std::fmt;

use crate::native::{CallMode, SubsystemId};

/// Why a second declaration under an existing name was rejected.
///
/// `expected` is the value on the chain's head, `found` the newcomer's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClashKind {
    ArgCount { expected: usize, found: usize },
    ReturnCount { expected: usize, found: usize },
    Subsystem {
        expected: Option<SubsystemId>,
        found: Option<SubsystemId>,
    },
    CallMode { expected: CallMode, found: CallMode },
}

impl fmt::Display for ClashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn subsystem(id: &Option<SubsystemId>) -> String {
            match id {
                Some(id) => id.as_u32().to_string(),
                None => "none".to_owned(),
            }
        }

        match self {
            Self::ArgCount { expected, found } => {
                write!(f, "expected {expected} arguments, found {found}")
            }
            Self::ReturnCount { expected, found } => {
                write!(f, "expected {expected} return values, found {found}")
            }
            Self::Subsystem { expected, found } => write!(
                f,
                "expected subsystem {}, found {}",
                subsystem(expected),
                subsystem(found)
            ),
            Self::CallMode { expected, found } => {
                write!(f, "expected {expected} call mode, found {found}")
            }
        }
    }
}

/// Registration failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("native library name clash: {name} ({kind})")]
    NameClash { name: String, kind: ClashKind },

    #[error("native `{name}` registered before any subsystem was declared")]
    NoSubsystem { name: String },
}

impl RegistryError {
    /// Name of the native whose registration failed.
    pub fn name(&self) -> &str {
        match self {
            Self::NameClash { name, .. } | Self::NoSubsystem { name } => name,
        }
    }
}

/// A startup entry failed to register its natives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("startup registration `{entry}` failed: {source}")]
pub struct StartupError {
    pub entry: &'static str,
    #[source]
    pub source: RegistryError,
}

/// Checked invocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    #[error("expected {expected} arguments, got {found}")]
    ArgCount { expected: usize, found: usize },

    #[error("native produced {found} results, declared {expected}")]
    ReturnCount { expected: usize, found: usize },

    #[error("native has no continuation")]
    NoContinuation,
}
