//! Registry configuration.

/// What to do when a declaration clashes with an existing name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClashPolicy {
    /// Return [`RegistryError::NameClash`](crate::RegistryError::NameClash).
    #[default]
    Report,
    /// Panic with the clash message.
    Abort,
}

/// Configuration for building a registry.
#[derive(Clone, Debug, Default)]
pub struct RegistryConfig {
    pub(crate) clash_policy: ClashPolicy,
    /// Reject natives registered before the first subsystem.
    pub(crate) require_subsystem: bool,
}

impl RegistryConfig {
    /// Create a new RegistryConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name clash policy.
    pub fn clash_policy(mut self, value: ClashPolicy) -> Self {
        self.clash_policy = value;
        self
    }

    /// Set whether every native must belong to a declared subsystem.
    pub fn require_subsystem(mut self, value: bool) -> Self {
        self.require_subsystem = value;
        self
    }
}
