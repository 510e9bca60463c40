//! Deferred registration.
//!
//! Native modules declare a registration function each; a single driver runs
//! them in declaration order once, building the registry. Registration order
//! (and therefore every native's index) depends only on the order of
//! [`StartupList::declare`] calls.

use crate::config::RegistryConfig;
use crate::error::{RegistryError, StartupError};
use crate::registry::{Registry, RegistryBuilder};

/// A registration thunk: declares subsystems and registers natives.
pub type RegisterFn<V> = fn(&mut RegistryBuilder<V>) -> Result<(), RegistryError>;

pub struct StartupEntry<V> {
    pub name: &'static str,
    register: RegisterFn<V>,
}

/// Ordered list of registration thunks.
pub struct StartupList<V> {
    entries: Vec<StartupEntry<V>>,
}

impl<V> Default for StartupList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> StartupList<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn declare(&mut self, name: &'static str, register: RegisterFn<V>) -> &mut Self {
        self.entries.push(StartupEntry { name, register });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Run every entry once, in order, and return the finished registry.
    ///
    /// Stops at the first failing entry.
    #[tracing::instrument(skip_all, fields(entries = self.entries.len()))]
    pub fn run(&self, config: RegistryConfig) -> Result<Registry<V>, StartupError> {
        let mut builder = RegistryBuilder::with_config(config);
        for entry in &self.entries {
            tracing::debug!(entry = entry.name, "running native registration");
            (entry.register)(&mut builder).map_err(|source| StartupError {
                entry: entry.name,
                source,
            })?;
        }
        let registry = builder.finish();
        tracing::debug!(natives = registry.len(), "native registry ready");
        Ok(registry)
    }
}
