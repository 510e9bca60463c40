//! The native function registry.
//!
//! Two phases:
//! - [`RegistryBuilder`]: mutable, filled once at startup by a single driver
//! - [`Registry`]: the finished catalog, read-only and shareable across threads
//!
//! Natives sharing a name form an overload chain. The name map always points
//! at the first registration (the head); each later overload is spliced in
//! directly after the head, so the chain reads head, newest, ..., oldest.

use indexmap::IndexMap;
use lumen_types::TypeArena;

use crate::config::{ClashPolicy, RegistryConfig};
use crate::error::{ClashKind, RegistryError};
use crate::invariants;
use crate::native::{NativeDecl, NativeFun, NativeId, SubsystemId};

/// Catalog of all registered natives, their subsystems, and the types their
/// signatures allocated.
pub struct Registry<V> {
    natives: Vec<NativeFun<V>>,
    lookup: IndexMap<String, NativeId>,
    subsystems: Vec<String>,
    types: TypeArena,
}

impl<V> Registry<V> {
    fn new() -> Self {
        Self {
            natives: Vec::new(),
            lookup: IndexMap::new(),
            subsystems: Vec::new(),
            types: TypeArena::new(),
        }
    }

    /// Head of the overload chain registered under `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&NativeFun<V>> {
        let id = *self.lookup.get(name)?;
        Some(self.ensure_native(id))
    }

    /// # Panics
    /// Panics if `id` was not issued by this registry.
    pub fn get(&self, id: NativeId) -> &NativeFun<V> {
        self.ensure_native(id)
    }

    pub fn try_get(&self, id: NativeId) -> Option<&NativeFun<V>> {
        self.natives.get(id.index())
    }

    /// Head of the chain `native` belongs to.
    pub fn head_of(&self, native: &NativeFun<V>) -> &NativeFun<V> {
        self.ensure_native(native.first())
    }

    /// All overloads sharing `name`, in chain order. Empty for unknown names.
    pub fn overloads(&self, name: &str) -> Overloads<'_, V> {
        Overloads {
            registry: self,
            next: self.lookup.get(name).copied(),
        }
    }

    /// Overloads reachable from `native` by following its links.
    pub fn chain_from(&self, native: &NativeFun<V>) -> Overloads<'_, V> {
        Overloads {
            registry: self,
            next: Some(native.id()),
        }
    }

    /// All natives in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &NativeFun<V>> {
        self.natives.iter()
    }

    /// Distinct names, in order of first registration.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lookup.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.natives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.natives.is_empty()
    }

    /// Subsystem labels in declaration order.
    pub fn subsystems(&self) -> &[String] {
        &self.subsystems
    }

    pub fn subsystem_label(&self, id: SubsystemId) -> Option<&str> {
        self.subsystems.get(id.index()).map(String::as_str)
    }

    /// Natives tagged with subsystem `id`, in registration order.
    pub fn subsystem_natives(&self, id: SubsystemId) -> impl Iterator<Item = &NativeFun<V>> {
        self.natives
            .iter()
            .filter(move |n| n.subsystem() == Some(id))
    }

    /// Types allocated while parsing signatures.
    pub fn types(&self) -> &TypeArena {
        &self.types
    }
}

impl<V> std::fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("natives", &self.natives.len())
            .field("subsystems", &self.subsystems)
            .field("types", &self.types.len())
            .finish()
    }
}

/// Iterator over an overload chain.
pub struct Overloads<'a, V> {
    registry: &'a Registry<V>,
    next: Option<NativeId>,
}

impl<'a, V> Iterator for Overloads<'a, V> {
    type Item = &'a NativeFun<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let native = self.registry.ensure_native(self.next?);
        self.next = native.overloads();
        Some(native)
    }
}

/// Startup-phase registry under construction.
pub struct RegistryBuilder<V> {
    registry: Registry<V>,
    config: RegistryConfig,
}

impl<V> Default for RegistryBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RegistryBuilder<V> {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Start a new subsystem. Natives registered until the next call are
    /// tagged with it.
    pub fn declare_subsystem(&mut self, label: impl Into<String>) -> SubsystemId {
        let id = SubsystemId::from_raw(self.registry.subsystems.len() as u32);
        let label = label.into();
        tracing::debug!(label = %label, id = id.as_u32(), "declared native subsystem");
        self.registry.subsystems.push(label);
        id
    }

    /// The most recently declared subsystem.
    pub fn current_subsystem(&self) -> Option<SubsystemId> {
        self.registry
            .subsystems
            .len()
            .checked_sub(1)
            .map(|i| SubsystemId::from_raw(i as u32))
    }

    /// Build the descriptor for `decl` and add it to the catalog.
    ///
    /// A name already present must agree with its head on argument count,
    /// return count, subsystem and call mode; the newcomer is then spliced in
    /// right after the head. A rejected declaration leaves the builder as it
    /// was, type arena included.
    ///
    /// # Panics
    /// Panics on a malformed declaration (see [`NativeDecl`]), and on a name
    /// clash when the clash policy is [`ClashPolicy::Abort`].
    pub fn register(&mut self, decl: NativeDecl<V>) -> Result<NativeId, RegistryError> {
        let id = NativeId::from_raw(self.registry.natives.len() as u32);
        let subsystem = self.current_subsystem();
        if subsystem.is_none() && self.config.require_subsystem {
            return Err(RegistryError::NoSubsystem {
                name: decl.name().to_owned(),
            });
        }

        let head_id = self.registry.lookup.get(decl.name()).copied();
        if let Some(head_id) = head_id {
            let head = &self.registry.natives[head_id.index()];
            if let Some(kind) = clash_kind(head, &decl, subsystem) {
                return Err(self.clash(decl.name(), kind));
            }
        }

        let mut native = NativeFun::new(decl, id, subsystem, &mut self.registry.types);

        match head_id {
            Some(head_id) => {
                let head = &mut self.registry.natives[head_id.index()];
                native.overloads = head.overloads;
                native.first = head.first;
                head.overloads = Some(id);
                tracing::trace!(
                    name = native.name(),
                    head = head_id.as_u32(),
                    index = id.as_u32(),
                    "chained native overload"
                );
            }
            None => {
                self.registry.lookup.insert(native.name().to_owned(), id);
            }
        }

        tracing::debug!(
            name = native.name(),
            index = id.as_u32(),
            subsystem = ?subsystem.map(SubsystemId::as_u32),
            "registered native"
        );
        self.registry.natives.push(native);
        Ok(id)
    }

    fn clash(&self, name: &str, kind: ClashKind) -> RegistryError {
        tracing::warn!(name, %kind, "native library name clash");
        let err = RegistryError::NameClash {
            name: name.to_owned(),
            kind,
        };
        if self.config.clash_policy == ClashPolicy::Abort {
            invariants::name_clash(&err);
        }
        err
    }

    pub fn find_by_name(&self, name: &str) -> Option<&NativeFun<V>> {
        self.registry.find_by_name(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Arena for types built alongside registration.
    pub fn types_mut(&mut self) -> &mut TypeArena {
        &mut self.registry.types
    }

    /// End the startup phase.
    pub fn finish(self) -> Registry<V> {
        self.registry
    }
}

fn clash_kind<V>(
    head: &NativeFun<V>,
    decl: &NativeDecl<V>,
    subsystem: Option<SubsystemId>,
) -> Option<ClashKind> {
    if head.args().len() != decl.arg_count() {
        return Some(ClashKind::ArgCount {
            expected: head.args().len(),
            found: decl.arg_count(),
        });
    }
    if head.returns().len() != decl.return_count() {
        return Some(ClashKind::ReturnCount {
            expected: head.returns().len(),
            found: decl.return_count(),
        });
    }
    if head.subsystem() != subsystem {
        return Some(ClashKind::Subsystem {
            expected: head.subsystem(),
            found: subsystem,
        });
    }
    if head.mode() != decl.mode() {
        return Some(ClashKind::CallMode {
            expected: head.mode(),
            found: decl.mode(),
        });
    }
    None
}
