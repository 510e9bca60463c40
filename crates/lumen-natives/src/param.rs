//! A single typed parameter or return value.

use std::sync::{Arc, Weak};

use lumen_types::{Named, TypeArena, TypeHandle};

use crate::flags::ArgFlags;
use crate::invariants;
use crate::signature::Signature;

/// A type plus flags, optionally tied to the identifier that names it.
///
/// The identifier is not owned; when it is present its name takes precedence
/// over the positional fallback names of the enclosing list.
#[derive(Clone, Debug, Default)]
pub struct Parameter {
    pub ty: TypeHandle,
    pub flags: ArgFlags,
    pub fixed_len: Option<i8>,
    ident: Option<Weak<Named>>,
}

impl Parameter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parameter of type `ty`, flagged `ANY_TYPE` when `generic`.
    pub fn with_type(ident: Option<&Arc<Named>>, ty: TypeHandle, generic: bool) -> Self {
        let mut param = Self {
            ident: ident.map(Arc::downgrade),
            ..Self::default()
        };
        param.set_type(ty, generic);
        param
    }

    /// Replace the type. Resets flags to `ANY_TYPE` or none.
    pub fn set_type(&mut self, ty: TypeHandle, generic: bool) {
        self.ty = ty;
        self.flags = if generic {
            ArgFlags::ANY_TYPE
        } else {
            ArgFlags::NONE
        };
    }

    /// Populate from the next entry of `sig`.
    ///
    /// # Panics
    /// Panics if `sig` is exhausted or malformed.
    pub fn set(&mut self, sig: &mut Signature<'_>, arena: &mut TypeArena) {
        let parsed = sig
            .next_type(arena)
            .unwrap_or_else(|| invariants::signature_exhausted(sig.source()));
        self.ty = parsed.ty;
        self.flags = parsed.flags;
        self.fixed_len = parsed.fixed_len;
    }

    /// The identifier naming this parameter, if it is still alive.
    pub fn ident(&self) -> Option<Arc<Named>> {
        self.ident.as_ref().and_then(Weak::upgrade)
    }

    pub fn has_ident(&self) -> bool {
        self.ident.is_some()
    }

    pub(crate) fn same_ident(&self, other: &Parameter) -> bool {
        match (&self.ident, &other.ident) {
            (Some(a), Some(b)) => Weak::ptr_eq(a, b),
            _ => false,
        }
    }
}
