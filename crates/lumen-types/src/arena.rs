//! Pointer-stable storage for types built at startup.
//!
//! Nodes are never freed: every node allocated here lives for the rest of the
//! process, so handles to it stay valid regardless of later allocations or of
//! the arena itself being dropped.

use crate::handle::TypeHandle;
use crate::invariants;
use crate::kind::TypeKind;
use crate::ty::Type;

#[derive(Debug, Default)]
pub struct TypeArena {
    nodes: Vec<TypeHandle>,
}

impl TypeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `ty` in a fresh node and return a handle to it.
    pub fn alloc(&mut self, ty: Type) -> TypeHandle {
        let node: &'static Type = Box::leak(Box::new(ty));
        let handle = TypeHandle::from_static(node);
        self.nodes.push(handle);
        handle
    }

    /// Allocate a `with` type whose element is `element`.
    ///
    /// # Panics
    /// Panics if `with` is not a wrapper kind.
    pub fn wrap(&mut self, element: TypeHandle, with: TypeKind) -> TypeHandle {
        let ty = match with {
            TypeKind::Vector => Type::Vector(element),
            TypeKind::Nilable => Type::Nilable(element),
            TypeKind::TypeVar => Type::TypeVar(element),
            other => invariants::not_a_wrapper(other),
        };
        self.alloc(ty)
    }

    pub fn vector_of(&mut self, element: TypeHandle) -> TypeHandle {
        self.wrap(element, TypeKind::Vector)
    }

    pub fn nilable_of(&mut self, element: TypeHandle) -> TypeHandle {
        self.wrap(element, TypeKind::Nilable)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = TypeHandle> + '_ {
        self.nodes.iter().copied()
    }
}
