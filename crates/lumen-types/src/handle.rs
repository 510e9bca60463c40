//! Value-semantic handles to immutable types.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::arena::TypeArena;
use crate::kind::TypeKind;
use crate::ty::Type;

static INT: Type = Type::Int;
static FLOAT: Type = Type::Float;
static STRING: Type = Type::String;
static ANY: Type = Type::Any;
static VECTOR_ANY: Type = Type::Vector(TypeHandle(&ANY));
static VECTOR_INT: Type = Type::Vector(TypeHandle(&INT));
static VECTOR_FLOAT: Type = Type::Vector(TypeHandle(&FLOAT));
static FUNCTION_NULL: Type = Type::Function(None);
static COROUTINE: Type = Type::Coroutine(None);

/// A never-empty reference to a [`Type`].
///
/// Copying a handle rebinds it without copying the type. Comparisons are by
/// value: two handles to distinct nodes holding equal types are equal. The
/// default handle points at the shared `any` type.
#[derive(Clone, Copy)]
pub struct TypeHandle(&'static Type);

impl TypeHandle {
    /// Wrap a node that lives for the rest of the process.
    pub(crate) fn from_static(ty: &'static Type) -> Self {
        Self(ty)
    }

    pub fn int() -> Self {
        Self(&INT)
    }

    pub fn float() -> Self {
        Self(&FLOAT)
    }

    pub fn string() -> Self {
        Self(&STRING)
    }

    pub fn any() -> Self {
        Self(&ANY)
    }

    pub fn vector_any() -> Self {
        Self(&VECTOR_ANY)
    }

    pub fn vector_int() -> Self {
        Self(&VECTOR_INT)
    }

    pub fn vector_float() -> Self {
        Self(&VECTOR_FLOAT)
    }

    /// Function type not bound to any subfunction.
    pub fn function_null() -> Self {
        Self(&FUNCTION_NULL)
    }

    pub fn coroutine() -> Self {
        Self(&COROUTINE)
    }

    #[inline]
    pub fn get(self) -> &'static Type {
        self.0
    }

    /// Whether both handles point at the same node.
    #[inline]
    pub fn same_node(self, other: Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }

    /// Allocate `with<self>` in `arena`.
    pub fn wrap(self, with: TypeKind, arena: &mut TypeArena) -> Self {
        arena.wrap(self, with)
    }

    pub fn dispatch_cmp(&self, other: &Self) -> Ordering {
        if self.same_node(*other) {
            return Ordering::Equal;
        }
        self.0.dispatch_cmp(other.0)
    }
}

impl Default for TypeHandle {
    fn default() -> Self {
        Self::any()
    }
}

impl Deref for TypeHandle {
    type Target = Type;

    fn deref(&self) -> &Type {
        self.0
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(*other) || self.0 == other.0
    }
}

impl Eq for TypeHandle {}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}
