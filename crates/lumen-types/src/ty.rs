//! The `Type` value and its structural queries.

use std::cmp::Ordering;
use std::fmt;

use crate::handle::TypeHandle;
use crate::invariants;
use crate::kind::TypeKind;
use crate::named::{FunctionRef, StructId};

/// A static type.
///
/// Immutable once built. Wrapped kinds (`Vector`, `Nilable`, `TypeVar`) hold a
/// handle to their element; `Function` and `Coroutine` optionally reference
/// the subfunction they are bound to; `Struct` references its definition.
#[derive(Clone, Copy, Debug)]
pub enum Type {
    Int,
    Float,
    String,
    Vector(TypeHandle),
    Nilable(TypeHandle),
    /// `None` is the nullable function type accepted by callable parameters.
    Function(Option<FunctionRef>),
    Coroutine(Option<FunctionRef>),
    Struct(StructId),
    Any,
    TypeVar(TypeHandle),
}

impl Type {
    pub fn vector(element: TypeHandle) -> Self {
        Self::Vector(element)
    }

    pub fn nilable(element: TypeHandle) -> Self {
        Self::Nilable(element)
    }

    pub fn type_var(element: TypeHandle) -> Self {
        Self::TypeVar(element)
    }

    pub fn function(target: FunctionRef) -> Self {
        Self::Function(Some(target))
    }

    pub fn coroutine(target: FunctionRef) -> Self {
        Self::Coroutine(Some(target))
    }

    pub fn structure(id: StructId) -> Self {
        Self::Struct(id)
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Int => TypeKind::Int,
            Self::Float => TypeKind::Float,
            Self::String => TypeKind::String,
            Self::Vector(_) => TypeKind::Vector,
            Self::Nilable(_) => TypeKind::Nilable,
            Self::Function(_) => TypeKind::Function,
            Self::Coroutine(_) => TypeKind::Coroutine,
            Self::Struct(_) => TypeKind::Struct,
            Self::Any => TypeKind::Any,
            Self::TypeVar(_) => TypeKind::TypeVar,
        }
    }

    fn try_element(&self) -> Option<TypeHandle> {
        match self {
            Self::Vector(e) | Self::Nilable(e) | Self::TypeVar(e) => Some(*e),
            _ => None,
        }
    }

    /// Element of a wrapped type.
    ///
    /// # Panics
    /// Panics if the type is not wrapped.
    pub fn element(&self) -> TypeHandle {
        self.try_element()
            .unwrap_or_else(|| invariants::element_of_unwrapped(self))
    }

    pub fn is_wrapped(&self) -> bool {
        self.kind().is_wrapper()
    }

    /// The element for wrapped types, `self` otherwise.
    pub fn unwrapped(&self) -> &Type {
        match self.try_element() {
            Some(e) => e.get(),
            None => self,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// A function type bound to a concrete subfunction.
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(Some(_)))
    }

    /// Shape-only equality: kinds must match (recursively for wrapped types),
    /// but the referenced function or struct is ignored.
    pub fn eq_no_index(&self, other: &Type) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        match (self.try_element(), other.try_element()) {
            (Some(a), Some(b)) => a.eq_no_index(&b),
            _ => true,
        }
    }

    /// Total order used to sort multi-dispatch candidates.
    ///
    /// Kinds order by ordinal. Vectors and nilables recurse into their
    /// elements, functions and structs compare by registration index, and all
    /// remaining same-kind pairs are equal. This is coarser than `==` (two
    /// distinct type variables compare equal here) and is therefore not an
    /// `Ord` impl.
    pub fn dispatch_cmp(&self, other: &Type) -> Ordering {
        match (self, other) {
            (Self::Vector(a), Self::Vector(b)) | (Self::Nilable(a), Self::Nilable(b)) => {
                a.dispatch_cmp(b)
            }
            (Self::Function(a), Self::Function(b)) => {
                let idx = |f: &Option<FunctionRef>| f.map(|f| f.function.as_u32());
                idx(a).cmp(&idx(b))
            }
            (Self::Struct(a), Self::Struct(b)) => a.as_u32().cmp(&b.as_u32()),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Vector(a), Self::Vector(b))
            | (Self::Nilable(a), Self::Nilable(b))
            | (Self::TypeVar(a), Self::TypeVar(b)) => a == b,
            (Self::Function(a), Self::Function(b)) | (Self::Coroutine(a), Self::Coroutine(b)) => {
                a == b
            }
            (Self::Struct(a), Self::Struct(b)) => a == b,
            _ => self.kind() == other.kind(),
        }
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(e) => write!(f, "[{e}]"),
            Self::Nilable(e) => write!(f, "{e}?"),
            Self::TypeVar(e) => write!(f, "var({e})"),
            Self::Struct(id) => write!(f, "struct#{}", id.as_u32()),
            other => f.write_str(other.kind().name()),
        }
    }
}
