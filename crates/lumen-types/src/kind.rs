//! Type kind discriminants.
//!
//! The declaration order is significant: the dispatch order sorts types of
//! different kinds by this ordinal.

/// The discriminant of a [`Type`](crate::Type).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum TypeKind {
    Int = 0,
    Float = 1,
    String = 2,
    /// `[T]` - vector of one element type.
    Vector = 3,
    /// `T?` - the element type or nil.
    Nilable = 4,
    /// Function value, optionally bound to a specific subfunction.
    Function = 5,
    /// Coroutine value, optionally bound to a specific subfunction.
    Coroutine = 6,
    /// User-defined struct.
    Struct = 7,
    Any = 8,
    /// Type variable standing for its current element type.
    TypeVar = 9,
}

impl TypeKind {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Int),
            1 => Some(Self::Float),
            2 => Some(Self::String),
            3 => Some(Self::Vector),
            4 => Some(Self::Nilable),
            5 => Some(Self::Function),
            6 => Some(Self::Coroutine),
            7 => Some(Self::Struct),
            8 => Some(Self::Any),
            9 => Some(Self::TypeVar),
            _ => None,
        }
    }

    /// Whether this kind carries exactly one element type.
    pub fn is_wrapper(self) -> bool {
        matches!(self, Self::Vector | Self::Nilable | Self::TypeVar)
    }

    /// Whether this kind references a registered entity (function or struct).
    pub fn is_reference(self) -> bool {
        matches!(self, Self::Function | Self::Coroutine | Self::Struct)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Display name of the kind, as used in signatures.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Vector => "vector",
            Self::Nilable => "nilable",
            Self::Function => "function",
            Self::Coroutine => "coroutine",
            Self::Struct => "struct",
            Self::Any => "any",
            Self::TypeVar => "var",
        }
    }
}
