//! Identities owned by the surrounding compiler.
//!
//! Types only ever reference these by index; nothing in this crate
//! dereferences a function, subfunction or struct definition.

use serde::{Deserialize, Serialize};

/// A named, indexed entity (identifier, function, native, struct).
///
/// Only `name` and `idx` are part of the persisted form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
    pub idx: u32,
    #[serde(skip)]
    pub is_private: bool,
}

impl Named {
    pub fn new(name: impl Into<String>, idx: u32) -> Self {
        Self {
            name: name.into(),
            idx,
            is_private: false,
        }
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }
}

macro_rules! index_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub fn as_u32(self) -> u32 {
                self.0
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

index_id!(
    /// Registration index of a function definition.
    FunctionId
);
index_id!(
    /// Identity of one specialization of a function.
    SubFunctionId
);
index_id!(
    /// Registration index of a struct definition.
    StructId
);

/// A function type's referent: the function and the subfunction it is bound to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FunctionRef {
    pub function: FunctionId,
    pub sub: SubFunctionId,
}

impl FunctionRef {
    pub fn new(function: FunctionId, sub: SubFunctionId) -> Self {
        Self { function, sub }
    }
}
