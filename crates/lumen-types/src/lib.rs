#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Static type representation for the Lumen front end.
//!
//! - [`Type`]: immutable tagged value with structural equality, shape-only
//!   equality and the multi-dispatch order
//! - [`TypeHandle`]: copyable, never-empty handle compared by value
//! - [`TypeArena`]: process-lifetime storage for wrapped types built at startup
//! - [`Named`] and the index identities types refer to

mod arena;
mod handle;
mod invariants;
mod kind;
mod named;
mod ty;


pub use arena::TypeArena;
pub use handle::TypeHandle;
pub use kind::TypeKind;
pub use named::{FunctionId, FunctionRef, Named, StructId, SubFunctionId};
pub use ty::Type;
