#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Native-function registry for the Lumen front end.
//!
//! Host-implemented functions are declared with compact signature strings
//! (see [`signature`]), turned into [`NativeFun`] descriptors, and collected
//! into a [`Registry`] during startup:
//! - `signature` - parser for signature strings
//! - `param`, `param_list` - typed parameters and their names
//! - `builtin` - the host callable abstraction
//! - `native` - declarations and descriptors
//! - `registry` - the startup builder and the finished catalog
//! - `startup` - deferred registration list
//! - `dump` - function reference text

mod builtin;
mod config;
mod dump;
mod error;
mod flags;
mod invariants;
mod native;
mod param;
mod param_list;
mod registry;
pub mod signature;
mod startup;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(test)]
mod builtin_tests;
#[cfg(test)]
mod registry_tests;

pub use builtin::{Builtin, MAX_ARITY, NativeFn};
pub use config::{ClashPolicy, RegistryConfig};
pub use dump::dump;
pub use error::{CallError, ClashKind, RegistryError, StartupError};
pub use flags::ArgFlags;
pub use native::{CallMode, NativeDecl, NativeFun, NativeId, SubsystemId};
pub use param::Parameter;
pub use param_list::ParameterList;
pub use registry::{Overloads, Registry, RegistryBuilder};
pub use signature::{ParsedType, Signature};
pub use startup::{RegisterFn, StartupEntry, StartupList};
