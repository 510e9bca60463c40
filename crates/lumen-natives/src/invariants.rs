//! Invariant checks excluded from coverage reports.
//!
//! Everything here is an authoring bug in a native declaration compiled into
//! the program, never a condition reachable from user input.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::error::RegistryError;
use crate::native::{NativeFun, NativeId};
use crate::registry::Registry;

pub(crate) fn unknown_base_type(sig: &str, c: u8) -> ! {
    panic!(
        "Signature: unknown base type `{}` in \"{sig}\" (expected one of I F S V C R A)",
        c as char
    )
}

pub(crate) fn unknown_modifier(sig: &str, c: u8) -> ! {
    panic!(
        "Signature: unknown modifier `{}` in \"{sig}\" (expected one of ] ? 1 * @ % :)",
        c as char
    )
}

pub(crate) fn bad_fixed_len(sig: &str) -> ! {
    panic!("Signature: `:` must be followed by a digit in '/'..='9' in \"{sig}\"")
}

pub(crate) fn signature_exhausted(sig: &str) -> ! {
    panic!("Signature: ran out of types in \"{sig}\"")
}

pub(crate) fn idlist_too_short(idlist: &str, i: usize) -> ! {
    panic!(
        "ParameterList: no name for argument {i} in \"{idlist}\" \
         (not enough names in the comma separated list)"
    )
}

pub(crate) fn arg_count_mismatch(name: &str, sig: &str, found: usize, arity: usize) -> ! {
    panic!(
        "NativeFun `{name}`: signature \"{sig}\" declares {found} arguments \
         but the callable takes {arity}"
    )
}

pub(crate) fn arity_out_of_range(arity: usize) -> ! {
    panic!(
        "Builtin: arity {arity} exceeds the maximum of {}",
        crate::builtin::MAX_ARITY
    )
}

pub(crate) fn continuation_arity(arity: usize) -> ! {
    panic!("NativeDecl: continuation must take exactly 1 argument, got {arity}")
}

pub(crate) fn name_clash(err: &RegistryError) -> ! {
    panic!("{err}")
}

impl<V> Registry<V> {
    pub(crate) fn ensure_native(&self, id: NativeId) -> &NativeFun<V> {
        self.try_get(id).unwrap_or_else(|| {
            panic!(
                "Registry: native id {} not found ({} natives registered)",
                id.as_u32(),
                self.len()
            )
        })
    }
}
