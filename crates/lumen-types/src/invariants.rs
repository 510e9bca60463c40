//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::kind::TypeKind;
use crate::ty::Type;

pub(crate) fn element_of_unwrapped(ty: &Type) -> ! {
    panic!("Type: element() called on unwrapped type `{ty}`")
}

pub(crate) fn not_a_wrapper(kind: TypeKind) -> ! {
    panic!(
        "TypeArena: cannot wrap with kind `{}` (expected vector, nilable or var)",
        kind.name()
    )
}
