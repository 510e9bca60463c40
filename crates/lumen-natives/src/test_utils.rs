//! Sample natives over `i64` values.

use crate::builtin::Builtin;
use crate::native::NativeDecl;

pub fn add(args: &mut [i64], out: &mut Vec<i64>) {
    out.push(args[0] + args[1]);
}

pub fn neg(args: &mut [i64], out: &mut Vec<i64>) {
    out.push(-args[0]);
}

pub fn divmod(args: &mut [i64], out: &mut Vec<i64>) {
    out.push(args[0] / args[1]);
    out.push(args[0] % args[1]);
}

pub fn clock(_: &mut [i64], out: &mut Vec<i64>) {
    out.push(1_000);
}

pub fn discard(_: &mut [i64], _: &mut Vec<i64>) {}

/// `add(a: int, b: int) -> int`
pub fn add_decl() -> NativeDecl<i64> {
    NativeDecl::new("add", Builtin::new(2, add))
        .ids("a,b")
        .args("II")
        .returns("I")
        .help("Adds two numbers.")
}

/// Wipes the caller's buffer instead of pushing a result.
pub fn clobber(_: &mut [i64], out: &mut Vec<i64>) {
    out.clear();
}
