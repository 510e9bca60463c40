use crate::builtin::{Builtin, MAX_ARITY};
use crate::error::CallError;
use crate::test_utils::{add, clock, discard};

#[test]
fn invoke_pushes_results() {
    let fun = Builtin::new(2, add);
    let mut out = Vec::new();

    fun.invoke(&mut [2, 3], &mut out).unwrap();

    assert_eq!(fun.arity(), 2);
    assert_eq!(out, [5]);
}

#[test]
fn invoke_appends_to_existing_output() {
    let fun = Builtin::new(0, clock);
    let mut out = vec![7];

    fun.invoke(&mut [], &mut out).unwrap();

    assert_eq!(out, [7, 1_000]);
}

#[test]
fn invoke_rejects_wrong_arg_count() {
    let fun = Builtin::new(2, add);
    let mut out = Vec::new();

    let err = fun.invoke(&mut [1], &mut out).unwrap_err();

    assert_eq!(
        err,
        CallError::ArgCount {
            expected: 2,
            found: 1
        }
    );
    assert!(out.is_empty());
    assert_eq!(err.to_string(), "expected 2 arguments, got 1");
}

#[test]
fn max_arity_is_accepted() {
    let fun: Builtin<i64> = Builtin::new(MAX_ARITY, discard);

    assert_eq!(fun.arity(), 6);
}

#[test]
#[should_panic(expected = "arity 7 exceeds the maximum of 6")]
fn arity_above_max_panics() {
    Builtin::<i64>::new(7, discard);
}

#[test]
fn builtin_is_copy() {
    let a = Builtin::new(2, add);
    let b = a;
    let mut out = Vec::new();

    a.invoke(&mut [1, 1], &mut out).unwrap();
    b.invoke(&mut [2, 2], &mut out).unwrap();

    assert_eq!(out, [2, 4]);
}
