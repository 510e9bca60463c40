use lumen_types::TypeHandle;

use crate::builtin::Builtin;
use crate::config::{ClashPolicy, RegistryConfig};
use crate::error::{ClashKind, RegistryError};
use crate::native::{CallMode, NativeDecl, NativeId, SubsystemId};
use crate::registry::RegistryBuilder;
use crate::test_utils::{add, add_decl, clock, discard, divmod, neg};

fn add_float() -> NativeDecl<i64> {
    NativeDecl::new("add", Builtin::new(2, add))
        .ids("x,y")
        .args("FF")
        .returns("F")
}

#[test]
fn first_registration_is_head() {
    let mut builder = RegistryBuilder::new();
    let math = builder.declare_subsystem("math");
    let id = builder.register(add_decl()).unwrap();
    let registry = builder.finish();

    let native = registry.find_by_name("add").unwrap();

    assert_eq!(id, NativeId::from_raw(0));
    assert_eq!(native.id(), id);
    assert_eq!(native.subsystem(), Some(math));
    assert_eq!(native.args().get(0).unwrap().ty, TypeHandle::int());
    assert_eq!(native.args().get(1).unwrap().ty, TypeHandle::int());
    assert_eq!(native.returns().get(0).unwrap().ty, TypeHandle::int());
    assert_eq!(native.overloads(), None);
    assert_eq!(native.first(), id);
}

#[test]
fn overload_chains_behind_head() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    let a = builder.register(add_decl()).unwrap();
    let b = builder.register(add_float()).unwrap();
    let registry = builder.finish();

    let head = registry.find_by_name("add").unwrap();
    let second = registry.get(b);

    assert_eq!(head.id(), a);
    assert_eq!(head.overloads(), Some(b));
    assert_eq!(second.first(), a);
    assert_eq!(second.overloads(), None);
    assert!(!second.is_head());
    assert_eq!(registry.head_of(second).id(), a);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names().collect::<Vec<_>>(), ["add"]);
}

#[test]
fn newest_overload_follows_head() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();
    builder.register(add_float()).unwrap();
    builder
        .register(
            NativeDecl::new("add", Builtin::new(2, add))
                .ids("s,t")
                .args("SS")
                .returns("S"),
        )
        .unwrap();
    let registry = builder.finish();

    let chain: Vec<u32> = registry.overloads("add").map(|n| n.id().as_u32()).collect();
    let firsts: Vec<u32> = registry
        .overloads("add")
        .map(|n| n.first().as_u32())
        .collect();
    let arg_types: Vec<String> = registry
        .overloads("add")
        .map(|n| n.args().get(0).unwrap().ty.to_string())
        .collect();

    assert_eq!(chain, [0, 2, 1]);
    assert_eq!(firsts, [0, 0, 0]);
    assert_eq!(arg_types, ["int", "string", "float"]);
}

#[test]
fn chain_from_overload() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();
    builder.register(add_float()).unwrap();
    let registry = builder.finish();

    let second = registry.get(NativeId::from_raw(1));

    assert_eq!(registry.chain_from(second).count(), 1);
    assert_eq!(registry.overloads("missing").count(), 0);
}

#[test]
fn arg_count_clash() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();

    let err = builder
        .register(
            NativeDecl::new("add", Builtin::new(1, neg))
                .ids("a")
                .args("I")
                .returns("I"),
        )
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::NameClash {
            name: "add".to_owned(),
            kind: ClashKind::ArgCount {
                expected: 2,
                found: 1
            },
        }
    );
    assert_eq!(
        err.to_string(),
        "native library name clash: add (expected 2 arguments, found 1)"
    );
    assert_eq!(err.name(), "add");
}

#[test]
fn failed_registration_keeps_registry_unchanged() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();

    let types_before = builder.types_mut().len();

    let clash = NativeDecl::new("add", Builtin::new(2, divmod))
        .ids("a,b")
        .args("I]I]?")
        .returns("I]I]");
    assert!(builder.register(clash).is_err());
    assert_eq!(builder.types_mut().len(), types_before);
    let next = builder
        .register(NativeDecl::new("clock", Builtin::new(0, clock)).returns("I"))
        .unwrap();
    let registry = builder.finish();

    assert_eq!(next, NativeId::from_raw(1));
    assert_eq!(registry.find_by_name("add").unwrap().overloads(), None);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.types().len(), types_before);
}

#[test]
fn return_count_clash() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();

    let err = builder
        .register(
            NativeDecl::new("add", Builtin::new(2, divmod))
                .ids("a,b")
                .args("II")
                .returns("II"),
        )
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "native library name clash: add (expected 1 return values, found 2)"
    );
}

#[test]
fn subsystem_clash() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();
    builder.declare_subsystem("string");

    let err = builder
        .register(
            NativeDecl::new("add", Builtin::new(2, add))
                .ids("a,b")
                .args("SS")
                .returns("S"),
        )
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::NameClash {
            name: "add".to_owned(),
            kind: ClashKind::Subsystem {
                expected: Some(SubsystemId::from_raw(0)),
                found: Some(SubsystemId::from_raw(1)),
            },
        }
    );
    assert_eq!(
        err.to_string(),
        "native library name clash: add (expected subsystem 0, found 1)"
    );
}

#[test]
fn call_mode_clash() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("co");
    builder
        .register(NativeDecl::new("wait", Builtin::new(1, neg)).ids("t").args("I"))
        .unwrap();

    let err = builder
        .register(
            NativeDecl::new("wait", Builtin::new(1, neg))
                .ids("t")
                .args("F")
                .continuation(Builtin::new(1, neg)),
        )
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::NameClash {
            name: "wait".to_owned(),
            kind: ClashKind::CallMode {
                expected: CallMode::Plain,
                found: CallMode::ContinuationExit,
            },
        }
    );
    assert_eq!(
        err.to_string(),
        "native library name clash: wait (expected plain call mode, found continuation-exit)"
    );
}

#[test]
fn arg_count_is_checked_before_return_count() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();

    let err = builder
        .register(NativeDecl::new("add", Builtin::new(0, discard)))
        .unwrap_err();

    assert!(matches!(
        err,
        RegistryError::NameClash {
            kind: ClashKind::ArgCount { .. },
            ..
        }
    ));
}

#[test]
#[should_panic(expected = "native library name clash: add (expected 2 arguments, found 0)")]
fn abort_policy_panics_on_clash() {
    let config = RegistryConfig::new().clash_policy(ClashPolicy::Abort);
    let mut builder = RegistryBuilder::with_config(config);
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();

    let _ = builder.register(NativeDecl::new("add", Builtin::new(0, discard)));
}

#[test]
fn natives_before_any_subsystem_are_global() {
    let mut builder = RegistryBuilder::new();
    builder.register(add_decl()).unwrap();
    let registry = builder.finish();

    assert_eq!(registry.find_by_name("add").unwrap().subsystem(), None);
    assert!(registry.subsystems().is_empty());
}

#[test]
fn require_subsystem_rejects_global_natives() {
    let config = RegistryConfig::new().require_subsystem(true);
    let mut builder = RegistryBuilder::with_config(config);

    let err = builder.register(add_decl()).unwrap_err();

    assert_eq!(
        err,
        RegistryError::NoSubsystem {
            name: "add".to_owned()
        }
    );
    assert!(builder.is_empty());

    builder.declare_subsystem("math");
    assert_eq!(builder.register(add_decl()).unwrap(), NativeId::from_raw(0));
}

#[test]
fn subsystems_tag_natives_in_order() {
    let mut builder = RegistryBuilder::new();
    assert_eq!(builder.current_subsystem(), None);
    let math = builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();
    builder
        .register(NativeDecl::new("neg", Builtin::new(1, neg)).ids("x").args("I").returns("I"))
        .unwrap();
    let time = builder.declare_subsystem("time");
    assert_eq!(builder.current_subsystem(), Some(time));
    builder
        .register(NativeDecl::new("clock", Builtin::new(0, clock)).returns("I"))
        .unwrap();
    let registry = builder.finish();

    let math_names: Vec<&str> = registry.subsystem_natives(math).map(|n| n.name()).collect();
    let time_names: Vec<&str> = registry.subsystem_natives(time).map(|n| n.name()).collect();

    assert_eq!(math_names, ["add", "neg"]);
    assert_eq!(time_names, ["clock"]);
    assert_eq!(registry.subsystem_label(time), Some("time"));
    assert_eq!(registry.subsystem_label(SubsystemId::from_raw(9)), None);
    assert_eq!(registry.subsystems(), ["math", "time"]);
}

#[test]
fn indices_follow_registration_order() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    builder.register(add_decl()).unwrap();
    builder
        .register(NativeDecl::new("neg", Builtin::new(1, neg)).ids("x").args("I").returns("I"))
        .unwrap();
    builder.register(add_float()).unwrap();
    let registry = builder.finish();

    let order: Vec<(u32, &str)> = registry.iter().map(|n| (n.id().as_u32(), n.name())).collect();

    assert_eq!(order, [(0, "add"), (1, "neg"), (2, "add")]);
    assert_eq!(registry.names().collect::<Vec<_>>(), ["add", "neg"]);
}

#[test]
fn registered_native_is_callable() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("math");
    let id = builder.register(add_decl()).unwrap();
    let registry = builder.finish();
    let mut out = Vec::new();

    registry.get(id).call(&mut [40, 2], &mut out).unwrap();

    assert_eq!(out, [42]);
}

#[test]
fn signature_types_are_kept_by_registry() {
    let mut builder = RegistryBuilder::new();
    builder.declare_subsystem("vec");
    builder
        .register(
            NativeDecl::new("first", Builtin::new(1, neg))
                .ids("v")
                .args("I]")
                .returns("i"),
        )
        .unwrap();
    let registry = builder.finish();

    assert_eq!(registry.types().len(), 2);
    let native = registry.find_by_name("first").unwrap();
    assert_eq!(native.signature(), "first(v: [int]) -> int?");
}

#[test]
fn lookup_misses() {
    let registry = RegistryBuilder::<i64>::new().finish();

    assert!(registry.find_by_name("add").is_none());
    assert!(registry.try_get(NativeId::from_raw(0)).is_none());
    assert!(registry.is_empty());
}

#[test]
#[should_panic(expected = "native id 3 not found")]
fn get_with_foreign_id_panics() {
    let registry = RegistryBuilder::<i64>::new().finish();
    registry.get(NativeId::from_raw(3));
}
