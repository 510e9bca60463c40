//! Human-readable function reference generated from the registry.

use std::fmt::Write as _;

use crate::native::{CallMode, NativeFun, SubsystemId};
use crate::registry::Registry;

/// Render every native grouped by subsystem, with signatures and help text.
///
/// Natives registered before the first subsystem are listed under `[global]`.
pub fn dump<V>(registry: &Registry<V>) -> String {
    let mut out = String::new();

    let global: Vec<_> = registry.iter().filter(|n| n.subsystem().is_none()).collect();
    if !global.is_empty() {
        dump_section(&mut out, "global", global);
    }

    for (i, label) in registry.subsystems().iter().enumerate() {
        let natives: Vec<_> = registry
            .subsystem_natives(SubsystemId::from_raw(i as u32))
            .collect();
        dump_section(&mut out, label, natives);
    }

    out
}

fn dump_section<V>(out: &mut String, label: &str, natives: Vec<&NativeFun<V>>) {
    if !out.is_empty() {
        out.push('\n');
    }
    writeln!(out, "[{label}]").unwrap();
    for native in natives {
        out.push_str(&native.signature());
        if native.mode() == CallMode::ContinuationExit {
            out.push_str(" [continuation]");
        }
        if native.is_private() {
            out.push_str(" [private]");
        }
        out.push('\n');
        for line in native.help().lines() {
            writeln!(out, "  {line}").unwrap();
        }
    }
}
