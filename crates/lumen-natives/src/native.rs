//! Native function declarations and descriptors.

use std::fmt::{self, Write as _};

use lumen_types::{Named, TypeArena};

use crate::builtin::Builtin;
use crate::error::CallError;
use crate::invariants;
use crate::param::Parameter;
use crate::param_list::ParameterList;
use crate::signature::Signature;

/// How a native hands control back to the VM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallMode {
    /// Returns directly.
    #[default]
    Plain,
    /// Two-step call: the VM later feeds a value back through the
    /// continuation (coroutine resumption).
    ContinuationExit,
}

impl fmt::Display for CallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::ContinuationExit => f.write_str("continuation-exit"),
        }
    }
}

/// Registration index of a native. Stable for the life of the registry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NativeId(u32);

impl NativeId {
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

/// Index of a subsystem label, in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SubsystemId(u32);

impl SubsystemId {
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

/// Everything a native author writes down for one overload.
///
/// The argument count is the callable's arity; the argument signature must
/// declare exactly that many entries.
pub struct NativeDecl<V> {
    name: String,
    fun: Builtin<V>,
    ids: String,
    args: String,
    rets: String,
    help: String,
    mode: CallMode,
    cont: Option<Builtin<V>>,
    is_private: bool,
}

impl<V> NativeDecl<V> {
    pub fn new(name: impl Into<String>, fun: Builtin<V>) -> Self {
        Self {
            name: name.into(),
            fun,
            ids: String::new(),
            args: String::new(),
            rets: String::new(),
            help: String::new(),
            mode: CallMode::Plain,
            cont: None,
            is_private: false,
        }
    }

    /// Comma separated argument names.
    pub fn ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = ids.into();
        self
    }

    /// Argument signature string.
    pub fn args(mut self, sig: impl Into<String>) -> Self {
        self.args = sig.into();
        self
    }

    /// Return signature string.
    pub fn returns(mut self, sig: impl Into<String>) -> Self {
        self.rets = sig.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Switch to [`CallMode::ContinuationExit`] with `cont` as continuation.
    ///
    /// # Panics
    /// Panics if `cont` does not take exactly one argument.
    pub fn continuation(mut self, cont: Builtin<V>) -> Self {
        if cont.arity() != 1 {
            invariants::continuation_arity(cont.arity());
        }
        self.mode = CallMode::ContinuationExit;
        self.cont = Some(cont);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn arg_count(&self) -> usize {
        self.fun.arity()
    }

    pub(crate) fn return_count(&self) -> usize {
        Signature::count_types(&self.rets)
    }

    pub(crate) fn mode(&self) -> CallMode {
        self.mode
    }
}

/// A registered native overload.
///
/// Immutable once registered, except for the overload links maintained by
/// the registry while later overloads of the same name arrive.
pub struct NativeFun<V> {
    named: Named,
    fun: Builtin<V>,
    args: ParameterList,
    returns: ParameterList,
    mode: CallMode,
    cont: Option<Builtin<V>>,
    help: String,
    subsystem: Option<SubsystemId>,
    pub(crate) overloads: Option<NativeId>,
    pub(crate) first: NativeId,
}

impl<V> NativeFun<V> {
    /// Build the descriptor for `decl`, parsing its signatures into `arena`.
    ///
    /// # Panics
    /// Panics if the argument signature does not declare exactly as many
    /// entries as the callable takes, if the identifier list is shorter than
    /// the argument count, or if a signature is malformed.
    pub(crate) fn new(
        decl: NativeDecl<V>,
        id: NativeId,
        subsystem: Option<SubsystemId>,
        arena: &mut TypeArena,
    ) -> Self {
        let nargs = decl.fun.arity();
        let nrets = Signature::count_types(&decl.rets);
        let declared = Signature::count_types(&decl.args);
        if declared != nargs {
            invariants::arg_count_mismatch(&decl.name, &decl.args, declared, nargs);
        }

        let mut args = ParameterList::with_len(nargs, decl.ids);
        let mut sig = Signature::new(&decl.args);
        for i in 0..nargs {
            // Only checks that the identifier list covers argument `i`.
            let _ = args.name_of(i);
            args.get_mut(i).set(&mut sig, arena);
        }

        let mut returns = ParameterList::default();
        let mut sig = Signature::new(&decl.rets);
        for _ in 0..nrets {
            let mut ret = Parameter::new();
            ret.set(&mut sig, arena);
            returns.push(ret);
        }

        let mut named = Named::new(decl.name, id.as_u32());
        named.is_private = decl.is_private;

        Self {
            named,
            fun: decl.fun,
            args,
            returns,
            mode: decl.mode,
            cont: decl.cont,
            help: decl.help,
            subsystem,
            overloads: None,
            first: id,
        }
    }

    pub fn name(&self) -> &str {
        &self.named.name
    }

    pub fn named(&self) -> &Named {
        &self.named
    }

    pub fn id(&self) -> NativeId {
        NativeId(self.named.idx)
    }

    pub fn is_private(&self) -> bool {
        self.named.is_private
    }

    pub fn args(&self) -> &ParameterList {
        &self.args
    }

    pub fn returns(&self) -> &ParameterList {
        &self.returns
    }

    pub fn mode(&self) -> CallMode {
        self.mode
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn subsystem(&self) -> Option<SubsystemId> {
        self.subsystem
    }

    /// Next overload in the chain.
    pub fn overloads(&self) -> Option<NativeId> {
        self.overloads
    }

    /// Head of the chain this overload belongs to.
    pub fn first(&self) -> NativeId {
        self.first
    }

    pub fn is_head(&self) -> bool {
        self.first == self.id()
    }

    pub fn builtin(&self) -> &Builtin<V> {
        &self.fun
    }

    pub fn continuation(&self) -> Option<&Builtin<V>> {
        self.cont.as_ref()
    }

    /// Call the native, checking the argument count and the number of results
    /// it pushed against the declaration. On a result count mismatch the
    /// pushed results are discarded; entries below the starting length that
    /// the callable removed are not restored.
    pub fn call(&self, args: &mut [V], out: &mut Vec<V>) -> Result<(), CallError> {
        let base = out.len();
        self.fun.invoke(args, out)?;
        // A callable that drops entries it did not push produced nothing.
        let produced = out.len().checked_sub(base).unwrap_or(0);
        if out.len() < base || produced != self.returns.len() {
            out.truncate(base);
            return Err(CallError::ReturnCount {
                expected: self.returns.len(),
                found: produced,
            });
        }
        Ok(())
    }

    /// Feed `value` to the continuation of a `ContinuationExit` native.
    pub fn resume(&self, value: V, out: &mut Vec<V>) -> Result<(), CallError> {
        let cont = self.cont.as_ref().ok_or(CallError::NoContinuation)?;
        cont.invoke(&mut [value], out)
    }

    /// `name(a: int, b: [int]?) -> int`
    pub fn signature(&self) -> String {
        let mut out = String::new();
        out.push_str(self.name());
        out.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write!(out, "{}: {}", self.args.name_of(i), arg.ty).unwrap();
        }
        out.push(')');
        for (i, ret) in self.returns.iter().enumerate() {
            out.push_str(if i == 0 { " -> " } else { ", " });
            write!(out, "{}", ret.ty).unwrap();
        }
        out
    }
}

impl<V> fmt::Debug for NativeFun<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFun")
            .field("named", &self.named)
            .field("args", &self.args)
            .field("returns", &self.returns)
            .field("mode", &self.mode)
            .field("subsystem", &self.subsystem)
            .field("overloads", &self.overloads)
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}
