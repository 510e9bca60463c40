//! Host callables behind native functions.

use std::fmt;

use crate::error::CallError;
use crate::invariants;

/// Largest number of arguments a native may take.
pub const MAX_ARITY: usize = 6;

/// The one signature shared by all host callables.
///
/// `args` holds exactly the declared number of arguments; results are pushed
/// onto `out`.
pub type NativeFn<V> = fn(args: &mut [V], out: &mut Vec<V>);

/// A host callable together with the arity it was written for.
pub struct Builtin<V> {
    arity: u8,
    fun: NativeFn<V>,
}

impl<V> Builtin<V> {
    /// # Panics
    /// Panics if `arity` exceeds [`MAX_ARITY`].
    pub fn new(arity: usize, fun: NativeFn<V>) -> Self {
        if arity > MAX_ARITY {
            invariants::arity_out_of_range(arity);
        }
        Self {
            arity: arity as u8,
            fun,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arity as usize
    }

    /// Run the callable after checking the argument count.
    pub fn invoke(&self, args: &mut [V], out: &mut Vec<V>) -> Result<(), CallError> {
        if args.len() != self.arity() {
            return Err(CallError::ArgCount {
                expected: self.arity(),
                found: args.len(),
            });
        }
        (self.fun)(args, out);
        Ok(())
    }
}

impl<V> Clone for Builtin<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Builtin<V> {}

impl<V> fmt::Debug for Builtin<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("arity", &self.arity)
            .field("fun", &(self.fun as *const ()))
            .finish()
    }
}
