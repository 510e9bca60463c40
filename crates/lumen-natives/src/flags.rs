//! Per-parameter flags set by signature modifiers.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A small set of parameter flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArgFlags(u8);

impl ArgFlags {
    pub const NONE: Self = Self(0);
    /// `@` - argument must be an explicit function value.
    pub const EXPLICIT_FUNCTION_VALUE: Self = Self(1 << 0);
    pub const OPTIONAL: Self = Self(1 << 1);
    /// Parameter was typed generically and accepts any type.
    pub const ANY_TYPE: Self = Self(1 << 2);
    /// `1` - result type is the type of argument 1.
    pub const SUB_ARG1: Self = Self(1 << 3);
    /// `*` - accepts any var/placeholder type.
    pub const ANY_VAR: Self = Self(1 << 4);
    /// `%` - argument resumes a coroutine.
    pub const CORESUME: Self = Self(1 << 5);

    const NAMES: [(Self, &'static str); 6] = [
        (Self::EXPLICIT_FUNCTION_VALUE, "EXPLICIT_FUNCTION_VALUE"),
        (Self::OPTIONAL, "OPTIONAL"),
        (Self::ANY_TYPE, "ANY_TYPE"),
        (Self::SUB_ARG1, "SUB_ARG1"),
        (Self::ANY_VAR, "ANY_VAR"),
        (Self::CORESUME, "CORESUME"),
    ];

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for ArgFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ArgFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Debug for ArgFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
