//! Compact signature strings.
//!
//! A signature is a sequence of entries, one per parameter. Each entry is one
//! base-type letter followed by zero or more modifiers:
//!
//! | char | meaning                                              |
//! |------|------------------------------------------------------|
//! | `I`  | int                                                  |
//! | `F`  | float                                                |
//! | `S`  | string                                               |
//! | `V`  | vector of any (deprecated, use `A]`)                 |
//! | `C`  | nullable function                                    |
//! | `R`  | coroutine                                            |
//! | `A`  | any                                                  |
//! | `]`  | wrap the current type in a vector                    |
//! | `?`  | wrap the current type in a nilable                   |
//! | `1`  | result has the type of argument 1                    |
//! | `*`  | accepts any var type                                 |
//! | `@`  | explicit function value                              |
//! | `%`  | coroutine resume                                     |
//! | `:N` | fixed length `N` (`/` gives -1)                      |
//!
//! Modifiers apply left to right to the result of the previous step, so
//! `I]?` is `[int]?`. A lowercase base letter is a deprecated spelling of an
//! extra trailing `?`.

use lumen_types::{TypeArena, TypeHandle};

use crate::flags::ArgFlags;
use crate::invariants;

/// One parsed signature entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedType {
    pub ty: TypeHandle,
    pub flags: ArgFlags,
    pub fixed_len: Option<i8>,
}

/// Cursor over a signature string, consumed one entry at a time.
#[derive(Clone, Debug)]
pub struct Signature<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Signature<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Number of entries in a signature string (its alphabetic characters).
    pub fn count_types(src: &str) -> usize {
        src.bytes().filter(u8::is_ascii_alphabetic).count()
    }

    pub fn source(&self) -> &'a str {
        self.src
    }

    /// The unconsumed tail of the signature.
    pub fn remaining(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Parse the next entry, allocating wrapped types in `arena`.
    ///
    /// Returns `None` once the signature is exhausted.
    ///
    /// # Panics
    /// Panics on an unknown base letter or modifier, or a `:` not followed by
    /// a digit in `'/'..='9'`.
    pub fn next_type(&mut self, arena: &mut TypeArena) -> Option<ParsedType> {
        let bytes = self.src.as_bytes();
        let &c = bytes.get(self.pos)?;
        self.pos += 1;

        let optional = c.is_ascii_lowercase();
        let mut ty = match c.to_ascii_uppercase() {
            b'I' => TypeHandle::int(),
            b'F' => TypeHandle::float(),
            b'S' => TypeHandle::string(),
            b'V' => TypeHandle::vector_any(),
            b'C' => TypeHandle::function_null(),
            b'R' => TypeHandle::coroutine(),
            b'A' => TypeHandle::any(),
            _ => invariants::unknown_base_type(self.src, c),
        };
        let mut flags = ArgFlags::NONE;
        let mut fixed_len = None;

        while let Some(&m) = bytes.get(self.pos) {
            if m.is_ascii_alphabetic() {
                break;
            }
            self.pos += 1;
            match m {
                b'1' => flags |= ArgFlags::SUB_ARG1,
                b'*' => flags |= ArgFlags::ANY_VAR,
                b'@' => flags |= ArgFlags::EXPLICIT_FUNCTION_VALUE,
                b'%' => flags |= ArgFlags::CORESUME,
                b']' => ty = arena.vector_of(ty),
                b'?' => ty = arena.nilable_of(ty),
                b':' => {
                    let digit = bytes
                        .get(self.pos)
                        .copied()
                        .filter(|d| (b'/'..=b'9').contains(d))
                        .unwrap_or_else(|| invariants::bad_fixed_len(self.src));
                    self.pos += 1;
                    fixed_len = Some(digit as i8 - b'0' as i8);
                }
                _ => invariants::unknown_modifier(self.src, m),
            }
        }

        if optional {
            ty = arena.nilable_of(ty);
        }

        Some(ParsedType {
            ty,
            flags,
            fixed_len,
        })
    }
}
