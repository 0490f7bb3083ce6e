#![forbid(unsafe_code)]

//! Self-describing dynamic values for the MVX runtime.
//!
//! [`Value`] is a discriminated union carrying one of seven kinds: Null,
//! Bool, Int, Double, String, Sequence, Map. Sequences and maps nest
//! recursively, so a single `Value` can describe an arbitrary tree of
//! dynamically-typed data crossing the runtime boundary.
//!
//! # Design
//!
//! The payload lives directly in the enum variant, so kind/payload
//! consistency, recursive destruction, deep copy, and move semantics are
//! all enforced by ownership rather than by hand-written lifetime helpers.
//! `Value::default()` is `Null`, which makes [`std::mem::take`] the
//! canonical O(1) move: the source is left `Null`, the payload transfers.
//!
//! # Invariants
//!
//! 1. The active variant and [`Value::kind`] always agree; there is no
//!    other payload state to drift out of sync.
//! 2. `clone()` deep-copies String/Sequence/Map payloads recursively.
//! 3. Typed accessors never substitute a default on a kind mismatch; they
//!    return [`TypeMismatch`] in every build configuration.
//! 4. Container operations never coalesce a mismatched kind into an empty
//!    container; the previous payload is never silently discarded.
//!
//! # Failure Modes
//!
//! - **Kind mismatch**: every fallible operation reports the expected and
//!   actual kinds; the value itself is left untouched.
//! - **Deep graphs**: `clone()` and drop recurse over the value tree; depth
//!   is bounded only by the caller's data.

pub mod error;
pub mod value;

pub use error::TypeMismatch;
pub use value::{Kind, Value};
