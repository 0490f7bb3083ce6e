#![forbid(unsafe_code)]

//! The [`Value`] sum type and its accessors.

use std::collections::BTreeMap;

use crate::error::TypeMismatch;

/// The seven kinds a [`Value`] can hold.
///
/// Reported by [`Value::kind`] and carried inside [`TypeMismatch`] errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No payload.
    Null,
    /// Boolean scalar.
    Bool,
    /// 64-bit signed integer scalar.
    Int,
    /// 64-bit float scalar.
    Double,
    /// Owned UTF-8 string.
    String,
    /// Ordered sequence of values.
    Sequence,
    /// Key-ordered map of string to value.
    Map,
}

impl Kind {
    /// Stable human-readable name, used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Double => "Double",
            Self::String => "String",
            Self::Sequence => "Sequence",
            Self::Map => "Map",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared Null returned by total read accessors for absent entries.
static NULL: Value = Value::Null;

/// A self-describing dynamic value.
///
/// The active variant *is* the kind; heap-backed payloads (String,
/// Sequence, Map) are exclusively owned by the value. `clone()` deep-copies
/// the whole tree; moving transfers ownership, and [`Value::take`] leaves
/// the source `Null`.
///
/// Equality is structural. `Double` follows `f64` semantics (`NaN != NaN`).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// The absent value. This is also `Value::default()`.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// 64-bit signed integer scalar.
    Int(i64),
    /// 64-bit float scalar.
    Double(f64),
    /// Owned UTF-8 string.
    String(String),
    /// Owned ordered sequence of values.
    Sequence(Vec<Value>),
    /// Owned map of string keys to values. Keys are unique; iteration order
    /// is key order, which keeps snapshots deterministic.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// The kind of the active payload.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Double(_) => Kind::Double,
            Self::String(_) => Kind::String,
            Self::Sequence(_) => Kind::Sequence,
            Self::Map(_) => Kind::Map,
        }
    }

    /// Move the payload out, leaving `Null` behind. O(1).
    #[must_use]
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    // ── Kind predicates ─────────────────────────────────────────────────

    /// True if the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True if the value holds a boolean.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// True if the value holds an integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// True if the value holds a double.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Self::Double(_))
    }

    /// True if the value holds a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// True if the value holds a sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// True if the value holds a map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    // ── Typed accessors ─────────────────────────────────────────────────

    /// The boolean payload.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Bool`.
    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(TypeMismatch::new(Kind::Bool, other.kind())),
        }
    }

    /// The integer payload.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Int`.
    pub fn as_int(&self) -> Result<i64, TypeMismatch> {
        match self {
            Self::Int(n) => Ok(*n),
            other => Err(TypeMismatch::new(Kind::Int, other.kind())),
        }
    }

    /// The double payload.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Double`.
    pub fn as_double(&self) -> Result<f64, TypeMismatch> {
        match self {
            Self::Double(x) => Ok(*x),
            other => Err(TypeMismatch::new(Kind::Double, other.kind())),
        }
    }

    /// The string payload.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `String`.
    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(TypeMismatch::new(Kind::String, other.kind())),
        }
    }

    /// The sequence payload as a slice.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Sequence`.
    pub fn as_sequence(&self) -> Result<&[Value], TypeMismatch> {
        match self {
            Self::Sequence(items) => Ok(items),
            other => Err(TypeMismatch::new(Kind::Sequence, other.kind())),
        }
    }

    /// The map payload.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Map`.
    pub fn as_map(&self) -> Result<&BTreeMap<String, Value>, TypeMismatch> {
        match self {
            Self::Map(entries) => Ok(entries),
            other => Err(TypeMismatch::new(Kind::Map, other.kind())),
        }
    }

    // ── Sequence operations ─────────────────────────────────────────────

    /// Append a value to the sequence.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Sequence`. A mismatched value
    /// is never coalesced into an empty sequence; start from
    /// `Value::from(Vec::new())` to build one explicitly.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), TypeMismatch> {
        self.sequence_mut()?.push(value.into());
        Ok(())
    }

    /// Mutable access to the element at `index`.
    ///
    /// An index beyond the current length extends the sequence with `Null`
    /// elements up to and including `index`, and the reference to the newly
    /// `Null` element is returned.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Sequence`.
    pub fn at(&mut self, index: usize) -> Result<&mut Value, TypeMismatch> {
        let items = self.sequence_mut()?;
        if index >= items.len() {
            items.resize_with(index + 1, Value::default);
        }
        Ok(&mut items[index])
    }

    /// Number of elements in the sequence.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Sequence`.
    pub fn sequence_len(&self) -> Result<usize, TypeMismatch> {
        Ok(self.as_sequence()?.len())
    }

    // ── Map operations ──────────────────────────────────────────────────

    /// Insert or overwrite the entry under `key`.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Map`.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), TypeMismatch> {
        self.map_mut()?.insert(key.into(), value.into());
        Ok(())
    }

    /// The entry under `key`, or a shared `Null` if absent.
    ///
    /// Read access is total for maps: an absent key is indistinguishable
    /// from a stored `Null`, mirroring property-store reads.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Map`.
    pub fn get(&self, key: &str) -> Result<&Value, TypeMismatch> {
        Ok(self.as_map()?.get(key).unwrap_or(&NULL))
    }

    /// True if the map holds an entry under `key`.
    ///
    /// # Errors
    ///
    /// [`TypeMismatch`] if the kind is not `Map`.
    pub fn has(&self, key: &str) -> Result<bool, TypeMismatch> {
        Ok(self.as_map()?.contains_key(key))
    }

    // ── Internal ────────────────────────────────────────────────────────

    fn sequence_mut(&mut self) -> Result<&mut Vec<Value>, TypeMismatch> {
        match self {
            Self::Sequence(items) => Ok(items),
            other => Err(TypeMismatch::new(Kind::Sequence, other.kind())),
        }
    }

    fn map_mut(&mut self) -> Result<&mut BTreeMap<String, Value>, TypeMismatch> {
        match self {
            Self::Map(entries) => Ok(entries),
            other => Err(TypeMismatch::new(Kind::Map, other.kind())),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Double(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}
