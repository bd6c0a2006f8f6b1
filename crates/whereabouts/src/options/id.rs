use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact, serializable identifier for a display-options string.
///
/// `OptionsId` wraps a 64-bit FNV-1a hash of the raw options string. This
/// provides:
/// - **Stability**: Same string always produces the same hash
/// - **Compactness**: 8 bytes, implements `Copy`, stack-allocated
/// - **Const construction**: `from_options()` is a `const fn`
///
/// Since equal options strings always parse to structurally equal trees, the
/// id doubles as a cache key for parse-once / evaluate-many hosts.
///
/// # Example
///
/// ```
/// use whereabouts::OptionsId;
///
/// // Create at compile time
/// const DEFAULT_ID: OptionsId = OptionsId::from_options("zone, place");
///
/// // Create at runtime
/// let id = OptionsId::from_options("zone, place");
/// assert_eq!(id, DEFAULT_ID);
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct OptionsId(u64);

impl OptionsId {
    /// Create an id from a raw options string at compile time.
    pub const fn from_options(raw: &str) -> Self {
        Self(fnv1a_hash_str_64(raw))
    }

    /// Get the raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OptionsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OptionsId({:016x})", self.0)
    }
}
