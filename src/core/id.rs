//! Game identifiers and pluggable id generation.
//!
//! Every game gets a `GameId` when it is dealt. The id is the tag the host uses
//! to route events to a game, so it must never repeat within a process.
//!
//! ```
//! use klondike_ledger::core::{IdSource, ProcessIds};
//!
//! let mut ids = ProcessIds::new();
//! let a = ids.next_id();
//! let b = ids.next_id();
//! assert_ne!(a, b);
//! assert_eq!(a.as_str().len(), 36);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Opaque, immutable game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wrap an existing id string (as received from the host).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Source of fresh game ids.
pub trait IdSource {
    /// Produce an id not yet handed out by this source.
    fn next_id(&mut self) -> GameId;
}

/// Format 128 bits in the 8-4-4-4-12 GUID layout.
fn guid(bits: u128, prefix: Option<&str>) -> GameId {
    let body = format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        (bits >> 96) as u32,
        (bits >> 80) as u16,
        (bits >> 64) as u16,
        (bits >> 48) as u16,
        (bits & 0xFFFF_FFFF_FFFF) as u64,
    );
    match prefix {
        Some(p) => GameId(format!("{p}-{body}")),
        None => GameId(body),
    }
}

static PROCESS_COUNTER: AtomicU64 = AtomicU64::new(0);
static PROCESS_NONCE: OnceLock<u64> = OnceLock::new();

/// Process-unique ids: a random per-process nonce plus a shared atomic counter.
///
/// All `ProcessIds` instances draw from the same counter, so two sources in
/// one process can never collide.
#[derive(Clone, Debug, Default)]
pub struct ProcessIds {
    prefix: Option<String>,
}

impl ProcessIds {
    /// Create an unprefixed source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source whose ids start with `prefix-`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: Some(prefix.into()) }
    }
}

impl IdSource for ProcessIds {
    fn next_id(&mut self) -> GameId {
        let nonce = *PROCESS_NONCE.get_or_init(|| GameRng::from_entropy().next_u64());
        let count = PROCESS_COUNTER.fetch_add(1, Ordering::Relaxed);
        guid((u128::from(nonce) << 64) | u128::from(count), self.prefix.as_deref())
    }
}

/// Reproducible ids drawn from a seeded stream, for tests and recorded tables.
///
/// A counter occupies the low bits so one source never repeats itself.
#[derive(Clone, Debug)]
pub struct SeededIds {
    rng: GameRng,
    issued: u64,
    prefix: Option<String>,
}

impl SeededIds {
    /// Create a source drawing from the `"ids"` context of `rng`.
    #[must_use]
    pub fn new(rng: &GameRng) -> Self {
        Self {
            rng: rng.for_context("ids"),
            issued: 0,
            prefix: None,
        }
    }

    /// Prefix every id with `prefix-`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self) -> GameId {
        self.issued += 1;
        let bits = (u128::from(self.rng.next_u64()) << 64) | u128::from(self.issued);
        guid(bits, self.prefix.as_deref())
    }
}

/// Boxed sources forward to the inner source.
impl<S: IdSource + ?Sized> IdSource for Box<S> {
    fn next_id(&mut self) -> GameId {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_guid_layout() {
        let id = guid(u128::MAX, None);
        assert_eq!(id.as_str(), "ffffffff-ffff-ffff-ffff-ffffffffffff");

        let id = guid(1, Some("table"));
        assert_eq!(id.as_str(), "table-00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_process_ids_unique_across_sources() {
        let mut a = ProcessIds::new();
        let mut b = ProcessIds::new();
        let mut seen = FxHashSet::default();

        for _ in 0..500 {
            assert!(seen.insert(a.next_id()));
            assert!(seen.insert(b.next_id()));
        }
    }

    #[test]
    fn test_process_ids_prefix() {
        let mut ids = ProcessIds::with_prefix("k");
        assert!(ids.next_id().as_str().starts_with("k-"));
    }

    #[test]
    fn test_seeded_ids_reproducible() {
        let rng = GameRng::new(9);
        let mut a = SeededIds::new(&rng);
        let mut b = SeededIds::new(&rng);

        let first: Vec<_> = (0..5).map(|_| a.next_id()).collect();
        let second: Vec<_> = (0..5).map(|_| b.next_id()).collect();
        assert_eq!(first, second);

        let unique: FxHashSet<_> = first.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_game_id_serializes_as_string() {
        let id = GameId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        assert_eq!(id.to_string(), "abc");
    }
}
