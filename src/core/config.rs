//! Table geometry and table configuration.
//!
//! Standard Klondike only: the geometry is fixed by constants. What a host may
//! configure is how games are seeded and how their ids are generated.

use serde::{Deserialize, Serialize};

use super::id::{IdSource, ProcessIds, SeededIds};
use super::rng::GameRng;

/// Number of tableau piles.
pub const PILE_COUNT: usize = 7;

/// Number of foundations (one per suit).
pub const FOUNDATION_COUNT: usize = 4;

/// Cards per suit (Ace through King).
pub const RANK_COUNT: usize = 13;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = FOUNDATION_COUNT * RANK_COUNT;

/// Cards dealt onto the tableau (1 + 2 + ... + 7).
pub const TABLEAU_DEAL: usize = PILE_COUNT * (PILE_COUNT + 1) / 2;

/// Value of an Ace.
pub const ACE: u8 = 1;

/// Value of a King.
pub const KING: u8 = 13;

/// Configuration for a table that deals games.
///
/// ```
/// use klondike_ledger::core::TableConfig;
///
/// let config = TableConfig::new().with_seed(7).with_id_prefix("club");
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Seed for the deal stream. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Prefix prepended to generated game ids.
    pub id_prefix: Option<String>,
}

impl TableConfig {
    /// Create a configuration with entropy seeding and unprefixed ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the deal stream for reproducible tables.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Prefix generated game ids.
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into());
        self
    }

    /// Build the table's deal rng.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }

    /// Build the table's id source.
    ///
    /// Seeded tables get reproducible ids; unseeded tables get process-unique ids.
    #[must_use]
    pub fn ids(&self) -> Box<dyn IdSource> {
        match (self.seed, &self.id_prefix) {
            (Some(seed), Some(prefix)) => Box::new(SeededIds::new(&GameRng::new(seed)).with_prefix(prefix.clone())),
            (Some(seed), None) => Box::new(SeededIds::new(&GameRng::new(seed))),
            (None, Some(prefix)) => Box::new(ProcessIds::with_prefix(prefix.clone())),
            (None, None) => Box::new(ProcessIds::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(DECK_SIZE, 52);
        assert_eq!(TABLEAU_DEAL, 28);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = TableConfig::new().with_seed(11);

        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.next_u64(), b.next_u64());

        let mut ids_a = config.ids();
        let mut ids_b = config.ids();
        assert_eq!(ids_a.next_id(), ids_b.next_id());
    }

    #[test]
    fn test_prefix_applies() {
        let mut ids = TableConfig::new().with_id_prefix("club").ids();
        assert!(ids.next_id().as_str().starts_with("club-"));

        let mut ids = TableConfig::new().with_seed(1).with_id_prefix("club").ids();
        assert!(ids.next_id().as_str().starts_with("club-"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TableConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config, TableConfig::new().with_seed(3));

        let config: TableConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TableConfig::new());
    }
}
