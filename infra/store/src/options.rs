use serde::Deserialize;

/// How [`Store::get`](crate::Store::get) settles a tie between equally specific matches.
///
/// Two stored configurations with the same number of pairs that are both subsets of a query
/// are incomparable: neither is more restrictive than the other. Insertion order decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The entry created first wins.
    #[default]
    FirstInserted,
    /// The entry created last wins.
    LastInserted,
}

/// Tuning knobs for a [`Store`](crate::Store).
///
/// Deserializable so it can be loaded from a configuration file; missing fields fall back
/// to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub tie_break: TieBreak,
    /// Number of entries reserved up front.
    pub capacity: usize,
}
