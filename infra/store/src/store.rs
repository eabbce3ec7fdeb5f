//! Core store engine: most-specific subset lookup, superset enumeration, and multi-value
//! buckets keyed by exact [`Configuration`].
//!
//! Entries live in a vector in creation order, with a hash index from configuration to
//! position. Lookups scan every entry; rule sets are expected to be small.

use crate::builder::StoreBuilder;
use crate::error::StoreError;
use crate::key::Configuration;
use crate::options::{StoreOptions, TieBreak};
use crate::payload::Payload;
use fxhash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::{debug, trace};

/// A stored configuration together with its bucket of payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    configuration: Configuration,
    bucket: Vec<V>,
}

impl<V> Entry<V> {
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Payloads stored under this exact configuration, in write order. Never empty.
    #[must_use]
    pub fn bucket(&self) -> &[V] {
        &self.bucket
    }

    #[must_use]
    pub fn payload(&self) -> Payload<'_, V> {
        Payload::from_bucket(&self.bucket)
    }

    #[must_use]
    pub fn specificity(&self) -> usize {
        self.configuration.len()
    }
}

/// An associative store keyed by configurations rather than scalars.
///
/// A stored configuration matches a query when it is a subset of the query. [`Store::get`]
/// returns the payload of the most restrictive match, while [`Store::all`] walks the other
/// direction and collects every entry that refines the query.
///
/// Each configuration owns a bucket: [`Store::set`] replaces it, [`Store::append`] grows it.
///
/// The store is not synchronized. Wrap the whole store in a single lock when sharing it
/// across threads; lookups scan every entry and must see a consistent state.
///
/// # Example
/// ```rust
/// use elastag_store::{Payload, Store, configuration};
///
/// let mut store = Store::new();
/// store.set(configuration! { "lang" => "en" }, "en");
/// store.set(configuration! { "lang" => "en", "sector" => "construction" }, "en-construction");
///
/// let query = configuration! { "lang" => "en", "sector" => "retail" };
/// assert_eq!(store.get(&query)?, Payload::Single(&"en"));
/// assert!(store.contains(&query));
/// assert!(!store.contains_key(&query));
///
/// let everything_english = store.all(&configuration! { "lang" => "en" });
/// assert_eq!(everything_english, [&"en", &"en-construction"]);
/// # Ok::<(), elastag_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Store<V> {
    entries: Vec<Entry<V>>,
    index: FxHashMap<Configuration, usize>,
    options: StoreOptions,
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self::with_options(StoreOptions::default())
    }
}

impl<V> Store<V> {
    /// Creates an empty store with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "The store is not created until you call .build()"]
    pub fn builder() -> StoreBuilder<V> {
        StoreBuilder::new()
    }

    #[must_use]
    pub fn with_options(options: StoreOptions) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(options.capacity);
        Self { entries: Vec::with_capacity(options.capacity), index, options }
    }

    #[must_use]
    pub const fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Number of distinct stored configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }

    pub fn configurations(&self) -> impl Iterator<Item = &Configuration> {
        self.entries.iter().map(Entry::configuration)
    }

    /// Removes every entry, keeping the options.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Stores `value` as the only payload of exactly `configuration`.
    ///
    /// An existing bucket is replaced wholesale; the entry keeps its original position in
    /// creation order.
    pub fn set(&mut self, configuration: impl Into<Configuration>, value: V) {
        let configuration = configuration.into();
        trace!(%configuration, "Setting configuration bucket");

        match self.index.get(&configuration).copied() {
            Some(position) => self.entries[position].bucket = vec![value],
            None => {
                self.push_entry(configuration, value);
            },
        }
    }

    /// Appends `value` to the bucket of exactly `configuration`, creating it if absent.
    ///
    /// # Results
    /// Returns the bucket after the write.
    pub fn append(&mut self, configuration: impl Into<Configuration>, value: V) -> &[V] {
        let configuration = configuration.into();
        trace!(%configuration, "Appending to configuration bucket");

        let position = match self.index.get(&configuration).copied() {
            Some(position) => {
                self.entries[position].bucket.push(value);
                position
            },
            None => self.push_entry(configuration, value),
        };
        &self.entries[position].bucket
    }

    /// Adds `value` to the bucket of exactly `configuration` unless an equal value is
    /// already there, giving the bucket set semantics.
    ///
    /// # Results
    /// Returns the bucket after the write.
    pub fn add(&mut self, configuration: impl Into<Configuration>, value: V) -> &[V]
    where
        V: PartialEq,
    {
        let configuration = configuration.into();
        trace!(%configuration, "Adding to configuration bucket");

        let position = match self.index.get(&configuration).copied() {
            Some(position) => {
                let bucket = &mut self.entries[position].bucket;
                if !bucket.contains(&value) {
                    bucket.push(value);
                }
                position
            },
            None => self.push_entry(configuration, value),
        };
        &self.entries[position].bucket
    }

    /// Returns the bucket stored under exactly `configuration`.
    #[must_use]
    pub fn get_exact(&self, configuration: &Configuration) -> Option<&[V]> {
        self.index.get(configuration).map(|&position| self.entries[position].bucket.as_slice())
    }

    /// Returns `true` if `configuration` itself was stored, not merely a subset of it.
    #[doc(alias = "has_key")]
    #[must_use]
    pub fn contains_key(&self, configuration: &Configuration) -> bool {
        self.index.contains_key(configuration)
    }

    /// Returns `true` if some stored configuration is a subset of `query`, i.e. when
    /// [`Store::get`] would succeed.
    #[doc(alias = "elastic_contains")]
    #[must_use]
    pub fn contains(&self, query: &Configuration) -> bool {
        self.entries.iter().any(|entry| entry.configuration.is_subset(query))
    }

    /// Returns the entry with the most restrictive configuration that is a subset of `query`.
    ///
    /// Matches with the same number of pairs are settled by [`StoreOptions::tie_break`].
    #[must_use]
    pub fn best_match(&self, query: &Configuration) -> Option<&Entry<V>> {
        let mut best: Option<&Entry<V>> = None;

        for entry in self.entries.iter().filter(|entry| entry.configuration.is_subset(query)) {
            // Entries are scanned in creation order, so on equal specificity the policy
            // decides whether the incumbent (first inserted) or the newcomer wins.
            let wins = best.is_none_or(|current| {
                match entry.specificity().cmp(&current.specificity()) {
                    Ordering::Greater => true,
                    Ordering::Equal => self.options.tie_break == TieBreak::LastInserted,
                    Ordering::Less => false,
                }
            });
            if wins {
                best = Some(entry);
            }
        }

        best
    }

    /// Resolves `query` to the payload of its most restrictive subset match.
    ///
    /// A configuration that requires an attribute the query lacks never matches, no matter
    /// how many other attributes it shares with the query.
    ///
    /// # Results
    /// Returns [`Payload::Single`] for a one-value bucket, [`Payload::Multiple`] otherwise.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no stored configuration is a subset of `query`.
    pub fn get(&self, query: &Configuration) -> Result<Payload<'_, V>, StoreError> {
        let Some(entry) = self.best_match(query) else {
            debug!(%query, "No stored configuration covers the query");
            return Err(StoreError::not_found(query));
        };

        trace!(%query, matched = %entry.configuration, "Resolved configuration");
        Ok(entry.payload())
    }

    /// Returns every entry whose configuration is a superset of `query`, least specific
    /// first. Entries of equal specificity keep their creation order.
    #[must_use]
    pub fn all_entries(&self, query: &Configuration) -> Vec<&Entry<V>> {
        let mut matches: Vec<&Entry<V>> =
            self.entries.iter().filter(|entry| entry.configuration.is_superset(query)).collect();
        matches.sort_by_key(|entry| entry.specificity());
        matches
    }

    /// Collects the payloads of every refinement of `query`, flattening buckets in place.
    ///
    /// Pass the empty configuration to list the whole store. An empty result is not an error.
    #[must_use]
    pub fn all(&self, query: &Configuration) -> Vec<&V> {
        self.all_entries(query).into_iter().flat_map(|entry| entry.bucket.iter()).collect()
    }

    /// Like [`Store::all`], with duplicate values removed. The first occurrence is kept.
    #[must_use]
    pub fn bag(&self, query: &Configuration) -> Vec<&V>
    where
        V: Eq + Hash,
    {
        let mut seen = FxHashSet::default();
        self.all(query).into_iter().filter(|value| seen.insert(*value)).collect()
    }

    fn push_entry(&mut self, configuration: Configuration, value: V) -> usize {
        let position = self.entries.len();
        self.index.insert(configuration.clone(), position);
        self.entries.push(Entry { configuration, bucket: vec![value] });
        position
    }
}

impl<'a, V> IntoIterator for &'a Store<V> {
    type Item = &'a Entry<V>;
    type IntoIter = std::slice::Iter<'a, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<C, V> Extend<(C, V)> for Store<V>
where
    C: Into<Configuration>,
{
    fn extend<I: IntoIterator<Item = (C, V)>>(&mut self, iter: I) {
        for (configuration, value) in iter {
            self.set(configuration, value);
        }
    }
}

impl<C, V> FromIterator<(C, V)> for Store<V>
where
    C: Into<Configuration>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration;

    fn languages() -> Store<&'static str> {
        let mut store = Store::new();
        store.set(configuration! { "lang" => "es" }, "es");
        store.set(configuration! { "lang" => "en" }, "en");
        store.set(configuration! { "lang" => "en", "sector" => "construction" }, "en-construction");
        store
    }

    #[test]
    fn set_replaces_bucket_in_place() {
        let mut store = languages();
        store.append(configuration! { "lang" => "es" }, "es-2");
        store.set(configuration! { "lang" => "es" }, "es-3");

        assert_eq!(store.get_exact(&configuration! { "lang" => "es" }), Some(&["es-3"][..]));
        assert_eq!(store.len(), 3);
        assert_eq!(store.configurations().next(), Some(&configuration! { "lang" => "es" }));
    }

    #[test]
    fn append_returns_the_grown_bucket() {
        let mut store = Store::new();

        assert_eq!(store.append(configuration! { "lang" => "en" }, 1), &[1]);
        assert_eq!(store.append(configuration! { "lang" => "en" }, 2), &[1, 2]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_ignores_values_already_present() {
        let mut store = Store::new();
        store.add(configuration! { "lang" => "es" }, "es1");
        store.add(configuration! { "lang" => "es" }, "es1");

        assert_eq!(store.add(configuration! { "lang" => "es" }, "es2"), &["es1", "es2"]);
    }

    #[test]
    fn best_match_prefers_more_pairs() {
        let store = languages();
        let query = configuration! { "lang" => "en", "sector" => "construction", "size" => "xl" };

        let entry = store.best_match(&query).expect("a match");
        assert_eq!(entry.configuration(), &configuration! { "lang" => "en", "sector" => "construction" });
        assert_eq!(entry.specificity(), 2);
    }

    #[test]
    fn incomparable_ties_follow_the_policy() {
        let rules = [
            (configuration! { "lang" => "en", "sector" => "construction" }, "by-sector"),
            (configuration! { "lang" => "en", "company" => "comp" }, "by-company"),
        ];
        let query = configuration! { "lang" => "en", "sector" => "construction", "company" => "comp" };

        let first: Store<_> = rules.clone().into_iter().collect();
        assert_eq!(first.get(&query).unwrap(), Payload::Single(&"by-sector"));

        let mut last: Store<&str> = Store::builder().tie_break(TieBreak::LastInserted).build();
        last.extend(rules);
        assert_eq!(last.get(&query).unwrap(), Payload::Single(&"by-company"));
    }

    #[test]
    fn empty_configuration_is_the_fallback() {
        let mut store = languages();
        store.set(Configuration::new(), "default");

        assert_eq!(store.get(&configuration! { "lang" => "ca" }).unwrap(), Payload::Single(&"default"));
        assert_eq!(store.all(&Configuration::new()).first(), Some(&&"default"));
    }

    #[test]
    fn get_on_empty_store_is_not_found() {
        let store: Store<u8> = Store::new();

        assert!(store.get(&Configuration::new()).unwrap_err().is_not_found());
        assert!(!store.contains(&Configuration::new()));
    }

    #[test]
    fn all_orders_by_specificity_then_creation() {
        let mut store = Store::new();
        store.set(configuration! { "lang" => "en", "sector" => "retail" }, "en-retail");
        store.set(configuration! { "lang" => "en", "company" => "comp" }, "en-comp");
        store.set(configuration! { "lang" => "en" }, "en");

        assert_eq!(
            store.all(&configuration! { "lang" => "en" }),
            [&"en", &"en-retail", &"en-comp"]
        );
    }

    #[test]
    fn bag_keeps_first_occurrence() {
        let mut store = Store::new();
        store.append(configuration! { "lang" => "en" }, "x");
        store.append(configuration! { "lang" => "en" }, "y");
        store.append(configuration! { "lang" => "en", "sector" => "retail" }, "x");

        assert_eq!(store.bag(&Configuration::new()), [&"x", &"y"]);
        assert_eq!(store.all(&Configuration::new()).len(), 3);
    }

    #[test]
    fn clear_drops_entries_but_keeps_options() {
        let mut store: Store<u8> = Store::builder().tie_break(TieBreak::LastInserted).build();
        store.set(configuration! { "lang" => "en" }, 1);
        store.clear();

        assert!(store.is_empty());
        assert!(!store.contains_key(&configuration! { "lang" => "en" }));
        assert_eq!(store.options().tie_break, TieBreak::LastInserted);
    }
}
