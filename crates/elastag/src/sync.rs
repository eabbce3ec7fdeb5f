//! A [`Store`] behind one lock, for sharing across threads.

use elastag_store::{Configuration, Store, StoreError, StoreOptions};
use parking_lot::RwLock;
use std::hash::Hash;
use std::sync::Arc;

/// A thread-safe handle to a [`Store`].
///
/// Every operation holds the lock for its whole duration: writes take it exclusively, and
/// lookups take it shared for the full scan, so each call observes one consistent state of
/// the store. Results are cloned out of the lock.
///
/// Cloning a `SharedStore` is cheap; clones share the same underlying store.
///
/// # Example
/// ```rust
/// use elastag::configuration;
/// use elastag::sync::SharedStore;
///
/// let store = SharedStore::new();
/// let writer = store.clone();
///
/// std::thread::spawn(move || writer.set(configuration! { "lang" => "en" }, "en"))
///     .join()
///     .unwrap();
///
/// assert_eq!(store.get(&configuration! { "lang" => "en", "sector" => "retail" }).unwrap(), ["en"]);
/// ```
#[derive(Debug)]
pub struct SharedStore<V> {
    inner: Arc<RwLock<Store<V>>>,
}

impl<V> Clone for SharedStore<V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<V> Default for SharedStore<V> {
    fn default() -> Self {
        Self::from_store(Store::new())
    }
}

impl<V> From<Store<V>> for SharedStore<V> {
    fn from(store: Store<V>) -> Self {
        Self::from_store(store)
    }
}

impl<V> SharedStore<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: StoreOptions) -> Self {
        Self::from_store(Store::with_options(options))
    }

    #[must_use]
    pub fn from_store(store: Store<V>) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    /// Runs `f` against the store under the shared lock.
    pub fn read<R>(&self, f: impl FnOnce(&Store<V>) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Runs `f` against the store under the exclusive lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut Store<V>) -> R) -> R {
        f(&mut *self.inner.write())
    }

    pub fn set(&self, configuration: impl Into<Configuration>, value: V) {
        self.inner.write().set(configuration, value);
    }

    /// Appends to the bucket of exactly `configuration` and returns a copy of the result.
    pub fn append(&self, configuration: impl Into<Configuration>, value: V) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.write().append(configuration, value).to_vec()
    }

    /// Adds to the bucket of exactly `configuration` with set semantics and returns a copy of
    /// the result.
    pub fn add(&self, configuration: impl Into<Configuration>, value: V) -> Vec<V>
    where
        V: Clone + PartialEq,
    {
        self.inner.write().add(configuration, value).to_vec()
    }

    /// Resolves `query` to a copy of the bucket of its most restrictive subset match.
    ///
    /// The bucket is always returned as a list, single-valued or not.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no stored configuration is a subset of `query`.
    pub fn get(&self, query: &Configuration) -> Result<Vec<V>, StoreError>
    where
        V: Clone,
    {
        self.inner.read().get(query).map(|payload| payload.to_vec())
    }

    #[must_use]
    pub fn contains(&self, query: &Configuration) -> bool {
        self.inner.read().contains(query)
    }

    #[must_use]
    pub fn contains_key(&self, configuration: &Configuration) -> bool {
        self.inner.read().contains_key(configuration)
    }

    #[must_use]
    pub fn all(&self, query: &Configuration) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.read().all(query).into_iter().cloned().collect()
    }

    #[must_use]
    pub fn bag(&self, query: &Configuration) -> Vec<V>
    where
        V: Clone + Eq + Hash,
    {
        self.inner.read().bag(query).into_iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a point-in-time copy of the whole store.
    #[must_use]
    pub fn snapshot(&self) -> Store<V>
    where
        V: Clone,
    {
        self.inner.read().clone()
    }
}
