use crate::options::{StoreOptions, TieBreak};
use crate::store::Store;
use std::fmt;
use std::marker::PhantomData;

/// A fluent builder for a [`Store`] with non-default [`StoreOptions`].
///
/// The value type is carried by the builder, so it is inferred from wherever the built
/// store ends up.
///
/// ```rust
/// use elastag_store::{Store, TieBreak};
///
/// let store: Store<&str> = Store::builder().tie_break(TieBreak::LastInserted).capacity(32).build();
/// assert_eq!(store.options().tie_break, TieBreak::LastInserted);
/// ```
pub struct StoreBuilder<V> {
    options: StoreOptions,
    _values: PhantomData<fn() -> V>,
}

impl<V> StoreBuilder<V> {
    #[must_use = "The store is not created until you call .build()"]
    pub fn new() -> Self {
        Self { options: StoreOptions::default(), _values: PhantomData }
    }

    #[must_use = "Sets the tie-break policy between equally specific matches"]
    pub const fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.options.tie_break = tie_break;
        self
    }

    #[must_use = "Sets the number of entries reserved up front"]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.options.capacity = capacity;
        self
    }

    /// Replaces all options at once, e.g. with values loaded from a file.
    #[must_use = "Replaces the options of the store being built"]
    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn build(self) -> Store<V> {
        Store::with_options(self.options)
    }
}

impl<V> Default for StoreBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for StoreBuilder<V> {
    fn clone(&self) -> Self {
        Self { options: self.options.clone(), _values: PhantomData }
    }
}

impl<V> fmt::Debug for StoreBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreBuilder").field("options", &self.options).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_is_inferred_from_the_binding() {
        let store: Store<String> = Store::builder().capacity(4).build();

        assert!(store.is_empty());
        assert_eq!(store.options().capacity, 4);
        assert_eq!(store.options().tie_break, TieBreak::FirstInserted);
    }

    #[test]
    fn value_type_is_inferred_from_later_use() {
        let mut store = Store::builder().tie_break(TieBreak::LastInserted).build();
        store.set(crate::configuration! { "lang" => "en" }, 7_u8);

        assert_eq!(store.get(&crate::configuration! { "lang" => "en" }).unwrap().single(), Some(&7));
    }

    #[test]
    fn options_replace_every_field() {
        let options = StoreOptions { tie_break: TieBreak::LastInserted, capacity: 16 };
        let store: Store<()> = StoreBuilder::new().capacity(2).options(options.clone()).build();

        assert_eq!(store.options(), &options);
    }
}
