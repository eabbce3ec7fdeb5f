/// The payload of the entry that won a lookup.
///
/// A bucket holding exactly one value unwraps to [`Payload::Single`]; a bucket that
/// accumulated several values through [`Store::append`](crate::Store::append) comes back
/// whole as [`Payload::Multiple`]. Callers that always want a list can use
/// [`Payload::as_slice`].
#[derive(Debug, PartialEq, Eq)]
pub enum Payload<'a, V> {
    Single(&'a V),
    Multiple(&'a [V]),
}

impl<V> Clone for Payload<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Payload<'_, V> {}

impl<'a, V> Payload<'a, V> {
    pub(crate) const fn from_bucket(bucket: &'a [V]) -> Self {
        match bucket {
            [single] => Self::Single(single),
            many => Self::Multiple(many),
        }
    }

    /// Returns the payload as a slice, whatever its arity.
    #[must_use]
    pub const fn as_slice(self) -> &'a [V] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }

    /// Returns the value if the bucket held exactly one.
    #[must_use]
    pub const fn single(self) -> Option<&'a V> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    #[must_use]
    pub const fn first(self) -> Option<&'a V> {
        self.as_slice().first()
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.as_slice().is_empty()
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<V>
    where
        V: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<'a, V> IntoIterator for Payload<'a, V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
