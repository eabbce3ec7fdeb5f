//! Canonical, order-independent configuration keys.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

/// A finite set of `attribute=value` pairs with unique attribute names.
///
/// Pairs are kept in a sorted map, so two configurations built from the same pairs in any
/// order compare and hash equal. A `Configuration` is therefore usable directly as a map key.
///
/// Supplying the same attribute twice keeps the last value, the same as inserting into a map.
///
/// # Example
/// ```rust
/// use elastag_store::{Configuration, configuration};
///
/// let broad = configuration! { "lang" => "en" };
/// let narrow = Configuration::from([("sector", "retail"), ("lang", "en")]);
///
/// assert!(broad.is_subset(&narrow));
/// assert!(narrow.is_superset(&broad));
/// assert_eq!(narrow.len(), 2);
/// assert_eq!(narrow.to_string(), "{lang=en, sector=retail}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration {
    pairs: BTreeMap<String, String>,
}

impl Configuration {
    /// Creates the empty configuration, which is a subset of every configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: BTreeMap::new() }
    }

    /// Returns the configuration extended with `attribute=value`.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Inserts a pair and returns the value the attribute previously held, if any.
    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.pairs.insert(attribute.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.pairs.get(attribute).map(String::as_str)
    }

    /// Number of pairs, i.e. the specificity of the configuration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the pairs in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(attribute, value)| (attribute.as_str(), value.as_str()))
    }

    /// Returns `true` if every pair of `self` also occurs in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len()
            && self.pairs.iter().all(|(attribute, value)| other.pairs.get(attribute) == Some(value))
    }

    /// Returns `true` if every pair of `other` also occurs in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (attribute, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attribute}={value}")?;
        }
        f.write_str("}")
    }
}

impl<A, V> FromIterator<(A, V)> for Configuration
where
    A: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, V)>>(iter: I) -> Self {
        let mut configuration = Self::new();
        configuration.extend(iter);
        configuration
    }
}

impl<A, V> Extend<(A, V)> for Configuration
where
    A: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (A, V)>>(&mut self, iter: I) {
        for (attribute, value) in iter {
            self.insert(attribute, value);
        }
    }
}

impl<A, V, const N: usize> From<[(A, V); N]> for Configuration
where
    A: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(A, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Configuration {
    fn from(pairs: BTreeMap<String, String>) -> Self {
        Self { pairs }
    }
}

impl<S: BuildHasher> From<HashMap<String, String, S>> for Configuration {
    fn from(pairs: HashMap<String, String, S>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<&Self> for Configuration {
    fn from(configuration: &Self) -> Self {
        configuration.clone()
    }
}

/// Builds a [`Configuration`] from `attribute => value` pairs.
///
/// ```rust
/// use elastag_store::configuration;
///
/// let query = configuration! { "lang" => "en", "sector" => "retail" };
/// assert_eq!(query.get("sector"), Some("retail"));
/// assert!(configuration! {}.is_empty());
/// ```
#[macro_export]
macro_rules! configuration {
    () => {
        $crate::Configuration::new()
    };
    ($($attribute:expr => $value:expr),+ $(,)?) => {
        $crate::Configuration::new()$(.with($attribute, $value))+
    };
}
