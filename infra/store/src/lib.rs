//! An associative store whose keys are *configurations*: finite sets of `attribute=value`
//! pairs rather than scalars.
//!
//! A stored configuration matches a query when it is a **subset** of the query. When several
//! stored configurations match, the most restrictive one (the one with the most pairs) wins.
//! This makes the store a natural fit for layered rules: a broad `{lang=en}` entry serves as
//! the fallback for `{lang=en, sector=retail}` until a dedicated rule for that sector exists.
//!
//! # Core Features
//!
//! - **Most-specific lookup**: [`Store::get`] resolves a query to the payload of its most
//!   restrictive subset match, or [`StoreError::NotFound`].
//! - **Exact and elastic membership**: [`Store::contains_key`] asks whether a configuration
//!   was stored as such, [`Store::contains`] whether any stored rule covers it.
//! - **Refinement enumeration**: [`Store::all`] lists the payloads of every entry that is a
//!   **superset** of the query, least specific first.
//! - **Buckets**: [`Store::append`] and [`Store::add`] grow the list of payloads of a
//!   configuration instead of overwriting it.
//!
//! # Lookup Semantics
//!
//! ```text
//! stored:  {lang=en}                       -> "en"
//!          {lang=en, sector=construction}  -> "en-construction"
//!
//! get({lang=en, sector=construction})  -> "en-construction"   (2 pairs beat 1)
//! get({lang=en, sector=retail})        -> "en"                (fallback)
//! get({sector=retail})                 -> NotFound            (every rule requires `lang`)
//! ```
//!
//! # Example
//!
//! ```rust
//! use elastag_store::{Payload, Store, StoreError, configuration};
//!
//! # fn main() -> Result<(), StoreError> {
//! let mut store = Store::new();
//! store.set(configuration! { "lang" => "es" }, "es");
//! store.set(configuration! { "lang" => "en" }, "en");
//! store.set(configuration! { "lang" => "en", "sector" => "construction" }, "en-construction");
//!
//! assert_eq!(store.get(&configuration! { "lang" => "en", "sector" => "retail" })?, Payload::Single(&"en"));
//! assert!(store.get(&configuration! { "sector" => "retail" }).is_err());
//!
//! store.append(configuration! { "lang" => "en", "sector" => "construction" }, "appended");
//! let payload = store.get(&configuration! { "lang" => "en", "sector" => "construction" })?;
//! assert_eq!(payload, Payload::Multiple(&["en-construction", "appended"]));
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod key;
mod options;
mod payload;
mod store;

pub use builder::StoreBuilder;
pub use error::{StoreError, StoreErrorExt};
pub use key::Configuration;
pub use options::{StoreOptions, TieBreak};
pub use payload::Payload;
pub use store::{Entry, Store};

pub mod prelude {
    pub use crate::configuration;
    pub use crate::error::{StoreError, StoreErrorExt};
    pub use crate::key::Configuration;
    pub use crate::payload::Payload;
    pub use crate::store::Store;
}
