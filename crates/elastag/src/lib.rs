//! Facade crate for Elastag.
//! Re-exports the configuration store and adds the pieces an embedding application needs around
//! it: layered options loading and a lock-wrapped handle for sharing a store across threads.
//! Keep this crate thin: matching semantics live in `elastag-store`.
//!
//! ## Usage
//! ```rust
//! use elastag::prelude::*;
//!
//! let mut store = Store::new();
//! store.set(configuration! { "lang" => "en" }, "Hello");
//! store.set(configuration! { "lang" => "en", "sector" => "construction" }, "Hello, builder");
//!
//! let greeting = store.get(&configuration! { "lang" => "en", "sector" => "retail" });
//! assert_eq!(greeting.unwrap().first(), Some(&"Hello"));
//! ```
//!
//! ## Options loading
//! ```rust,ignore
//! let options = elastag::config::load_options(Some("elastag.toml"))?;
//! let store: elastag::Store<String> = elastag::Store::with_options(options);
//! ```

pub mod config;
pub mod sync;

pub use elastag_store as store;
pub use elastag_store::{
    Configuration, Entry, Payload, Store, StoreBuilder, StoreError, StoreErrorExt, StoreOptions,
    TieBreak, configuration,
};

pub mod prelude {
    pub use crate::sync::SharedStore;
    pub use elastag_store::prelude::*;
}
