use elastag_store::{Store, configuration};

/// Builds the language/sector/company rule set used across the integration tests.
#[must_use]
pub fn language_rules() -> Store<&'static str> {
    let mut store = Store::new();
    store.set(configuration! { "lang" => "es" }, "es");
    store.set(configuration! { "lang" => "en" }, "en");
    store.set(configuration! { "lang" => "en", "sector" => "construction" }, "en-construction");
    store.set(configuration! { "lang" => "en", "sector" => "consulting" }, "en-consulting");
    store.set(configuration! { "lang" => "en", "company" => "comp" }, "en-comp");
    store.set(
        configuration! { "lang" => "en", "company" => "comp", "sector" => "construction" },
        "en-comp-construction",
    );
    store
}
