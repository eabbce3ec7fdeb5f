use elastag::config::{ConfigError, load_config, load_options};
use elastag::{Store, StoreOptions, TieBreak, configuration};
use std::fs;
use tempfile::tempdir;

#[test]
fn options_load_from_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("elastag.toml");
    fs::write(&path, "tie_break = \"last_inserted\"\ncapacity = 64\n")?;

    let options = load_options(Some(&path))?;

    assert_eq!(options, StoreOptions { tie_break: TieBreak::LastInserted, capacity: 64 });
    Ok(())
}

#[test]
fn missing_fields_keep_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("partial.toml");
    fs::write(&path, "capacity = 8\n")?;

    let options = load_options(Some(&path))?;

    assert_eq!(options.tie_break, TieBreak::FirstInserted);
    assert_eq!(options.capacity, 8);
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let tmp_dir = tempdir().expect("temp dir");
    let path = tmp_dir.path().join("absent.toml");

    let err = load_options(Some(&path)).expect_err("file does not exist");

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("(Failed to build config)"));
}

#[test]
fn unknown_tie_break_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("bad.toml");
    fs::write(&path, "tie_break = \"random\"\n")?;

    let err = load_options(Some(&path)).expect_err("unknown policy");

    assert!(err.to_string().contains("(Failed to deserialize config)"));
    Ok(())
}

#[test]
fn nested_options_load_through_generic_loader() -> Result<(), Box<dyn std::error::Error>> {
    #[derive(Debug, serde::Deserialize)]
    struct AppConfig {
        store: StoreOptions,
    }

    let tmp_dir = tempdir()?;
    let path = tmp_dir.path().join("app.toml");
    fs::write(&path, "[store]\ntie_break = \"last_inserted\"\n")?;

    let app: AppConfig = load_config(Some(&path))?;
    let mut store: Store<&str> = Store::with_options(app.store);
    store.set(configuration! { "lang" => "en", "sector" => "construction" }, "by-sector");
    store.set(configuration! { "lang" => "en", "company" => "comp" }, "by-company");

    let query = configuration! { "lang" => "en", "sector" => "construction", "company" => "comp" };
    assert_eq!(store.get(&query)?.single(), Some(&"by-company"));
    Ok(())
}

#[test]
fn no_path_and_no_default_file_yields_default_options() -> Result<(), Box<dyn std::error::Error>> {
    let options = load_options(None::<&str>)?;

    assert_eq!(options, StoreOptions::default());
    Ok(())
}
