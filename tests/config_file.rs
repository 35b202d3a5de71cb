use rosterview::{initialize, screens, Config, RosterError, SortMode};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn loads_table_settings_from_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
page_size = 25
window_size = 7
page_size_options = [25, 50]
default_sort = "a-z"
trace_level = "debug"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(
        config,
        Config {
            page_size: 25,
            window_size: 7,
            page_size_options: vec![25, 50],
            default_sort: SortMode::AToZ,
            trace_level: Some("debug".to_string()),
        }
    );

    let view = initialize(&config, screens::job_applications());
    assert_eq!(view.items_per_page(), 25);
    assert_eq!(view.sort_mode(), SortMode::AToZ);
}

#[test]
fn empty_file_yields_defaults() {
    let file = NamedTempFile::new().unwrap();
    assert_eq!(Config::from_file(file.path()).unwrap(), Config::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(RosterError::Io(_))));
}

#[test]
fn malformed_file_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "page_size = [").unwrap();
    assert!(matches!(Config::from_file(file.path()), Err(RosterError::Toml(_))));
}
