//! Environment overrides for Settings.
//!
//! Kept in its own test binary: environment variables are process-global.

use std::fs;

use tempfile::TempDir;

use treegen::config::Settings;

#[test]
fn given_env_vars_when_load_then_override_file_and_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("treegen.toml");
    fs::write(&path, "[join_bench]\nrows = 50\ntables = 2\n").unwrap();
    std::env::set_var("TREEGEN_SEED", "99");
    std::env::set_var("TREEGEN_JOIN_BENCH__ROWS", "7");
    std::env::set_var("TREEGEN_MYSQL__DATABASE", "scratch");

    // Act
    let settings = Settings::load_from(Some(path.as_path()));

    // Cleanup
    std::env::remove_var("TREEGEN_SEED");
    std::env::remove_var("TREEGEN_JOIN_BENCH__ROWS");
    std::env::remove_var("TREEGEN_MYSQL__DATABASE");

    // Assert
    let settings = settings.expect("load settings");
    assert_eq!(settings.seed, Some(99));
    assert_eq!(settings.join_bench.rows, 7, "env beats file");
    assert_eq!(settings.join_bench.tables, 2, "file beats defaults");
    assert_eq!(settings.mysql.database, "scratch");
}
