//! Tests for environment variable expansion in paths

use treegen::infrastructure::output::OutputTarget;
use treegen::util::path::{expand_env_vars, expand_path};

#[test]
fn given_path_with_dollar_var_when_expanding_then_substitutes() {
    // Arrange
    std::env::set_var("TREEGEN_TEST_HOME", "/home/user");

    // Act
    let result = expand_env_vars("$TREEGEN_TEST_HOME/emp.csv");

    // Assert
    assert_eq!(result, "/home/user/emp.csv");

    // Cleanup
    std::env::remove_var("TREEGEN_TEST_HOME");
}

#[test]
fn given_path_with_braced_var_when_expanding_then_substitutes() {
    std::env::set_var("TREEGEN_TEST_DIR", "/var/data");

    let result = expand_path("${TREEGEN_TEST_DIR}/tmp.sql");

    assert_eq!(result.to_string_lossy(), "/var/data/tmp.sql");
    std::env::remove_var("TREEGEN_TEST_DIR");
}

#[test]
fn given_undefined_var_when_expanding_then_input_unchanged() {
    let result = expand_env_vars("$TREEGEN_UNDEFINED_VAR_XYZ/tmp.sql");
    assert_eq!(result, "$TREEGEN_UNDEFINED_VAR_XYZ/tmp.sql");
}

#[test]
fn given_output_spec_with_var_when_parsing_then_file_is_expanded() {
    std::env::set_var("TREEGEN_TEST_OUT", "/tmp/bench");

    let target = OutputTarget::parse("$TREEGEN_TEST_OUT/tmp.sql");

    assert_eq!(
        target,
        OutputTarget::File(std::path::PathBuf::from("/tmp/bench/tmp.sql"))
    );
    std::env::remove_var("TREEGEN_TEST_OUT");
}
