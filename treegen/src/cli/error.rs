//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(e) => match e {
                InfraError::CreateOutput { .. } => crate::exitcode::CANTCREAT,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::USAGE,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::Write { .. } => crate::exitcode::IOERR,
                },
            },
        }
    }
}

/// Exit code for a failed argument parse: usage errors exit 1, while help
/// and version requests, which clap also reports as errors, exit 0.
pub fn parse_exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        crate::exitcode::USAGE
    } else {
        crate::exitcode::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use crate::domain::DomainError;
    use clap::Parser;
    use rstest::rstest;

    #[test]
    fn given_invalid_branching_when_mapping_exit_code_then_usage() {
        let err: CliError = ApplicationError::from(DomainError::invalid_argument("n", "zero")).into();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_write_failure_when_mapping_exit_code_then_ioerr() {
        let err: CliError = ApplicationError::Write {
            context: "tree edge".into(),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
        assert_eq!(err.to_string(), "write failed: tree edge");
    }

    #[test]
    fn given_config_error_when_mapping_exit_code_then_config() {
        let err: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[rstest]
    #[case(&["treegen", "org-chart", "2"])]
    #[case(&["treegen", "tree"])]
    #[case(&["treegen", "tree", "0", "3"])]
    fn given_bad_arguments_when_parsing_then_exit_usage(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(parse_exit_code(&err), crate::exitcode::USAGE);
        assert_eq!(parse_exit_code(&err), 1);
    }

    #[rstest]
    #[case(&["treegen", "--help"])]
    #[case(&["treegen", "--version"])]
    #[case(&["treegen", "tree", "--help"])]
    fn given_help_or_version_when_parsing_then_exit_ok(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(parse_exit_code(&err), crate::exitcode::OK);
    }
}
