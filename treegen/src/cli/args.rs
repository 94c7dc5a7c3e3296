//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Synthetic test data generator: level-order n-ary trees, org-chart tables and scratch SQL scripts
#[derive(Parser, Debug)]
#[command(name = "treegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Employee table whose reporting lines form a complete n-ary tree
    #[command(after_help = "e.g. treegen org-chart 10 1000 > emp.csv")]
    OrgChart {
        /// Direct reports per manager
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n_children: u64,
        /// Employees below the root
        n_total: u64,
        /// Seed for reproducible names (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print `parent, child` edges of an n-ary tree in level order
    Tree {
        /// Branching factor
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
        /// Number of edges to print
        n_nodes: u64,
    },

    /// Shell script importing the employee CSV into MySQL
    ImportScript {
        /// MySQL user
        #[arg(short, long)]
        user: Option<String>,
        /// Database to create
        #[arg(long)]
        database: Option<String>,
        /// Employee table to create
        #[arg(long)]
        table: Option<String>,
        /// CSV file to import
        #[arg(long, value_hint = ValueHint::FilePath)]
        csv: Option<String>,
    },

    /// SQL script creating tables for a multi-table join benchmark
    JoinBench {
        /// Number of tables
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        tables: Option<u32>,
        /// Rows per table
        #[arg(long)]
        rows: Option<u64>,
        /// Database to (re)create
        #[arg(long)]
        database: Option<String>,
        /// Output file, `-` for stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file location
    Path,
    /// Print a config template
    Template,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_org_chart_args_when_parsing_then_positionals_bound() {
        let cli = Cli::try_parse_from(["treegen", "org-chart", "10", "1000"]).unwrap();
        match cli.command {
            Commands::OrgChart {
                n_children,
                n_total,
                seed,
            } => {
                assert_eq!((n_children, n_total, seed), (10, 1000, None));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn given_missing_total_when_parsing_then_error() {
        let err = Cli::try_parse_from(["treegen", "org-chart", "10"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn given_non_numeric_argument_when_parsing_then_error() {
        let err = Cli::try_parse_from(["treegen", "tree", "two", "3"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn given_zero_branching_when_parsing_then_error() {
        let err = Cli::try_parse_from(["treegen", "tree", "0", "3"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counted() {
        let cli = Cli::try_parse_from(["treegen", "-dd", "tree", "2", "3"]).unwrap();
        assert_eq!(cli.debug, 2);
    }
}
