//! Command dispatch: settings, service wiring and output destinations

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::output::OutputTarget;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Completion { shell } => cmd_completion(*shell),
        Commands::Config { command } => cmd_config(command),
        command => {
            let settings = Settings::load()?;
            run(command, settings)
        }
    }
}

fn run(command: &Commands, mut settings: Settings) -> CliResult<()> {
    match command {
        Commands::OrgChart {
            n_children,
            n_total,
            seed,
        } => cmd_org_chart(&ServiceContainer::new(settings), *n_children, *n_total, *seed),
        Commands::Tree { n, n_nodes } => cmd_tree(&ServiceContainer::new(settings), *n, *n_nodes),
        Commands::ImportScript {
            user,
            database,
            table,
            csv,
        } => {
            let mysql = &mut settings.mysql;
            override_with(&mut mysql.user, user);
            override_with(&mut mysql.database, database);
            override_with(&mut mysql.table, table);
            if csv.is_some() {
                mysql.csv = csv.clone();
            }
            cmd_import_script(&ServiceContainer::new(settings))
        }
        Commands::JoinBench {
            tables,
            rows,
            database,
            output,
        } => {
            let bench = &mut settings.join_bench;
            override_with(&mut bench.tables, tables);
            override_with(&mut bench.rows, rows);
            override_with(&mut bench.database, database);
            override_with(&mut bench.output, output);
            cmd_join_bench(&ServiceContainer::new(settings))
        }
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

/// Command-line flags replace configured values.
fn override_with<T: Clone>(target: &mut T, flag: &Option<T>) {
    if let Some(value) = flag {
        *target = value.clone();
    }
}

#[instrument(skip(container))]
fn cmd_org_chart(
    container: &ServiceContainer,
    n_children: u64,
    n_total: u64,
    seed: Option<u64>,
) -> CliResult<()> {
    let mut out = OutputTarget::Stdout.open()?;
    let rows = container
        .org_chart_service(seed)
        .generate(n_children, n_total, &mut *out)?;
    debug!("org chart: {} rows", rows);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, n: u64, n_nodes: u64) -> CliResult<()> {
    let mut out = OutputTarget::Stdout.open()?;
    let edges = container.tree_printer().print(n, n_nodes, &mut *out)?;
    debug!("tree: {} edges", edges);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_import_script(container: &ServiceContainer) -> CliResult<()> {
    let mut out = OutputTarget::Stdout.open()?;
    container.sql_script_service().import_script(&mut *out)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_join_bench(container: &ServiceContainer) -> CliResult<()> {
    let target = OutputTarget::parse(&container.settings.join_bench.output);
    let mut out = target.open()?;
    let statements = container.sql_script_service().join_bench_script(&mut *out)?;
    if let OutputTarget::File(_) = target {
        output::success(&format!("wrote {} statements to {}", statements, target));
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                let state = if path.exists() { "" } else { " (not found)" };
                output::info(&format!("{}{}", path.display(), state));
            }
            None => output::warning("no config directory on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
