//! Scratch SQL scripts for local MySQL experiments
//!
//! - an import script loading the generated employee table via `mysqlimport`
//! - a join benchmark script creating `N` single-column tables of `rows` rows

use std::borrow::Cow;
use std::io::Write;
use std::iter;
use std::path::Path;

use itertools::Itertools;
use tracing::{info, instrument, warn};

use crate::application::services::PREAMBLE_LINES;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::{JoinBenchConfig, MysqlConfig};

/// Columns of the employee table, matching the org-chart output.
pub const EMP_COLUMNS: [(&str, &str); 4] = [
    ("id", "int"),
    ("emp_id", "int"),
    ("emp_name", "varchar(30)"),
    ("mgr_id", "int"),
];

/// Service rendering SQL/shell scripts from settings.
#[derive(Debug, Clone)]
pub struct SqlScriptService {
    mysql: MysqlConfig,
    join_bench: JoinBenchConfig,
}

impl SqlScriptService {
    pub fn new(mysql: MysqlConfig, join_bench: JoinBenchConfig) -> Self {
        Self { mysql, join_bench }
    }

    /// Shell script creating the employee table and importing the CSV.
    ///
    /// `mysqlimport` derives the target table from the file name, so a CSV
    /// whose stem differs from the table name only triggers a warning.
    #[instrument(skip(self, out))]
    pub fn import_script(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let MysqlConfig {
            user,
            database,
            table,
            ..
        } = &self.mysql;
        validate_identifier("mysql.user", user)?;
        validate_identifier("mysql.database", database)?;
        validate_identifier("mysql.table", table)?;
        let csv = self.mysql.csv_path();
        if csv.is_empty() {
            return Err(ApplicationError::Config {
                message: "mysql.csv must not be empty".into(),
            });
        }
        let stem = Path::new(&csv).file_stem().and_then(|s| s.to_str());
        if stem != Some(table.as_str()) {
            warn!(
                "mysqlimport loads {} into table {:?}, not {}",
                csv,
                stem.unwrap_or_default(),
                table
            );
        }

        let column_defs = EMP_COLUMNS
            .iter()
            .map(|(name, ty)| format!("{} {}", name, ty))
            .join(", ");
        let column_names = EMP_COLUMNS.iter().map(|(name, _)| name).join(",");
        let csv_arg = shell_quote(&csv);

        let script = format!(
            "#!/bin/bash\n\
             # create a table for csv import of the generated employee table into MySQL\n\
             mysql -u{user} -e 'create database if not exists {database}'\n\
             mysql -u{user} -e 'use {database}; drop table if exists {table}; create table {table}({column_defs});'\n\
             mysqlimport -u{user} -p --ignore-lines={PREAMBLE_LINES} --fields-terminated-by=, --columns='{column_names}' --local {database} {csv_arg}\n"
        );
        out.write_all(script.as_bytes())
            .write_context("import script")?;
        out.flush().write_context("import script")?;
        Ok(())
    }

    /// SQL script filling `tables` tables with `rows` rows each.
    ///
    /// Returns the number of statements written.
    #[instrument(skip(self, out))]
    pub fn join_bench_script(&self, out: &mut dyn Write) -> ApplicationResult<u64> {
        let JoinBenchConfig {
            database,
            tables,
            rows,
            ..
        } = &self.join_bench;
        validate_identifier("join_bench.database", database)?;

        let rows = *rows;
        let preamble = [
            format!("drop database if exists {};", database),
            format!("create database {};", database),
            format!("use {};", database),
        ];
        let tables_sql = (1..=*tables).flat_map(|ti| {
            iter::once(format!("create table t{ti} (i{ti} int);")).chain(
                (1..=rows).map(move |ri| format!("insert into t{ti}(i{ti}) values({ri});")),
            )
        });

        let mut statements = 0u64;
        for stmt in preamble.into_iter().chain(tables_sql) {
            writeln!(out, "{}", stmt).write_context("join bench statement")?;
            statements += 1;
        }
        out.flush().write_context("join bench script")?;

        info!(
            "wrote {} statements for {} tables x {} rows",
            statements, tables, rows
        );
        Ok(statements)
    }
}

/// Names are spliced into shell and SQL text unquoted.
fn validate_identifier(key: &str, value: &str) -> ApplicationResult<()> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ApplicationError::Config {
            message: format!("{} must be a plain identifier, got {:?}", key, value),
        })
    }
}

/// Single-quotes `value` for bash unless it is made of plain path characters.
fn shell_quote(value: &str) -> Cow<'_, str> {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:,+@%=".contains(c));
    if plain {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("'{}'", value.replace('\'', r"'\''")))
    }
}
