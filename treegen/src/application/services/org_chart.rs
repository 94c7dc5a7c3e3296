//! Org-chart generator
//!
//! Renders an employee table where every employee reports to the parent of
//! its node in a complete n-ary tree.

use std::io::Write;

use tracing::{info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{level_order_edges, Employee};
use crate::infrastructure::traits::NameProvider;

/// First line of the generated table.
pub const TITLE: &str = "An Employee Database";
/// Column header line.
pub const HEADER: &str = "id, emp_id, emp_name, mgr_id";
/// Lines preceding the first employee row.
pub const PREAMBLE_LINES: usize = 2;

/// Service producing the employee table.
pub struct OrgChartService {
    names: Box<dyn NameProvider>,
}

impl OrgChartService {
    pub fn new(names: Box<dyn NameProvider>) -> Self {
        Self { names }
    }

    /// Employees in node-index order: the root, then one per enumerated edge.
    ///
    /// Names are drawn in the same order, so each name is tied to a node index.
    pub fn employees(
        &mut self,
        n_children: u64,
        n_total: u64,
    ) -> ApplicationResult<impl Iterator<Item = Employee> + '_> {
        let edges = level_order_edges(n_children, n_total)?;
        let names = &mut self.names;
        let root = Employee::root(names.next_name());
        let reports = edges
            .zip(2u64..)
            .map(move |(edge, id)| Employee::from_edge(id, edge, names.next_name()));
        Ok(std::iter::once(root).chain(reports))
    }

    /// Write the full table to `out`; returns the number of employee rows.
    #[instrument(skip(self, out))]
    pub fn generate(
        &mut self,
        n_children: u64,
        n_total: u64,
        out: &mut dyn Write,
    ) -> ApplicationResult<u64> {
        let employees = self.employees(n_children, n_total)?;

        writeln!(out, "{}", TITLE).write_context("org chart title")?;
        writeln!(out, "{}", HEADER).write_context("org chart header")?;
        let mut rows = 0;
        for employee in employees {
            writeln!(out, "{}", employee).write_context("org chart row")?;
            rows += 1;
        }
        out.flush().write_context("org chart")?;

        info!("wrote {} employees", rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::application::ApplicationError;
    use crate::infrastructure::traits::SequentialNameProvider;

    fn service() -> OrgChartService {
        OrgChartService::new(Box::new(SequentialNameProvider::default()))
    }

    #[test]
    fn given_two_children_three_total_when_generating_then_four_rows() {
        let mut out = Vec::new();
        let rows = service().generate(2, 3, &mut out).unwrap();

        assert_eq!(rows, 4);
        let text = String::from_utf8(out).unwrap();
        let expected = "\
An Employee Database
id, emp_id, emp_name, mgr_id
1, 1, Employee 1, NULL
2, 2, Employee 2, 1
3, 3, Employee 3, 1
4, 4, Employee 4, 2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn given_zero_total_when_generating_then_only_root() {
        let mut out = Vec::new();
        let rows = service().generate(3, 0, &mut out).unwrap();
        assert_eq!(rows, 1);
        assert!(String::from_utf8(out).unwrap().ends_with("1, 1, Employee 1, NULL\n"));
    }

    #[test]
    fn given_zero_children_when_generating_then_nothing_written() {
        let mut out = Vec::new();
        let err = service().generate(0, 5, &mut out).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidArgument { .. })
        ));
        assert!(out.is_empty());
    }
}
