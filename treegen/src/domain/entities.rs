//! Domain entities: core data structures

use std::fmt;

/// Parent/child pair of node indices in a level-order numbered tree.
///
/// Node indices are 1-based; the root is always `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub parent: u64,
    pub child: u64,
}

impl Edge {
    pub fn new(parent: u64, child: u64) -> Self {
        Self { parent, child }
    }
}

impl From<(u64, u64)> for Edge {
    fn from((parent, child): (u64, u64)) -> Self {
        Self { parent, child }
    }
}

impl From<Edge> for (u64, u64) {
    fn from(edge: Edge) -> Self {
        (edge.parent, edge.child)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.parent, self.child)
    }
}

/// One row of the generated employee table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Row counter, starting at 1
    pub id: u64,
    /// Node index of the employee in the org tree
    pub emp_id: u64,
    pub emp_name: String,
    /// Node index of the manager; `None` for the root
    pub mgr_id: Option<u64>,
}

impl Employee {
    /// The root of the org chart: has no manager.
    pub fn root(emp_name: String) -> Self {
        Self {
            id: 1,
            emp_id: 1,
            emp_name,
            mgr_id: None,
        }
    }

    /// Employee at the child end of `edge`, managed by the parent.
    pub fn from_edge(id: u64, edge: Edge, emp_name: String) -> Self {
        Self {
            id,
            emp_id: edge.child,
            emp_name,
            mgr_id: Some(edge.parent),
        }
    }
}

/// Literal written in place of a missing manager id.
pub const NULL_LITERAL: &str = "NULL";

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, ", self.id, self.emp_id, self.emp_name)?;
        match self.mgr_id {
            Some(mgr) => write!(f, "{}", mgr),
            None => f.write_str(NULL_LITERAL),
        }
    }
}
