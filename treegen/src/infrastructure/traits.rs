//! I/O boundary traits for testability
//!
//! These traits abstract the non-deterministic collaborators of the
//! generators, allowing services to be tested with stub implementations.

use fake::faker::name::en::Name;
use fake::Fake;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Source of employee names.
pub trait NameProvider {
    /// Produce the next name; called once per node, in node-index order.
    fn next_name(&mut self) -> String;
}

impl<T: NameProvider + ?Sized> NameProvider for Box<T> {
    fn next_name(&mut self) -> String {
        (**self).next_name()
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Random English full names from the `fake` crate.
///
/// Seeded runs are reproducible: the same seed yields the same name sequence.
#[derive(Debug)]
pub struct FakeNameProvider {
    rng: ChaCha8Rng,
}

impl FakeNameProvider {
    pub fn from_seed(seed: u64) -> Self {
        debug!("FakeNameProvider: seed={}", seed);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the thread-local RNG, or from `seed` when given.
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_seed(seed.unwrap_or_else(|| rand::rng().random()))
    }
}

impl NameProvider for FakeNameProvider {
    fn next_name(&mut self) -> String {
        // the table is comma separated; keep names to one column
        let name: String = Name().fake_with_rng(&mut self.rng);
        name.replace(',', "")
    }
}

// ============================================================
// DETERMINISTIC STUB
// ============================================================

/// Deterministic names `<prefix> 1`, `<prefix> 2`, ...
///
/// Public so integration tests and callers wanting stable output can inject it.
#[derive(Debug, Clone)]
pub struct SequentialNameProvider {
    prefix: String,
    counter: u64,
}

impl SequentialNameProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl Default for SequentialNameProvider {
    fn default() -> Self {
        Self::new("Employee")
    }
}

impl NameProvider for SequentialNameProvider {
    fn next_name(&mut self) -> String {
        self.counter += 1;
        format!("{} {}", self.prefix, self.counter)
    }
}
