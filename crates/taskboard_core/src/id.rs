//! Short alphanumeric identifier generation.
//!
//! # Responsibility
//! - Produce fixed-length ids over the `[A-Z0-9]` alphabet.
//! - Keep the random source injectable so tests stay deterministic.
//!
//! # Invariants
//! - `generate(n)` always returns exactly `n` ASCII symbols.
//! - Every symbol is drawn uniformly from the 36-symbol alphabet.
//! - Uniqueness is not enforced; callers accept the collision risk.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Opaque entity identifier. Stable once assigned.
pub type EntityId = String;

pub const USER_ID_LEN: usize = 4;
pub const MATERIAL_ID_LEN: usize = 4;
pub const NOTIFICATION_ID_LEN: usize = 4;
pub const OBJECTIVE_ID_LEN: usize = 4;
pub const PROJECT_ID_LEN: usize = 4;
pub const TASK_ID_LEN: usize = 10;
pub const WORK_ORDER_ID_LEN: usize = 8;

const ID_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random id source handed to every entity constructor.
///
/// Wraps a seedable RNG instead of reaching for a thread-global one, so a
/// test can replay the exact id sequence with [`IdGenerator::seeded`].
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    /// Generator seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator; the same seed yields the same id stream.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a fresh id of exactly `len` symbols.
    pub fn generate(&mut self, len: usize) -> EntityId {
        generate_id(&mut self.rng, len)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

/// Draws `len` symbols from `[A-Z0-9]` using the caller's random source.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, len: usize) -> EntityId {
    (0..len)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}

/// Returns whether `value` has the shape of a generated id of length `len`.
pub fn is_generated_id(value: &str, len: usize) -> bool {
    value.len() == len
        && value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
