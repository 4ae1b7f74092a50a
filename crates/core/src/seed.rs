//! Seed resolution and pseudo-random stream construction.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// A run seed, given either as a number or as free text.
///
/// Textual seeds are hashed down to the `u64` that actually drives the
/// random stream, so `"test-1"` names the same level on every machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    pub fn value(&self) -> u64 {
        match self {
            Self::Number(number) => *number,
            Self::Text(text) => xxh3_64(text.as_bytes()),
        }
    }

    pub(crate) fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.value())
    }
}

impl From<u64> for Seed {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
