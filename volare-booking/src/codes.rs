use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 6;

/// Issues 6-character booking codes drawn uniformly from `A-Z0-9`.
///
/// Codes are not checked against previously issued ones; at ~31 bits of
/// entropy a collision stays negligible at normal volumes.
#[derive(Debug)]
pub struct BookingCodeGenerator {
    rng: StdRng,
}

impl BookingCodeGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for deterministic code sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_code(&mut self) -> String {
        (0..CODE_LENGTH)
            .map(|_| {
                let idx = self.rng.gen_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect()
    }
}

impl Default for BookingCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
