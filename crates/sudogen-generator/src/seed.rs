//! Reproducible generation seeds.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use rand::RngExt as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed driving one generation request.
///
/// The seed determines the solved grid, the removal order, and every retry
/// attempt, so a puzzle can be reproduced from its seed alone. Seeds render
/// as 64 lowercase hex characters and parse back losslessly.
///
/// # Examples
///
/// ```
/// use sudogen_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Number of bytes in a seed.
    pub const LENGTH: usize = 32;

    /// Builds a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh random seed from the process-wide random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; Self::LENGTH];
        rand::rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// Derives the RNG seed for a retry attempt.
    ///
    /// Attempt 0 uses the seed itself; attempt `n` hashes the seed together
    /// with `n`, so every retry draws from an independent stream while the
    /// whole sequence stays reproducible.
    pub(crate) fn attempt_seed(&self, attempt: u32) -> [u8; Self::LENGTH] {
        if attempt == 0 {
            return self.0;
        }
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(attempt.to_le_bytes());
        hasher.finalize().into()
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        if s.len() != Self::LENGTH * 2 {
            return Err(ParseSeedError::InvalidLength { length: s.len() });
        }
        let mut bytes = [0; Self::LENGTH];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = s
                .get(i * 2..i * 2 + 2)
                .ok_or(ParseSeedError::InvalidHex)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError::InvalidHex)?;
        }
        Ok(Self(bytes))
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {length}")]
    InvalidLength {
        /// Length of the rejected text.
        length: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("seed contains a non-hexadecimal character")]
    InvalidHex,
}
