//! Random string generation.
//!
//! Strings are drawn from the operating system CSPRNG. Bytes outside the
//! largest multiple of the alphabet size are rejected so every symbol is
//! equally likely.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{GenerateError, Result};

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Character set for generated secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Letters and digits (62 symbols).
    #[default]
    Alphanumeric,
    /// Letters, digits and punctuation (88 symbols).
    Extended,
}

impl Alphabet {
    /// All symbols in this alphabet.
    pub fn symbols(self) -> Vec<u8> {
        match self {
            Alphabet::Alphanumeric => ALPHANUMERIC.to_vec(),
            Alphabet::Extended => [ALPHANUMERIC, SPECIAL].concat(),
        }
    }

    /// Whether `ch` belongs to this alphabet.
    pub fn contains(self, ch: char) -> bool {
        ch.is_ascii() && self.symbols().contains(&(ch as u8))
    }
}

/// Generate a random string of exactly `length` characters.
///
/// # Errors
///
/// Returns `GenerateError::Randomness` if the OS random source fails.
pub fn random_string(length: usize, alphabet: Alphabet) -> Result<String> {
    random_string_from(&mut OsRng, length, alphabet)
}

/// Generate a random string using the given RNG.
pub fn random_string_from<R: RngCore + ?Sized>(
    rng: &mut R,
    length: usize,
    alphabet: Alphabet,
) -> Result<String> {
    let symbols = alphabet.symbols();
    let n = symbols.len();
    // largest multiple of n that fits in a byte
    let limit = 256 - (256 % n);

    let mut out = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while out.len() < length {
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| GenerateError::Randomness(e.to_string()))?;

        for &byte in &buf {
            if out.len() == length {
                break;
            }
            if (byte as usize) < limit {
                out.push(symbols[byte as usize % n] as char);
            }
        }
    }

    Ok(out)
}
