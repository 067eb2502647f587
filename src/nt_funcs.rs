//! Standalone functions that run on a fresh private prime cache.
//!
//! Each call pays for its own sieve, so prefer holding a [`SieveBuffer`] and
//! using [`PrimeBufferExt`] directly when issuing many queries.

use crate::buffer::{PrimeBufferExt, SieveBuffer};
use crate::error::Error;
use crate::traits::Factorization;
use either::Either;
use std::collections::BTreeSet;

/// This function re-exports [`PrimeBufferExt::factorize()`] with a fresh buffer instance
pub fn factorize(target: u64) -> Result<Factorization, Error> {
    SieveBuffer::new().factorize(target)
}

/// This function re-exports [`PrimeBufferExt::divisors()`] with a fresh buffer instance
pub fn divisors(target: u64) -> Result<BTreeSet<u64>, Error> {
    SieveBuffer::new().divisors(Either::Left(target))
}

/// The number of divisors of the target, `Π(e + 1)` over the exponents of
/// its prime factorization
pub fn divisor_count(target: u64) -> Result<u64, Error> {
    let factors = factorize(target)?;
    Ok(factors.values().map(|&e| e as u64 + 1).product())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_test() {
        assert_eq!(factorize(84).unwrap().len(), 3);
        assert_eq!(divisors(84).unwrap().len(), 12);
        assert_eq!(divisor_count(84).unwrap(), 12);
        assert_eq!(divisor_count(97).unwrap(), 2);
        assert_eq!(divisor_count(1).unwrap(), 1);
    }

    #[test]
    fn divisor_count_test() {
        for n in 1..500u64 {
            assert_eq!(
                divisors(n).unwrap().len() as u64,
                divisor_count(n).unwrap(),
                "divisor count mismatch at {}",
                n
            );
        }
    }
}
