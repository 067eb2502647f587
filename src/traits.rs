use crate::error::Error;
use std::collections::BTreeMap;

/// A prime factorization: each key is a prime factor, each value is that
/// prime's exponent (always at least 1) in the factorization.
pub type Factorization = BTreeMap<u64, usize>;

/// An owned, monotonically growing cache of prime numbers.
///
/// The cached primes form a complete prefix of the prime sequence: every
/// prime not larger than [`bound()`](PrimeBuffer::bound) is in the cache,
/// with no gaps and no duplicates. The cache only grows through
/// [`sieve_up_to`](PrimeBuffer::sieve_up_to) and only shrinks back to its
/// seed through [`clear`](PrimeBuffer::clear).
pub trait PrimeBuffer<'a> {
    type PrimeIter: Iterator<Item = &'a u64>;

    /// Read-only iterator over the cached primes in ascending order.
    fn iter(&'a self) -> Self::PrimeIter;

    /// Whether the number is in the cache. Only meaningful for numbers not
    /// larger than the sieved bound.
    fn contains(&self, num: u64) -> bool;

    /// The largest prime currently in the cache.
    fn bound(&self) -> u64;

    /// Reset the cache to its seed primes.
    fn clear(&mut self);

    /// Extend the cache so that it contains every prime up to and including
    /// `bound`. A bound already covered by the cache is a no-op. Fails only
    /// when the sieve segment cannot be allocated, leaving the cache
    /// untouched.
    fn sieve_up_to(&mut self, bound: u64) -> Result<(), Error>;
}
