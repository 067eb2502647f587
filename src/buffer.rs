//! SieveBuffer implements an owned, growable list of primes together with the
//! factorization and divisor enumeration built on top of it.

use crate::error::Error;
use crate::factor::trial_division;
use crate::traits::{Factorization, PrimeBuffer};
use bitvec::prelude::*;
use either::Either;
use num_integer::Roots;
use std::collections::BTreeSet;
use std::convert::TryFrom;

/// The cache always restarts from these after [`PrimeBuffer::clear`].
const SEED_PRIMES: [u64; 5] = [2, 3, 5, 7, 11];

/// Smallest integer whose square is at least `n`.
#[inline]
fn ceil_sqrt(n: u64) -> u64 {
    let root = Roots::sqrt(&n);
    if root * root == n {
        root
    } else {
        root + 1
    }
}

fn validate_factorization(factors: &Factorization) -> Result<(), Error> {
    for (&p, &e) in factors {
        if p < 2 {
            return Err(Error::InvalidInput("factorization keys must be at least 2"));
        }
        if e == 0 {
            return Err(Error::InvalidInput("factorization exponents must be at least 1"));
        }
    }
    Ok(())
}

/// Allocate a zeroed composite-marker segment of `len` bits, reporting
/// failure instead of aborting so that a huge bound leaves the cache intact.
fn alloc_segment(len: usize, bound: u64) -> Result<BitVec, Error> {
    let words = len / usize::BITS as usize + 1;
    let mut storage: Vec<usize> = Vec::new();
    storage
        .try_reserve_exact(words)
        .map_err(|_| Error::ResourceExhausted { bound })?;
    storage.resize(words, 0);
    let mut segment = BitVec::from_vec(storage);
    segment.truncate(len);
    Ok(segment)
}

/// Arithmetic over any prime cache implementation.
pub trait PrimeBufferExt: for<'a> PrimeBuffer<'a> {
    /// Compute the prime factorization of `target`, extending the cache up
    /// to `ceil(sqrt(target))` so that every trial divisor is cached by the
    /// time it is used. A residual larger than that limit is itself prime
    /// and is reported with exponent 1; it is not appended to the cache,
    /// which has to stay gapless.
    ///
    /// `target == 0` has no factorization and is rejected before the cache
    /// is touched; `target == 1` yields the empty mapping.
    fn factorize(&mut self, target: u64) -> Result<Factorization, Error> {
        if target == 0 {
            return Err(Error::InvalidInput("0 has no prime factorization"));
        }
        if target == 1 {
            return Ok(Factorization::new());
        }

        let limit = ceil_sqrt(target);
        self.sieve_up_to(limit)?;
        let (mut factors, residual) = trial_division(self.iter().cloned(), target, limit);
        if residual > 1 {
            factors.insert(residual, 1);
        }
        Ok(factors)
    }

    /// Enumerate every divisor of the input, given either as an integer or
    /// as a factorization previously obtained from
    /// [`factorize`](PrimeBufferExt::factorize).
    ///
    /// Each prime power in the factorization multiplies all divisors
    /// accumulated before that prime was introduced, so the result holds
    /// exactly `Π(e_i + 1)` values, always including 1 and the original
    /// number. All arithmetic is exact; a caller-supplied factorization
    /// whose expansion does not fit `u64` is rejected.
    fn divisors(&mut self, target: Either<u64, &Factorization>) -> Result<BTreeSet<u64>, Error> {
        let owned;
        let factors = match target {
            Either::Left(n) => {
                owned = self.factorize(n)?;
                &owned
            }
            Either::Right(f) => {
                validate_factorization(f)?;
                f
            }
        };

        let mut result: Vec<u64> = vec![1];
        for (&p, &e) in factors {
            let count = result.len();
            let mut power = 1u64;
            for _ in 0..e {
                power = power
                    .checked_mul(p)
                    .ok_or(Error::InvalidInput("factorization value exceeds u64"))?;
                for i in 0..count {
                    let divisor = result[i]
                        .checked_mul(power)
                        .ok_or(Error::InvalidInput("factorization value exceeds u64"))?;
                    result.push(divisor);
                }
            }
        }
        Ok(result.into_iter().collect())
    }
}

impl<T> PrimeBufferExt for T where for<'a> T: PrimeBuffer<'a> {}

pub struct SieveBuffer {
    list: Vec<u64>, // found primes, ascending; a complete prefix of the prime sequence
    sieved: u64,    // every prime up to this value is in the list
}

impl SieveBuffer {
    #[inline]
    pub fn new() -> Self {
        SieveBuffer {
            list: SEED_PRIMES.to_vec(),
            sieved: 11,
        }
    }

    /// Read-only snapshot of the cached primes, ascending.
    #[inline]
    pub fn primes(&self) -> &[u64] {
        &self.list
    }

    /// The highest bound the cache has been sieved up to.
    #[inline]
    pub fn sieved_bound(&self) -> u64 {
        self.sieved
    }
}

impl Default for SieveBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PrimeBuffer<'a> for SieveBuffer {
    type PrimeIter = std::slice::Iter<'a, u64>;

    fn iter(&'a self) -> Self::PrimeIter {
        self.list.iter()
    }

    fn contains(&self, num: u64) -> bool {
        self.list.binary_search(&num).is_ok()
    }

    fn bound(&self) -> u64 {
        *self.list.last().unwrap() // the list is never empty
    }

    fn clear(&mut self) {
        self.list.truncate(SEED_PRIMES.len());
        self.list.shrink_to_fit();
        self.sieved = 11;
    }

    fn sieve_up_to(&mut self, bound: u64) -> Result<(), Error> {
        let max_prime = self.bound();
        // max_prime + 1 is provably composite (even, or 3 which is seeded),
        // so anything below max_prime + 2 is already covered
        if bound < max_prime + 2 {
            return Ok(());
        }

        // segment[i] corresponds to lo + i; a set bit marks a composite
        let lo = max_prime + 2;
        let seg_len = bound - lo + 1;
        let len = usize::try_from(seg_len).map_err(|_| Error::ResourceExhausted { bound })?;
        let mut segment = alloc_segment(len, bound)?;

        // filter the segment with the primes known before this call
        for &p in self.list.iter() {
            let mut multiple = match lo % p {
                0 => 0,
                r => p - r,
            };
            while multiple < seg_len {
                segment.set(multiple as usize, true);
                multiple += p;
            }
        }

        // scan left to right; each unmarked value is a new prime and must
        // strike its own multiples before the scan reaches them, since it
        // took no part in the filtering above
        for i in 0..len {
            if !segment[i] {
                let p = lo + i as u64;
                self.list.push(p);
                let mut multiple = i as u64 + p;
                while multiple < seg_len {
                    segment.set(multiple as usize, true);
                    multiple += p;
                }
            }
        }

        self.sieved = bound;
        Ok(())
    }
}
