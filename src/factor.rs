//! Factorization by trial division over an ascending prime iterator.

use num_integer::Integer;
use num_traits::{FromPrimitive, NumRef, RefNum};
use std::collections::BTreeMap;

/// Find factors by trial division, returns a tuple of the found factors and
/// the residual.
///
/// `primes` must yield primes in ascending order and cover every prime up to
/// `limit`. With `limit >= ceil(sqrt(target))` the residual is either 1 or a
/// single prime factor larger than `limit` (two such factors would multiply
/// beyond the target).
pub fn trial_division<I, T>(primes: I, target: T, limit: u64) -> (BTreeMap<u64, usize>, T)
where
    I: Iterator<Item = u64>,
    T: Integer + Clone + FromPrimitive + NumRef,
    for<'r> &'r T: RefNum<T>,
{
    let limit = T::from_u64(limit).unwrap();
    let mut residual = target;
    let mut result = BTreeMap::new();
    for (p, pt) in primes.map(|p| (p, T::from_u64(p).unwrap())) {
        if pt > limit {
            break;
        }

        while residual.is_multiple_of(&pt) {
            residual = residual / &pt;
            *result.entry(p).or_insert(0) += 1;
        }
        if residual.is_one() {
            break;
        }
    }

    (result, residual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::iter::FromIterator;

    const PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

    #[test]
    fn trial_division_test() {
        let (fac, residual) = trial_division(PRIMES.iter().cloned(), 84u64, 10);
        assert_eq!(fac, BTreeMap::from_iter([(2, 2), (3, 1), (7, 1)]));
        assert_eq!(residual, 1);

        // the residual is the single prime factor above the limit
        let (fac, residual) = trial_division(PRIMES.iter().cloned(), 97u64, 10);
        assert!(fac.is_empty());
        assert_eq!(residual, 97);

        let (fac, residual) = trial_division(PRIMES.iter().cloned(), 124u64, 12);
        assert_eq!(fac, BTreeMap::from_iter([(2, 2)]));
        assert_eq!(residual, 31);
    }
}
