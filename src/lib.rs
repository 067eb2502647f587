//! Incremental prime cache with a segmented Sieve of Eratosthenes, plus prime
//! factorization and divisor enumeration built on top of it.
//!
//! The cache is an owned value rather than a process-wide singleton: create
//! one [`SieveBuffer`] per engine. Every operation that can grow the cache
//! takes `&mut self`, so calls on a single instance are serialized by the
//! borrow checker; to use one cache from several threads wrap it in a
//! `Mutex`, or give each thread its own buffer.

mod buffer;
mod error;
mod factor;
pub mod nt_funcs;
mod traits;

pub use buffer::{PrimeBufferExt, SieveBuffer};
pub use error::Error;
pub use traits::{Factorization, PrimeBuffer};

// the input type of `PrimeBufferExt::divisors`
pub use either::Either;
