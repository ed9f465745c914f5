//! Injectable randomness for catalog picks, edge selection and content ids.
//!
//! Production code uses [`ThreadRandom`]; tests swap in [`SeededRandom`] or a
//! mock to make selection deterministic without touching the service flow.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Source of randomness shared by every request
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns an index uniformly distributed in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;

    /// Returns 16 random bytes
    fn bytes16(&self) -> [u8; 16];
}

/// Mints a fresh RFC 4122 version 4 identifier from `source`
pub fn new_content_id(source: &dyn RandomSource) -> Uuid {
    uuid::Builder::from_random_bytes(source.bytes16()).into_uuid()
}

/// Thread-local CSPRNG; each worker thread draws from its own generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn bytes16(&self) -> [u8; 16] {
        rand::thread_rng().gen()
    }
}

/// Deterministic generator for reproducible runs
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable generator.
        let mut guard = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        self.with_rng(|rng| rng.gen_range(0..len))
    }

    fn bytes16(&self) -> [u8; 16] {
        self.with_rng(|rng| rng.gen())
    }
}
