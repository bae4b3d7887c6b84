//! Process-wide pseudo-random generator used by `Matrix::random`.
//!
//! The generator is lazily seeded from OS entropy on first use. Call
//! [`seed`] to make later draws reproducible. Draws from several threads
//! are serialized by a mutex but interleave in an unspecified order, so
//! callers that need per-thread reproducibility should pass their own
//! generator to `Matrix::random_with` instead.
use std::sync::{Mutex, MutexGuard, OnceLock};

use rand::rngs::StdRng;
use rand::SeedableRng;

static GLOBAL_RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn lock() -> MutexGuard<'static, StdRng> {
    GLOBAL_RNG
        .get_or_init(|| Mutex::new(StdRng::from_entropy()))
        .lock()
        // A panic while holding the lock cannot leave StdRng half-updated.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Reset the process-wide generator to a fixed seed.
pub fn seed(seed: u64) {
    log::debug!("Seeding global matrix RNG with {}", seed);
    *lock() = StdRng::seed_from_u64(seed);
}

/// Reset the process-wide generator from OS entropy.
pub fn reseed_from_entropy() {
    log::debug!("Reseeding global matrix RNG from entropy");
    *lock() = StdRng::from_entropy();
}

/// Run `f` with exclusive access to the process-wide generator.
pub fn with_rng<R, F>(f: F) -> R
where
    F: FnOnce(&mut StdRng) -> R,
{
    let mut rng = lock();
    f(&mut rng)
}
