//! Random number generators selected by [`RngMode`].

use rand::rngs::{adapter::ReseedingRng, OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::{ChaCha12Core, ChaCha8Rng};

use super::{RandSource, V4Generator};
use crate::RngMode;

/// Number of bytes the secure generator produces before reseeding itself from the OS.
const RESEED_THRESHOLD: u64 = 1024 * 64;

/// The random number generator behind each [`RngMode`].
///
/// - `Secure` employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the strategy used
///   by [`rand::rngs::ThreadRng`].
/// - `Pseudo` employs [`SmallRng`] seeded from the OS.
/// - `Seeded` employs [`ChaCha8Rng`], whose output for a given seed is portable and stable across
///   releases.
#[derive(Clone, Debug)]
pub struct ModeRng {
    mode: RngMode,
    inner: Inner,
}

#[derive(Clone, Debug)]
enum Inner {
    Secure(ReseedingRng<ChaCha12Core, OsRng>),
    Pseudo(SmallRng),
    Seeded(ChaCha8Rng),
}

impl ModeRng {
    /// Creates the random number generator for `mode`.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source is unavailable in the `Secure` or `Pseudo` mode.
    pub fn new(mode: RngMode) -> Self {
        let inner = match mode {
            RngMode::Secure => {
                let core = ChaCha12Core::from_rng(OsRng)
                    .expect("uuid4: could not seed secure random number generator");
                Inner::Secure(ReseedingRng::new(core, RESEED_THRESHOLD, OsRng))
            }
            RngMode::Pseudo => Inner::Pseudo(SmallRng::from_entropy()),
            RngMode::Seeded(seed) => Inner::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        };
        log::debug!("created {} random number generator", mode);
        Self { mode, inner }
    }

    /// Returns the mode the generator was created with.
    pub const fn mode(&self) -> RngMode {
        self.mode
    }

    /// Returns true if the generator is cryptographically secure.
    pub const fn is_secure(&self) -> bool {
        matches!(self.mode, RngMode::Secure)
    }
}

impl RandSource for ModeRng {
    fn next_u32(&mut self) -> u32 {
        match &mut self.inner {
            Inner::Secure(rng) => rng.next_u32(),
            Inner::Pseudo(rng) => rng.next_u32(),
            Inner::Seeded(rng) => rng.next_u32(),
        }
    }
}

impl V4Generator<ModeRng> {
    /// Creates a generator object backed by the random number generator that `mode` selects.
    pub fn with_mode(mode: RngMode) -> Self {
        Self::new(ModeRng::new(mode))
    }
}
