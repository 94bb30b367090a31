//! UUIDv4 generator and related types.

use crate::Uuid;

pub mod with_mode;
pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V4Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;
}

/// Represents a UUIDv4 generator that draws random bytes from a [`RandSource`] and fixes the
/// version and variant bits.
///
/// A generator is not synchronized. Share one behind a lock, or give each thread its own, in
/// which case seeded generators produce reproducible sequences per thread only.
///
/// # Examples
///
/// ```rust
/// use uuid4::{RngMode, V4Generator};
///
/// let mut g = V4Generator::with_mode(RngMode::Seeded(0));
/// assert_eq!(g.generate().to_string(), "a79a3b6c-b585-4f67-aed8-c0377746a55f");
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a reference to the random number generator inside.
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Draws 16 bytes as four big-endian `u32` values in order and fixes the version and variant
    /// bits.
    ///
    /// The version nibble is set at `0100` by shifting the high nibble of byte 6 down, and the
    /// variant bits are set at `10` by shifting byte 8 two bits down.
    pub fn next_bytes(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_exact_mut(4) {
            chunk.copy_from_slice(&self.rng.next_u32().to_be_bytes());
        }
        bytes[6] = 0x40 | (bytes[6] >> 4);
        bytes[8] = 0x80 | (bytes[8] >> 2);
        bytes
    }

    /// Generates a new UUIDv4 object.
    pub fn generate(&mut self) -> Uuid {
        Uuid::from(self.next_bytes())
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4::{RngMode, V4Generator};
///
/// V4Generator::with_mode(RngMode::Pseudo)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for V4Generator<R> {}
