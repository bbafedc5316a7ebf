//! Bit-mixing core
//!
//! The three avalanche finalizers behind every stream operation. All three
//! are pure, total functions over 64-bit integers with wrapping arithmetic;
//! the constants are the load-bearing part of sequence compatibility with
//! `java.util.SplittableRandom` and must not be changed.

/// The default stride for root generators: 2^64 / phi, forced odd.
///
/// Adding this value to a counter walks the 64-bit space in the most
/// evenly-distributed order possible (Weyl sequence on the golden ratio).
pub(crate) const GOLDEN_GAMMA: i64 = 0x9E3779B97F4A7C15u64 as i64;

/// Computes Stafford variant 13 of the 64-bit finalizer.
///
/// A bijection on u64: three xor-shift/multiply rounds turn a weak counter
/// value into a well-distributed output.
#[inline]
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Returns the 32 high bits of Stafford variant 4 of the 64-bit finalizer.
///
/// Distinct constants from [`mix64`]; not a truncation of it.
#[inline]
pub(crate) fn mix32(mut z: u64) -> i32 {
    z = (z ^ (z >> 33)).wrapping_mul(0x62A9D9ED799705F5);
    ((z ^ (z >> 28)).wrapping_mul(0xCB24D0A5C88C35B3) >> 32) as i32
}

/// Derives the gamma value for a new stream.
///
/// MurmurHash3 fmix64 rounds, then the low bit is forced to 1 so the stride
/// is odd. If the result has fewer than 24 bit transitions
/// (`popcount(z ^ (z >> 1)) < 24`), xoring with the alternating mask flips
/// every transition, leaving more than 40; the mask is even, so the result
/// stays odd either way.
#[inline]
pub(crate) fn mix_gamma(mut z: u64) -> u64 {
    z = (z ^ (z >> 33)).wrapping_mul(0xFF51AFD7ED558CCD);
    z = (z ^ (z >> 33)).wrapping_mul(0xC4CEB9FE1A85EC53);
    z = (z ^ (z >> 33)) | 1;
    if (z ^ (z >> 1)).count_ones() < 24 {
        z ^ 0xAAAAAAAAAAAAAAAA
    } else {
        z
    }
}
