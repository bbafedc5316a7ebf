//! Splitrand Core - Immutable Splittable PRNG
//!
//! Deterministic pseudorandom number generation with forkable, joinable
//! streams, built on the SplitMix64 construction used by
//! `java.util.SplittableRandom`.
//!
//! # Architecture
//!
//! - **rng**: generator state, stream operations, and the bit-mixing core
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic: same `(seed, gamma)` → same sequence
//! 2. States are immutable values; operations return successor states
//! 3. Every derived gamma is odd with at least 24 bit transitions
//!
//! # Example
//!
//! ```
//! use splitrand_core_rs::SplitRng;
//!
//! let rng = SplitRng::new(42);
//! let (value, rng) = rng.next_i64();
//! let (rng, worker) = rng.fork();
//! # let _ = (value, rng, worker);
//! ```

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::SplitRng;
