//! Deterministic random number generation
//!
//! Implements an immutable splittable generator on the SplitMix64
//! construction. CRITICAL: all operations are pure value transformations;
//! nothing in this module mutates state in place.

mod mix;
mod splitmix;

pub use splitmix::SplitRng;
