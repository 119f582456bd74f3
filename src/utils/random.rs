//! Random integers in a range.
//!
//! Uses `rand`'s thread-local generator, which is not suitable for secrets.

use rand::Rng;

/// Uniform integer in `min..=max`.
///
/// Swapped bounds are accepted and treated as `max..=min`.
pub fn random_num(min: i64, max: i64) -> i64 {
    random_num_with(&mut rand::thread_rng(), min, max)
}

/// [`random_num`] drawing from a caller-supplied generator.
pub fn random_num_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}
