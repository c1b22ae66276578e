//! Random draw helpers over an injected RNG.
//!
//! Every random decision in the sampler flows through `&mut dyn RngCore`, so
//! callers control the stream (seeded [`rand::rngs::StdRng`] by default) and
//! tests can substitute scripted sequences to pin down exact draws.
use rand::RngCore;

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    // 24 bits of mantissa keeps the result strictly below 1.0.
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

/// Draw a uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    ((rand01(rng) * len as f32) as usize).min(len - 1)
}
