//! String seeds and the reproducible random stream derived from them
//!
//! Both steps are fixed integer algorithms so that a given seed string
//! produces the same world on every platform and in every build.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Order-sensitive 32-bit FNV-1a hash over the UTF-16 code units of `seed`
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ unit as u32).wrapping_mul(FNV_PRIME)
    })
}

/// Mulberry32 pseudo-random stream
///
/// Tiny state, full 2^32 period, and bit-exact across implementations,
/// which is all terrain generation needs from it.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a stream from a numeric seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a stream from a seed string via [`hash_seed`]
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}
