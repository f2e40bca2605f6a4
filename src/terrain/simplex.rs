//! Seeded 2D simplex noise
//!
//! The permutation table is shuffled from a [`Mulberry32`] stream, so the
//! whole field is a pure function of the seed string. The type plugs into
//! the `noise` crate through [`NoiseFn`].

use noise::NoiseFn;

use super::seed::Mulberry32;

const TABLE_SIZE: usize = 512;

/// Skew factor: 0.5 * (sqrt(3) - 1)
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor: (3 - sqrt(3)) / 6
const G2: f64 = 0.211_324_865_405_187_13;

/// 12 gradient directions as (x, y) pairs
const GRAD2: [f64; 24] = [
    1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, -1.0,
    1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0,
    0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0,
];

/// 2D simplex noise with a seed-derived permutation table, output in [-1, 1]
#[derive(Clone)]
pub struct SeededSimplex {
    perm: [u8; TABLE_SIZE],
    grad_x: [f64; TABLE_SIZE],
    grad_y: [f64; TABLE_SIZE],
}

impl SeededSimplex {
    /// Build noise from a seed string
    pub fn from_seed_str(seed: &str) -> Self {
        Self::from_stream(&mut Mulberry32::from_seed_str(seed))
    }

    /// Build noise by drawing the permutation shuffle from `rng`
    pub fn from_stream(rng: &mut Mulberry32) -> Self {
        let mut perm = [0u8; TABLE_SIZE];
        for (i, p) in perm.iter_mut().take(TABLE_SIZE / 2).enumerate() {
            *p = i as u8;
        }
        for i in 0..TABLE_SIZE / 2 - 1 {
            let r = i + (rng.next_f64() * (256 - i) as f64) as usize;
            perm.swap(i, r);
        }
        for i in TABLE_SIZE / 2..TABLE_SIZE {
            perm[i] = perm[i - TABLE_SIZE / 2];
        }

        let mut grad_x = [0.0; TABLE_SIZE];
        let mut grad_y = [0.0; TABLE_SIZE];
        for (i, &p) in perm.iter().enumerate() {
            let g = (p as usize % 12) * 2;
            grad_x[i] = GRAD2[g];
            grad_y[i] = GRAD2[g + 1];
        }

        Self { perm, grad_x, grad_y }
    }

    /// Permutation table entry (exposed for parity checks)
    pub fn perm(&self, index: usize) -> u8 {
        self.perm[index % TABLE_SIZE]
    }

    /// Sample the noise field at (x, y)
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;
        let t = (i + j) as f64 * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Which of the two triangles in the skewed cell we are in
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;

        let n0 = self.corner(x0, y0, ii + self.perm[jj] as usize);
        let n1 = self.corner(x1, y1, ii + i1 + self.perm[jj + j1] as usize);
        let n2 = self.corner(x2, y2, ii + 1 + self.perm[jj + 1] as usize);

        70.0 * (n0 + n1 + n2)
    }

    fn corner(&self, x: f64, y: f64, gi: usize) -> f64 {
        let mut t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        t *= t;
        t * t * (self.grad_x[gi] * x + self.grad_y[gi] * y)
    }
}

impl NoiseFn<f64, 2> for SeededSimplex {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

impl std::fmt::Debug for SeededSimplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededSimplex")
            .field("perm", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}
