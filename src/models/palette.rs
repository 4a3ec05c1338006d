//! Display colors for jobs and workcenters.
//!
//! Colors are presentation data only. The palette is owned by the caller
//! and drawn from explicitly, so two scheduling runs never influence
//! each other through shared color state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// An RGB color. Serializes as a three-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Channel levels of the palette grid (4 levels per channel, 64 colors).
const LEVELS: [u8; 4] = [0, 64, 128, 192];

/// A finite pool of distinct colors, handed out one at a time.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Rgb>,
}

impl ColorPalette {
    /// The full 64-color grid in channel order, unshuffled.
    pub fn ordered() -> Self {
        let mut colors = Vec::with_capacity(LEVELS.len().pow(3));
        for &r in &LEVELS {
            for &g in &LEVELS {
                for &b in &LEVELS {
                    colors.push(Rgb(r, g, b));
                }
            }
        }
        Self { colors }
    }

    /// The full grid shuffled with the given RNG.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut palette = Self::ordered();
        palette.colors.shuffle(rng);
        palette
    }

    /// The full grid shuffled with a seeded RNG (reproducible).
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Takes the next color. `None` once the palette is exhausted.
    pub fn next_color(&mut self) -> Option<Rgb> {
        self.colors.pop()
    }

    /// Colors left in the pool.
    pub fn remaining(&self) -> usize {
        self.colors.len()
    }
}
