//! Random piece generation.
//!
//! Each piece is an independent uniform draw from the 7-entry catalog (no
//! bag). The generator is a small LCG so that a fixed seed reproduces the
//! exact piece sequence, which the tests rely on.

use blockfall_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform, seedable piece drawing.
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
}

impl PieceRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed from the system clock, for interactive play.
    pub fn from_entropy() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| (d.as_secs() as u32).wrapping_add(d.subsec_nanos()))
            .unwrap_or(1);
        Self::new(seed)
    }

    /// Draw the next piece kind.
    pub fn draw(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::COUNT);
        PieceKind::ALL[index as usize]
    }
}
