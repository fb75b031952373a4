//! RNG module - seedable random source and piece generation
//!
//! Pieces are produced by a [`PieceGenerator`] that reads from any
//! [`RandomSource`]. The default source is a small LCG, so a seed fully
//! determines the piece sequence.
//!
//! Two randomizers are available:
//! - [`Randomizer::Uniform`]: every draw picks one of the 7 kinds with equal
//!   probability, independent of history. Repeats and droughts are possible.
//! - [`Randomizer::SevenBag`]: draws from a shuffled bag of all 7 kinds and
//!   refills when empty.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Value in `[0, bound)`. `bound` must be nonzero.
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        // The low bits of a power-of-two LCG have short periods; use the high half.
        (self.next_u32() >> 16) % bound
    }
}

/// Piece selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    SevenBag,
}

impl Randomizer {
    /// Name shown in the end-of-game summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::SevenBag => "bag",
        }
    }
}

/// Produces spawn-ready pieces.
#[derive(Debug, Clone)]
pub struct PieceGenerator<R = SimpleRng> {
    rng: R,
    randomizer: Randomizer,
    /// Remaining kinds of the current bag, drawn from the back.
    bag: ArrayVec<PieceKind, 7>,
}

impl PieceGenerator<SimpleRng> {
    /// Uniform generator over the default LCG.
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed), Randomizer::Uniform)
    }
}

impl<R: RandomSource> PieceGenerator<R> {
    pub fn new(rng: R, randomizer: Randomizer) -> Self {
        Self {
            rng,
            randomizer,
            bag: ArrayVec::new(),
        }
    }

    /// Draw the next kind.
    pub fn next_kind(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let i = self.rng.next_below(PieceKind::LEN as u32) as usize;
                PieceKind::ALL[i % PieceKind::LEN]
            }
            Randomizer::SevenBag => {
                if self.bag.is_empty() {
                    self.refill_bag();
                }
                self.bag.pop().expect("Piece bag should never be empty")
            }
        }
    }

    /// Draw the next piece, positioned at its spawn offset.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }

    /// Generate a new shuffled bag (Fisher-Yates)
    fn refill_bag(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        for i in (1..self.bag.len()).rev() {
            let j = self.rng.next_below((i + 1) as u32) as usize;
            self.bag.swap(i, j);
        }
    }
}
