use std::num::NonZero;

use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::direction::Direction;
use crate::error::PuzzleError;
use crate::generator::{self, Bias};
use crate::location::{Dimension, Location};
use crate::puzzle::Puzzle;
use crate::tile::Tile;

/// Builds a fully generated [`Puzzle`]: wiring selected, connectors frozen, tiles scrambled, source placed
/// at the top left, and power propagated once.
///
/// ```
/// use std::num::NonZero;
///
/// use galvanize::{Bias, PuzzleBuilder};
///
/// let puzzle = PuzzleBuilder::with_dims((NonZero::new(7).unwrap(), NonZero::new(7).unwrap()))
///     .bias(Bias::Horizontal)
///     .seed(17)
///     .build()
///     .unwrap();
/// assert_eq!(puzzle.width(), 7);
/// ```
pub struct PuzzleBuilder {
    // width, height
    dims: (Dimension, Dimension),
    bias: Bias,
    seed: Option<u64>,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl PuzzleBuilder {
    /// Starts a builder for a board of `dims` = (width, height) tiles.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            bias: Bias::default(),
            seed: None,
        }
    }

    /// Sets the wiring [`Bias`].
    pub fn bias(&mut self, bias: Bias) -> &mut Self {
        self.bias = bias;
        self
    }

    /// Seeds the generator; the same seed, dims, and bias always reproduce the same board, scramble
    /// included. Without a seed the generator is drawn from the OS.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Generates the puzzle.
    pub fn build(&self) -> Result<Puzzle, PuzzleError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let tree = generator::spanning_tree(self.dims, self.bias, &mut rng)?;

        // freeze the tree into connector sets: each tile's exits are the directions of its incident edges
        let mut tiles = Array2::from_shape_fn((self.dims.1.get(), self.dims.0.get()), |index| {
            let location = Location::from(index);
            let mut tile = Tile::default();
            for (near, far, _) in tree.edges(location) {
                let neighbor = if near == location { far } else { near };
                // every tree edge joins lattice neighbors, so a direction always exists
                if let Some(dir) = Direction::direction_to(location, neighbor) {
                    tile.connect(dir);
                }
            }
            tile
        });

        let source = Location(0, 0);
        tiles[source.as_index()].place_source();

        // scramble column-major, one draw per tile
        for x in 0..self.dims.0.get() {
            for y in 0..self.dims.1.get() {
                let turns = rng.gen_range(0..4);
                let tile = &mut tiles[(y, x)];
                for _ in 0..turns {
                    tile.rotate();
                }
            }
        }

        debug!(
            width = self.dims.0.get(),
            height = self.dims.1.get(),
            bias = ?self.bias,
            seeded = self.seed.is_some(),
            "built puzzle"
        );

        let mut puzzle = Puzzle {
            tiles,
            dims: self.dims,
            source,
            bias: self.bias,
            won: false,
            rotations: 0,
        };
        puzzle.propagate();
        Ok(puzzle)
    }
}
