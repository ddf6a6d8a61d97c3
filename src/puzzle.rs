use std::fmt::{Display, Formatter};

use ndarray::Array2;
use strum::VariantArray;
use tracing::debug;

use crate::builder::PuzzleBuilder;
use crate::direction::Direction;
use crate::error::PuzzleError;
use crate::generator::Bias;
use crate::location::{Dimension, Location};
use crate::propagation;
use crate::tile::Tile;

/// A generated, playable wiring puzzle.
///
/// Owns the board and all play state exclusively; every command runs to completion and leaves the board
/// fully consistent, with the `powered` flags recomputed before the next command is accepted.
/// Build one with [`PuzzleBuilder`].
pub struct Puzzle {
    pub(crate) tiles: Array2<Tile>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) source: Location,
    pub(crate) bias: Bias,
    pub(crate) won: bool,
    pub(crate) rotations: u32,
}

impl Puzzle {
    /// Board width in tiles.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Board height in tiles.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// The bias the current wiring was generated with.
    pub fn bias(&self) -> Bias {
        self.bias
    }

    /// Where the power source currently sits.
    pub fn source(&self) -> Location {
        self.source
    }

    /// Whether the puzzle has been won. Set only by [`check_win()`](Self::check_win); cleared only by
    /// [`reset()`](Self::reset).
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// How many tile rotations have been applied since the last reset.
    pub fn rotations(&self) -> u32 {
        self.rotations
    }

    /// The tile at `location`, or [`PuzzleError::OutOfBounds`].
    pub fn tile_at(&self, location: Location) -> Result<&Tile, PuzzleError> {
        self.tiles.get(location.as_index()).ok_or(PuzzleError::OutOfBounds {
            location,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The subset of the four directions leading to a tile that exists, with the location each reaches.
    /// The board never wraps around.
    pub fn neighbors(&self, location: Location) -> Vec<(Direction, Location)> {
        Direction::VARIANTS
            .iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .filter(|(_, there)| self.tiles.get(there.as_index()).is_some())
            .collect()
    }

    fn in_bounds(&self, location: Location) -> bool {
        self.tiles.get(location.as_index()).is_some()
    }

    /// Rotates the tile at `location` one quarter turn clockwise, then recomputes power and re-evaluates
    /// the win predicate.
    ///
    /// A no-op when `location` is out of bounds or the puzzle is already won.
    pub fn rotate_tile_at(&mut self, location: Location) {
        if self.won || !self.in_bounds(location) {
            return;
        }

        self.tiles[location.as_index()].rotate();
        self.rotations += 1;
        self.propagate();
        self.check_win();
    }

    /// Attempts to relocate the power source one tile toward `direction`, returning whether it moved.
    ///
    /// The move succeeds only when the puzzle is not yet won, the target tile exists, and the source tile
    /// and target tile carry the facing connector pair; relocation rides the same physical connection power
    /// does. On failure nothing changes.
    pub fn move_source(&mut self, direction: Direction) -> bool {
        if self.won {
            return false;
        }

        let target = direction.attempt_from(self.source);
        if !self.in_bounds(target) {
            return false;
        }
        if !self.tiles[self.source.as_index()].connects(direction)
            || !self.tiles[target.as_index()].connects(direction.invert())
        {
            return false;
        }

        self.tiles[self.source.as_index()].remove_source();
        self.tiles[target.as_index()].place_source();
        self.source = target;
        self.propagate();
        true
    }

    /// Evaluates the win predicate: the puzzle is won once every tile is powered. Returns the (possibly
    /// newly set) win flag, which never clears until [`reset()`](Self::reset).
    pub fn check_win(&mut self) -> bool {
        if !self.won && self.tiles.iter().all(Tile::is_powered) {
            self.won = true;
            debug!(rotations = self.rotations, "puzzle solved");
        }
        self.won
    }

    /// Discards the board and generates a fresh one with the given bias: new wiring, new scramble, source
    /// back at the top left, counters and win flag cleared, power recomputed.
    ///
    /// Pass a seed to make the new board reproducible; `None` draws one from the OS.
    pub fn reset(&mut self, bias: Bias, seed: Option<u64>) -> Result<(), PuzzleError> {
        let mut builder = PuzzleBuilder::with_dims(self.dims);
        builder.bias(bias);
        if let Some(seed) = seed {
            builder.seed(seed);
        }
        *self = builder.build()?;
        Ok(())
    }

    pub(crate) fn propagate(&mut self) {
        propagation::propagate(&mut self.tiles, self.source);
    }

    /// Builds a puzzle directly from explicit wiring: each pair of adjacent locations in `edges` gets its
    /// facing connector pair, the source starts at the top left, and power is propagated once. No scramble
    /// is applied. Non-adjacent pairs are ignored.
    #[cfg(test)]
    pub(crate) fn from_wiring(dims: (Dimension, Dimension), edges: &[(Location, Location)]) -> Self {
        let mut tiles = Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Tile::default);
        for (from, to) in edges {
            if let Some(dir) = Direction::direction_to(*from, *to) {
                tiles[from.as_index()].connect(dir);
                tiles[to.as_index()].connect(dir.invert());
            }
        }

        let source = Location(0, 0);
        tiles[source.as_index()].place_source();
        let mut puzzle = Self {
            tiles,
            dims,
            source,
            bias: Bias::Normal,
            won: false,
            rotations: 0,
        };
        puzzle.propagate();
        puzzle
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
