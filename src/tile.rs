use std::collections::HashSet;
use std::mem;

use crate::direction::Direction;

/// A single cell of the board: up to four wire connectors, plus the source and powered markers.
///
/// A tile's connector set is fixed by maze generation and only ever permuted by [`rotate()`](Tile::rotate);
/// the `powered` flag is derived state, rewritten wholesale on every propagation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    exits: HashSet<Direction>,
    source: bool,
    powered: bool,
}

impl Tile {
    /// Whether this tile has a connector facing `direction`.
    pub fn connects(&self, direction: Direction) -> bool {
        self.exits.contains(&direction)
    }

    /// Whether this tile has a connector facing up.
    pub fn has_up(&self) -> bool {
        self.connects(Direction::UP)
    }

    /// Whether this tile has a connector facing down.
    pub fn has_down(&self) -> bool {
        self.connects(Direction::DOWN)
    }

    /// Whether this tile has a connector facing left.
    pub fn has_left(&self) -> bool {
        self.connects(Direction::LEFT)
    }

    /// Whether this tile has a connector facing right.
    pub fn has_right(&self) -> bool {
        self.connects(Direction::RIGHT)
    }

    /// Whether the power source sits on this tile.
    pub fn is_source(&self) -> bool {
        self.source
    }

    /// Whether the last propagation pass reached this tile.
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// How many connectors this tile carries.
    pub fn degree(&self) -> usize {
        self.exits.len()
    }

    /// Turns the tile one quarter turn clockwise: the connector facing left now faces up, up faces right,
    /// right faces down, and down faces left. Four turns restore the original set.
    pub fn rotate(&mut self) {
        self.exits = mem::take(&mut self.exits).into_iter().map(|dir| dir.rotated()).collect();
    }

    pub(crate) fn connect(&mut self, direction: Direction) {
        self.exits.insert(direction);
    }

    pub(crate) fn place_source(&mut self) {
        self.source = true;
    }

    pub(crate) fn remove_source(&mut self) {
        self.source = false;
    }

    pub(crate) fn power_on(&mut self) {
        self.powered = true;
    }

    pub(crate) fn power_off(&mut self) {
        self.powered = false;
    }

    /// The box-drawing glyph for this tile's connector set.
    pub(crate) fn glyph(&self) -> char {
        let key = |dir| self.connects(dir) as usize;
        // connector presence in the order up, down, left, right
        match (key(Direction::UP), key(Direction::DOWN), key(Direction::LEFT), key(Direction::RIGHT)) {
            (0, 0, 0, 0) => '·',
            (1, 0, 0, 0) => '╵',
            (0, 1, 0, 0) => '╷',
            (0, 0, 1, 0) => '╴',
            (0, 0, 0, 1) => '╶',
            (1, 1, 0, 0) => '│',
            (0, 0, 1, 1) => '─',
            (1, 0, 1, 0) => '┘',
            (1, 0, 0, 1) => '└',
            (0, 1, 1, 0) => '┐',
            (0, 1, 0, 1) => '┌',
            (1, 1, 1, 0) => '┤',
            (1, 1, 0, 1) => '├',
            (1, 0, 1, 1) => '┴',
            (0, 1, 1, 1) => '┬',
            (1, 1, 1, 1) => '┼',
            _ => unreachable!(),
        }
    }
}
