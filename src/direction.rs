use strum::VariantArray;

use crate::location::Location;

/// One of the four directions a tile connector may face on the square lattice.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    /// Toward row 0.
    UP,
    /// Toward the last row.
    DOWN,
    /// Toward column 0.
    LEFT,
    /// Toward the last column.
    RIGHT,
}

impl Direction {
    /// The location reached by stepping one cell this way from `location`.
    ///
    /// Steps off the top or left edge wrap to a huge coordinate and fail any later bounds check.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UP => location.offset_by((0, -1)),
            Self::DOWN => location.offset_by((0, 1)),
            Self::LEFT => location.offset_by((-1, 0)),
            Self::RIGHT => location.offset_by((1, 0)),
        }
    }

    /// The direction facing back at this one; a connector pointing `d` meets one pointing `d.invert()`.
    pub fn invert(&self) -> Self {
        match self {
            Self::UP => Self::DOWN,
            Self::DOWN => Self::UP,
            Self::LEFT => Self::RIGHT,
            Self::RIGHT => Self::LEFT,
        }
    }

    /// Where a connector facing this way points after one clockwise quarter turn of its tile.
    pub(crate) fn rotated(&self) -> Self {
        match self {
            Self::UP => Self::RIGHT,
            Self::RIGHT => Self::DOWN,
            Self::DOWN => Self::LEFT,
            Self::LEFT => Self::UP,
        }
    }

    /// The single step taking `a` to `b`, if the two locations are lattice-adjacent.
    pub(crate) fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    /// Whether this direction moves along the vertical axis.
    pub(crate) fn is_vertical(&self) -> bool {
        matches!(self, Self::UP | Self::DOWN)
    }
}
