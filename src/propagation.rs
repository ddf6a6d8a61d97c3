//! Power propagation: full breadth-first recomputation of every tile's `powered` flag.

use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use strum::VariantArray;
use tracing::trace;

use crate::direction::Direction;
use crate::location::Location;
use crate::tile::Tile;

/// Recomputes every `powered` flag from scratch, energizing exactly the tiles reachable from `source`
/// through matched connector pairs.
///
/// Power crosses an adjacency only when the near tile's connector facing the neighbor and the neighbor's
/// connector facing back are both present. Each location is enqueued at most once, so the pass is linear in
/// the number of tiles. The source tile itself is always energized, connectors or not.
pub(crate) fn propagate(tiles: &mut Array2<Tile>, source: Location) {
    for tile in tiles.iter_mut() {
        tile.power_off();
    }

    let mut seen = HashSet::with_capacity(tiles.len());
    let mut worklist = VecDeque::new();
    seen.insert(source);
    worklist.push_back(source);

    while let Some(here) = worklist.pop_front() {
        tiles[here.as_index()].power_on();

        for dir in Direction::VARIANTS {
            let next = dir.attempt_from(here);
            let Some(neighbor) = tiles.get(next.as_index()) else {
                continue;
            };
            if tiles[here.as_index()].connects(*dir) && neighbor.connects(dir.invert()) && seen.insert(next) {
                worklist.push_back(next);
            }
        }
    }

    trace!(powered = seen.len(), "propagation pass complete");
}
