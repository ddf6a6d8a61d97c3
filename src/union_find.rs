//! Union-find (disjoint set union) over board locations, used while selecting the spanning tree.
//!
//! The generator processes candidate edges in non-decreasing weight order and merges connectivity classes as
//! edges are accepted. Representatives are kept in a map from location to location; a class representative is
//! the location that maps to itself. `find` chases the map without rewriting it, so representative chains
//! stay exactly as the unions built them.

use std::collections::HashMap;

use crate::error::PuzzleError;
use crate::location::Location;

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    representatives: HashMap<Location, Location>,
}

impl DisjointSet {
    /// Registers every location as its own representative.
    pub(crate) fn with_nodes(nodes: impl IntoIterator<Item = Location>) -> Self {
        Self {
            representatives: nodes.into_iter().map(|node| (node, node)).collect(),
        }
    }

    /// The representative of `node`'s connectivity class.
    ///
    /// Fails with [`PuzzleError::UnregisteredNode`] if the chase reaches a location that was never
    /// registered.
    pub(crate) fn find(&self, node: Location) -> Result<Location, PuzzleError> {
        let mut current = node;
        loop {
            let next = *self
                .representatives
                .get(&current)
                .ok_or(PuzzleError::UnregisteredNode(current))?;
            if next == current {
                return Ok(current);
            }
            current = next;
        }
    }

    /// Merges the class of `from` into the class of `to`. A no-op when they already share a representative.
    pub(crate) fn union(&mut self, from: Location, to: Location) -> Result<(), PuzzleError> {
        let from_root = self.find(from)?;
        let to_root = self.find(to)?;
        self.representatives.insert(from_root, to_root);
        Ok(())
    }
}
