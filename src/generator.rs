//! Maze generation: weighted candidate edges over the grid lattice, reduced to a spanning tree by
//! Kruskal's algorithm.

use std::str::FromStr;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use rand::rngs::SmallRng;
use rand::Rng;
use strum::VariantArray;
use tracing::debug;
use unordered_pair::UnorderedPair;

use crate::direction::Direction;
use crate::error::PuzzleError;
use crate::location::{Dimension, Location};
use crate::union_find::DisjointSet;

/// Which lattice axis maze generation wires preferentially.
///
/// Under a biased mode, candidate edges on the de-emphasized axis all draw weight 0 and are accepted into
/// the tree first, elongating the wiring along that axis; the other axis draws from the full weight range.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Bias {
    /// No preference; every candidate draws from the full weight range.
    #[default]
    Normal,
    /// De-emphasizes the vertical axis: vertical candidates draw weight 0 and join the tree first.
    Horizontal,
    /// De-emphasizes the horizontal axis: horizontal candidates draw weight 0 and join the tree first.
    Vertical,
}

impl FromStr for Bias {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(PuzzleError::InvalidConfiguration(other.to_owned())),
        }
    }
}

/// An adjacency of the lattice plus the weight it drew for this generation pass.
///
/// Candidates exist only while the maze is generated; the accepted subset becomes tile wiring and the rest
/// are discarded.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct CandidateEdge {
    pub(crate) nodes: UnorderedPair<Location>,
    pub(crate) weight: usize,
}

/// Every location of a `dims` board in row-major order.
pub(crate) fn all_locations(dims: (Dimension, Dimension)) -> impl Iterator<Item = Location> {
    (0..dims.1.get())
        .cartesian_product(0..dims.0.get())
        .map(|(y, x)| Location(x, y))
}

fn in_bounds(location: Location, dims: (Dimension, Dimension)) -> bool {
    location.0 < dims.0.get() && location.1 < dims.1.get()
}

/// Enumerates candidate edges in the fixed scan order: row-major over tiles, and per tile up, down, left,
/// right.
///
/// Under [`Bias::Normal`] every neighbor present yields a candidate, so each interior adjacency is
/// enumerated twice with independent weights. Under a biased mode each tile yields at most one vertical
/// candidate (up if present, else down) and at most one horizontal candidate (left if present, else right);
/// the de-emphasized axis draws from `[0, 1)`, which is always 0 but still advances the generator.
pub(crate) fn enumerate_edges(
    dims: (Dimension, Dimension),
    bias: Bias,
    rng: &mut SmallRng,
) -> Vec<CandidateEdge> {
    let (width, height) = (dims.0.get(), dims.1.get());
    let span = width * height;
    let mut edges = Vec::with_capacity(match bias {
        // every interior adjacency is seen from both endpoints
        Bias::Normal => 2 * ((width - 1) * height + (height - 1) * width),
        // at most one candidate per axis per tile
        Bias::Horizontal | Bias::Vertical => 2 * span,
    });

    let mut push = |here: Location, dir: Direction, weight: usize| {
        edges.push(CandidateEdge {
            nodes: UnorderedPair::from((here, dir.attempt_from(here))),
            weight,
        });
    };

    for here in all_locations(dims) {
        match bias {
            Bias::Normal => {
                for dir in Direction::VARIANTS {
                    if in_bounds(dir.attempt_from(here), dims) {
                        let weight = rng.gen_range(0..span);
                        push(here, *dir, weight);
                    }
                }
            }
            Bias::Horizontal | Bias::Vertical => {
                let favored_vertical = bias == Bias::Vertical;
                for axis in [[Direction::UP, Direction::DOWN], [Direction::LEFT, Direction::RIGHT]] {
                    let Some(dir) = axis.into_iter().find(|dir| in_bounds(dir.attempt_from(here), dims))
                    else {
                        continue;
                    };
                    let weight = if dir.is_vertical() == favored_vertical {
                        rng.gen_range(0..span)
                    } else {
                        rng.gen_range(0..1)
                    };
                    push(here, dir, weight);
                }
            }
        }
    }

    edges
}

/// Kruskal's selection over an already-sorted worklist.
///
/// Processing stops once a single edge remains, so the heaviest candidate is never examined; with every
/// adjacency enumerated at least twice (or at least once per row/column on biased boards with both
/// dimensions above one) the dropped edge is always redundant and the result spans the board.
pub(crate) fn kruskal(
    nodes: impl IntoIterator<Item = Location>,
    sorted_edges: &[CandidateEdge],
) -> Result<Vec<CandidateEdge>, PuzzleError> {
    let mut classes = DisjointSet::with_nodes(nodes);
    let mut tree = Vec::new();

    let worklist = &sorted_edges[..sorted_edges.len().saturating_sub(1)];
    for edge in worklist {
        let UnorderedPair(from, to) = edge.nodes;
        if classes.find(from)? != classes.find(to)? {
            tree.push(*edge);
            classes.union(from, to)?;
        }
    }

    Ok(tree)
}

/// Draws, sorts, and selects the wiring for a `dims` board, returning it as a graph over locations.
///
/// The sort is stable, so equal weights keep their enumeration order; together with a seeded `rng` this
/// makes the whole layout reproducible.
pub(crate) fn spanning_tree(
    dims: (Dimension, Dimension),
    bias: Bias,
    rng: &mut SmallRng,
) -> Result<UnGraphMap<Location, usize>, PuzzleError> {
    let candidates = enumerate_edges(dims, bias, rng)
        .into_iter()
        .sorted_by_key(|edge| edge.weight)
        .collect_vec();
    let accepted = kruskal(all_locations(dims), &candidates)?;
    debug!(
        width = dims.0.get(),
        height = dims.1.get(),
        ?bias,
        candidates = candidates.len(),
        accepted = accepted.len(),
        "selected spanning wiring"
    );

    let mut tree = UnGraphMap::with_capacity(dims.0.get() * dims.1.get(), accepted.len());
    for location in all_locations(dims) {
        tree.add_node(location);
    }
    for edge in &accepted {
        tree.add_edge(edge.nodes.0, edge.nodes.1, edge.weight);
    }

    Ok(tree)
}
