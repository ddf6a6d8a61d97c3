#![warn(missing_docs)]

//! # `galvanize`
//!
//! The engine behind wire-rotation puzzles: a rectangular grid of tiles, each carrying up to four wire
//! connectors, must be rotated until every tile is energized by the single movable power source.
//! Begin by building a puzzle with [`PuzzleBuilder`], choosing dimensions, a wiring [`Bias`], and optionally
//! a seed for reproducible boards.
//! The resulting [`Puzzle`] exposes the play surface: [`rotate_tile_at()`](Puzzle::rotate_tile_at),
//! [`move_source()`](Puzzle::move_source), [`check_win()`](Puzzle::check_win), and
//! [`reset()`](Puzzle::reset), plus read access to every tile's connector, source, and powered state.
//!
//! Rendering, windowing, and input dispatch are left to consumers; the engine only exposes logical actions
//! and a [`Display`](std::fmt::Display) impl drawing the board as box-drawing glyphs.
//!
//! # Internals
//! Board wiring is a spanning tree selected by Kruskal's algorithm: every adjacency of the grid lattice
//! becomes a candidate edge with a random weight, the candidates are stably sorted, and a disjoint-set merge
//! accepts the subset forming a tree.
//! A bias skews the weight distribution so one axis of the lattice is wired preferentially, producing
//! elongated layouts.
//! The accepted tree fixes each tile's connector shape; a scramble pass then rotates every tile a random
//! number of quarter turns.
//!
//! Energization is recomputed from scratch after every mutation: a breadth-first traversal from the source
//! tile crosses an adjacency only when the two facing connectors are both present, which models electrical
//! continuity through the wiring.

pub use builder::PuzzleBuilder;
pub use direction::Direction;
pub use error::PuzzleError;
pub use generator::Bias;
pub use location::{Dimension, Location};
pub use puzzle::Puzzle;
pub use tile::Tile;

pub(crate) mod builder;
pub(crate) mod direction;
pub(crate) mod error;
pub(crate) mod generator;
pub(crate) mod location;
pub(crate) mod propagation;
pub(crate) mod puzzle;
pub(crate) mod tile;
pub(crate) mod union_find;
