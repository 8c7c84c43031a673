//! Maze generation: randomized Kruskal over the grid graph, then a scramble
//! pass that hides the tree by rotating every piece.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::board::direction::Direction;
use crate::board::grid::Board;
use crate::board::rng::Rng;
use crate::board::union_find::UnionFind;

/// Edge-weight distribution used during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a UI level (1 = easy, 2 = medium, 3 = hard).
    pub fn from_level(level: u32) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn level(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn weight_range(self) -> Range<u32> {
        match self {
            Difficulty::Easy => 0..50,
            Difficulty::Medium => 0..100,
            Difficulty::Hard => 50..200,
        }
    }
}

/// Candidate link between two pieces. Only lives during generation.
#[derive(Debug, Clone, Copy)]
struct Edge {
    from: usize,
    to: usize,
    weight: u32,
}

/// Every neighbor pair once: right and down for each cell, plus up-left and
/// up-right in extended mode.
fn candidate_edges(board: &Board, difficulty: Difficulty, rng: &mut Rng) -> Vec<Edge> {
    let mut dirs = vec![Direction::E, Direction::S];
    if board.mode().is_extended() {
        dirs.extend([Direction::NW, Direction::NE]);
    }

    let mut edges = Vec::with_capacity(board.len() * dirs.len());
    for row in 0..board.height() {
        for col in 0..board.width() {
            let from = row * board.width() + col;
            for &dir in &dirs {
                if let Some((r, c)) = board.neighbor(row, col, dir) {
                    edges.push(Edge {
                        from,
                        to: r * board.width() + c,
                        weight: rng.next_in(difficulty.weight_range()),
                    });
                }
            }
        }
    }
    edges
}

/// Wire `board` into a spanning tree with randomized Kruskal.
/// Returns the number of links added (always `len - 1`).
pub fn generate(board: &mut Board, difficulty: Difficulty, rng: &mut Rng) -> usize {
    let mut edges = candidate_edges(board, difficulty, rng);
    edges.sort_by_key(|e| e.weight);

    let mut sets = UnionFind::new(board.len());
    let mut links = 0;
    for edge in edges {
        if sets.union(edge.from, edge.to) && board.link(edge.from, edge.to) {
            links += 1;
        }
    }

    log::debug!(
        "maze: {}x{} {:?} {:?}, {} links",
        board.width(),
        board.height(),
        board.mode(),
        difficulty,
        links
    );
    links
}

/// Rotate every piece a random number of times so the tree is not visible.
pub fn scramble(board: &mut Board, rng: &mut Rng) {
    let mode = board.mode();
    for piece in board.pieces_mut() {
        for _ in 0..rng.next_int(mode.rotation_steps()) {
            piece.rotate(mode);
        }
    }
}
