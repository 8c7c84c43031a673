//! Power propagation and graph-distance queries. All traversals follow wires
//! that currently line up, never raw grid adjacency.

use std::collections::VecDeque;

use crate::board::grid::Board;

/// BFS distance from `start` to every piece, `None` where unreachable.
/// Indexed by flattened board position.
pub fn distances_from(board: &Board, start: usize) -> Vec<Option<u32>> {
    let mut dist = vec![None; board.len()];
    let mut queue = VecDeque::with_capacity(board.len());
    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = dist[current].unwrap_or(0);
        for next in board.connected_neighbors(current) {
            if dist[next].is_none() {
                dist[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// The first piece BFS reaches at the greatest distance from `start`,
/// with that distance.
pub fn furthest_from(board: &Board, start: usize) -> (usize, u32) {
    let mut best = (start, 0);
    let mut dist = vec![None; board.len()];
    let mut queue = VecDeque::with_capacity(board.len());
    dist[start] = Some(0u32);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let d = dist[current].unwrap_or(0);
        for next in board.connected_neighbors(current) {
            if dist[next].is_none() {
                dist[next] = Some(d + 1);
                queue.push_back(next);
                if d + 1 > best.1 {
                    best = (next, d + 1);
                }
            }
        }
    }
    best
}

/// Wire distance between two pieces, `None` if they are not connected.
pub fn distance_between(board: &Board, from: usize, to: usize) -> Option<u32> {
    distances_from(board, from)[to]
}

/// Clear and recompute every piece's powered flag from the power source.
/// With `cap` set, only pieces within that many links are powered.
/// Returns the number of powered pieces.
pub fn update_power(board: &mut Board, cap: Option<u32>) -> usize {
    let dist = distances_from(board, board.power_source_index());
    let mut powered = 0;
    for (i, d) in dist.into_iter().enumerate() {
        let on = match (d, cap) {
            (Some(d), Some(cap)) => d <= cap,
            (Some(_), None) => true,
            (None, _) => false,
        };
        board.piece_mut(i).set_powered(on);
        if on {
            powered += 1;
        }
    }
    powered
}

/// Half the tree's diameter plus one, found with a double BFS sweep from the
/// power source. Exact only on trees, so call it before scrambling.
pub fn calculate_radius(board: &Board) -> u32 {
    let (a, _) = furthest_from(board, board.power_source_index());
    let (b, _) = furthest_from(board, a);
    let diameter = distance_between(board, a, b).unwrap_or(0);
    diameter / 2 + 1
}
