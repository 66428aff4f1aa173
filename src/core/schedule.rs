/*!
# BFS Scheduler

Assigns integer schedule times to vertices of the retimed graph via a breadth-first traversal
rooted at [`SOURCE`](crate::core::circuit::SOURCE).

The root is seeded with `s[SOURCE] = delays[0]` rather than `0`. This departs from the textbook
convention of a zero-cost root, but is preserved here for compatibility with the tool this
algorithm was distilled from — see the corresponding Design Note in `DESIGN.md`.
*/

use std::collections::VecDeque;

use crate::core::circuit::{CircuitGraph, SOURCE};

/// Computes the schedule vector `s` by BFS over `circuit`'s (post-retiming) edges.
///
/// Vertices reached more than once keep the value assigned on first visit. Vertices unreachable
/// from [`SOURCE`] are left at `0`.
pub fn schedule(circuit: &CircuitGraph, delays: &[i64]) -> Vec<i64> {
    let n = circuit.vertex_count();
    let mut s = vec![0i64; n];
    let mut visited = vec![false; n];

    s[SOURCE] = delays[0];
    visited[SOURCE] = true;

    let mut queue = VecDeque::new();
    queue.push_back(SOURCE);

    while let Some(u) = queue.pop_front() {
        for (v, weight) in circuit.outgoing_edges(u) {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            s[v] = s[u] + weight;
            queue.push_back(v);
        }
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_seeded_with_delay_zero() {
        let g = CircuitGraph::new(&[7]);
        let s = schedule(&g, &[7]);
        assert_eq!(s, vec![7]);
    }

    #[test]
    fn test_schedule_accumulates_along_bfs_tree() {
        let mut g = CircuitGraph::new(&[2, 0, 0]);
        g.add_edge(0, 1, 3);
        g.add_edge(1, 2, 4);
        let s = schedule(&g, &[2, 0, 0]);
        assert_eq!(s, vec![2, 5, 9]);
    }

    #[test]
    fn test_unreachable_vertex_stays_zero() {
        let mut g = CircuitGraph::new(&[1, 1, 1]);
        g.add_edge(0, 1, 1);
        let s = schedule(&g, &[1, 1, 1]);
        assert_eq!(s[2], 0);
    }
}
