/*!
# Retiming Application

Applies the solved retiming vector `r` to the main graph's edge weights: `w'(u, v) = w(u, v) +
r[v] - r[u]`. The `+1` origin offset between `G`'s vertex ids and `G_pc`'s vertex ids is isolated
behind [`pc_index`] so it is never applied inconsistently across this module.
*/

use crate::core::circuit::CircuitGraph;

/// Maps a main-graph vertex id to its corresponding index in the retiming distance vector `r`,
/// which is one longer than `G` to make room for the PC graph's synthetic origin at index 0.
#[inline]
pub fn pc_index(vertex: usize) -> usize {
    vertex + 1
}

/// Applies `r` to every edge of `circuit` in place: `w' = w + r[pc_index(v)] - r[pc_index(u)]`.
///
/// After this pass every edge weight is non-negative — a theorem of the algorithm when `r` was
/// produced by a solver that terminated without reporting a negative cycle. A violation here
/// indicates a bug upstream rather than a recoverable input condition, so it is asserted rather
/// than surfaced as a `Result`.
pub fn apply_retiming(circuit: &mut CircuitGraph, r: &[i64]) {
    let edges: Vec<(usize, usize, i64)> = circuit.edges().collect();
    for (u, v, w) in edges {
        let new_weight = w + r[pc_index(v)] - r[pc_index(u)];
        debug_assert!(
            new_weight >= 0,
            "retiming produced a negative edge weight on ({u}, {v})"
        );
        circuit.set_edge_weight(u, v, new_weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pc_index_offset() {
        assert_eq!(pc_index(0), 1);
        assert_eq!(pc_index(5), 6);
    }

    #[test]
    fn test_apply_retiming_updates_weights() {
        let mut g = CircuitGraph::new(&[0, 0, 0]);
        g.add_edge(0, 1, 3);
        g.add_edge(1, 2, 1);
        // r indexed by pc_index: r[0] is the origin, r[1..=3] correspond to vertices 0..=2.
        let r = vec![0, 0, 1, 1];
        apply_retiming(&mut g, &r);
        let mut edges: Vec<_> = g.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(0, 1, 4), (1, 2, 1)]);
    }
}
