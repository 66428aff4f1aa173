/*!
# Bellman–Ford Solver

Single-source shortest paths from the PC graph's synthetic origin, with negative-cycle detection.
Implemented directly over `MatrixGraph` rather than through a graph-library routine: the algorithm
is short enough on its own, and petgraph's own Bellman–Ford works over its sparse graph type, not
conveniently over the dense `MatrixGraph` this pipeline uses for `G_pc`.
*/

use crate::core::error::RetimingError;
use crate::core::pc::{PcGraph, ORIGIN};

/// A distance comfortably larger than any sum of at most `N + 1` real PC edge weights can reach,
/// yet far enough from `i64::MAX` to tolerate repeated relaxation additions without overflow.
const UNREACHABLE: i64 = i64::MAX / 4;

/// Runs Bellman–Ford from [`ORIGIN`] over `graph`, returning the distance vector indexed by
/// `NodeIndex`.
///
/// # Errors
///
/// Returns [`RetimingError::NegativeCycleInPc`] if a negative-weight cycle is reachable from the
/// origin.
pub fn solve(graph: &PcGraph) -> Result<Vec<i64>, RetimingError> {
    let n = graph.node_count();
    let mut dist = vec![UNREACHABLE; n];
    dist[ORIGIN] = 0;

    for _ in 0..n.saturating_sub(1) {
        let mut changed = false;
        for a in graph.node_identifiers() {
            if dist[a.index()] == UNREACHABLE {
                continue;
            }
            for b in graph.node_identifiers() {
                if !graph.has_edge(a, b) {
                    continue;
                }
                let candidate = dist[a.index()] + graph.edge_weight(a, b);
                if candidate < dist[b.index()] {
                    dist[b.index()] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    for a in graph.node_identifiers() {
        if dist[a.index()] == UNREACHABLE {
            continue;
        }
        for b in graph.node_identifiers() {
            if !graph.has_edge(a, b) {
                continue;
            }
            if dist[a.index()] + graph.edge_weight(a, b) < dist[b.index()] {
                return Err(RetimingError::NegativeCycleInPc);
            }
        }
    }

    Ok(dist)
}
