/*!
# Zero-Weight Cycle Check

Retiming requires the zero-weight subgraph of `G` to be acyclic. This module checks that
precondition with a DFS carrying an on-stack marker, recursing only along zero-weight edges —
mirroring the traversal discipline of the tool this crate's algorithm was distilled from (see the
Design Note on `visited` in `DESIGN.md`).
*/

use crate::core::circuit::CircuitGraph;

/// Returns `true` if the zero-weight subgraph of `circuit` contains a directed cycle.
pub fn has_zero_weight_cycle(circuit: &CircuitGraph) -> bool {
    let n = circuit.vertex_count();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];

    for start in 0..n {
        if !visited[start] && visit(circuit, start, &mut visited, &mut on_stack) {
            return true;
        }
    }
    false
}

fn visit(circuit: &CircuitGraph, v: usize, visited: &mut [bool], on_stack: &mut [bool]) -> bool {
    visited[v] = true;
    on_stack[v] = true;

    for (target, weight) in circuit.outgoing_edges(v) {
        if weight != 0 {
            continue;
        }
        if on_stack[target] {
            return true;
        }
        if !visited[target] && visit(circuit, target, visited, on_stack) {
            return true;
        }
    }

    on_stack[v] = false;
    false
}
