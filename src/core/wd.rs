/*!
# W/D Construction — Modified Dijkstra

For every source vertex, runs a Dijkstra variant over the circuit graph that computes the usual
shortest-path weight `W[s][·]` *and*, among all paths attaining that minimum weight, the maximum
accumulated vertex delay `D[s][·]`. Built on a `BinaryHeap<Reverse<_>>` lazy priority queue, the
idiom the reference crate's own path algorithms use throughout `core::paths`.
*/

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::circuit::CircuitGraph;
use crate::core::matrix::{Matrix, INF};

/// Fills one row of `w` and `d` for shortest paths rooted at `source`.
fn wd_from_source(circuit: &CircuitGraph, source: usize, w: &mut Matrix, d: &mut Matrix) {
    let n = circuit.vertex_count();
    let mut parent: Vec<Option<usize>> = vec![None; n];

    w.set(source, source, 0);
    d.set(source, source, circuit.delay(source));

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0i64, source)));

    while let Some(Reverse((dist_u, u))) = heap.pop() {
        if dist_u > w.get(source, u) {
            continue;
        }

        for (v, weight) in circuit.outgoing_edges(u) {
            let candidate_w = w.get(source, u) + weight;
            let candidate_d = circuit.delay(v) + d.get(source, u);

            if candidate_w < w.get(source, v) {
                w.set(source, v, candidate_w);
                d.set(source, v, candidate_d);
                parent[v] = Some(u);
                heap.push(Reverse((candidate_w, v)));
            } else if candidate_w == w.get(source, v)
                && candidate_d > d.get(source, v)
                && !would_create_cycle(&parent, v, u, source)
            {
                d.set(source, v, candidate_d);
                parent[v] = Some(u);
                heap.push(Reverse((candidate_w, v)));
            }
        }
    }
}

/// Walks the parent chain upward from `v` and reports whether adopting `u` as `v`'s predecessor
/// would close a cycle: `u` must not already sit on `v`'s current ancestor chain, and `v` must not
/// be `source` or `u` itself.
fn would_create_cycle(parent: &[Option<usize>], v: usize, u: usize, source: usize) -> bool {
    if v == source || v == u {
        return true;
    }
    let mut cur = parent[v];
    while let Some(p) = cur {
        if p == u {
            return true;
        }
        cur = parent[p];
    }
    false
}

/// Builds the full W and D matrices, running the modified Dijkstra once per source vertex.
pub fn build_wd(circuit: &CircuitGraph) -> (Matrix, Matrix) {
    let n = circuit.vertex_count();
    let mut w = Matrix::new(n, INF);
    let mut d = Matrix::new(n, 0);

    for source in 0..n {
        wd_from_source(circuit, source, &mut w, &mut d);
    }

    (w, d)
}
