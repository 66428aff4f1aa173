/*!
# Circuit Graph

The sparse main graph `G`: vertices carry a combinational propagation delay, edges carry a latch
(register) count. Wraps `petgraph::graph::DiGraph` the way the reference crate wraps its own
graph types, but specializes node/edge weights to `i64` rather than staying generic over them,
since every consumer of this graph in the pipeline works in plain integers.
*/

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Vertex `0` is the reserved SOURCE (entry) vertex.
pub const SOURCE: usize = 0;

/// A synchronous circuit: per-vertex propagation delay, per-edge latch count.
///
/// Vertices are added in order `0..N` at construction time, so a vertex's `petgraph::NodeIndex`
/// always equals its spec-level integer id. The graph is never mutated by node or edge removal,
/// which keeps that correspondence an invariant for the lifetime of one retiming run.
#[derive(Debug, Clone)]
pub struct CircuitGraph {
    graph: DiGraph<i64, i64>,
}

impl CircuitGraph {
    /// Builds a circuit with `delays.len()` vertices and no edges.
    pub fn new(delays: &[i64]) -> Self {
        let mut graph = DiGraph::with_capacity(delays.len(), 0);
        for &delay in delays {
            graph.add_node(delay);
        }
        Self { graph }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Propagation delay at vertex `v`.
    pub fn delay(&self, v: usize) -> i64 {
        self.graph[NodeIndex::new(v)]
    }

    /// Adds a directed edge `tail -> head` with the given latch-count weight.
    pub fn add_edge(&mut self, tail: usize, head: usize, weight: i64) -> EdgeIndex {
        self.graph
            .add_edge(NodeIndex::new(tail), NodeIndex::new(head), weight)
    }

    /// Iterates `(target, weight)` for every edge leaving `v`.
    pub fn outgoing_edges(&self, v: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.graph
            .edges(NodeIndex::new(v))
            .map(|e| (e.target().index(), *e.weight()))
    }

    /// Iterates every edge as `(tail, head, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    /// Overwrites the weight of edge `(tail, head)`. Panics if the edge does not exist; the
    /// retiming stage only ever calls this for edges it already enumerated via [`Self::edges`].
    pub fn set_edge_weight(&mut self, tail: usize, head: usize, weight: i64) {
        let idx = self
            .graph
            .find_edge(NodeIndex::new(tail), NodeIndex::new(head))
            .expect("set_edge_weight called on a nonexistent edge");
        self.graph[idx] = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_ids_match_insertion_order() {
        let mut g = CircuitGraph::new(&[1, 2, 3]);
        g.add_edge(0, 1, 4);
        g.add_edge(1, 2, 0);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.delay(2), 3);
        let out: Vec<_> = g.outgoing_edges(0).collect();
        assert_eq!(out, vec![(1, 4)]);
    }

    #[test]
    fn test_set_edge_weight() {
        let mut g = CircuitGraph::new(&[0, 0]);
        g.add_edge(0, 1, 2);
        g.set_edge_weight(0, 1, 5);
        assert_eq!(g.outgoing_edges(0).collect::<Vec<_>>(), vec![(1, 5)]);
    }

    #[test]
    fn test_edges_enumeration() {
        let mut g = CircuitGraph::new(&[0, 0, 0]);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 2);
        let mut edges: Vec<_> = g.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(0, 1, 1), (1, 2, 2)]);
    }
}
