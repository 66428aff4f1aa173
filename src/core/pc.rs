/*!
# PC Constraint Graph

Builds the PC matrix from W, D, and the target clock period, then assembles the dense PC
constraint graph `G_pc` used by the Bellman–Ford solver. Stored as a
`petgraph::matrix_graph::MatrixGraph`, the dense representation the reference crate already
supports via its `matrix_graph` Cargo feature.
*/

use petgraph::matrix_graph::{MatrixGraph, NodeIndex};
use petgraph::Directed;

use crate::core::matrix::Matrix;

/// The synthetic origin vertex of the PC graph, distinct from the main graph's SOURCE.
pub const ORIGIN: usize = 0;

/// Dense directed PC constraint graph over `N + 1` vertices `{O, 1, ..., N}`.
pub type PcGraph = MatrixGraph<(), i64, Directed>;

/// Computes `PC[i][j] = W[i][j] - 1` if `D[i][j] > clock_period`, else `W[i][j]`.
pub fn build_pc_matrix(w: &Matrix, d: &Matrix, clock_period: i64) -> Matrix {
    let n = w.side();
    let mut pc = Matrix::new(n, 0);
    for i in 0..n {
        for j in 0..n {
            let value = if d.get(i, j) > clock_period {
                w.get(i, j) - 1
            } else {
                w.get(i, j)
            };
            pc.set(i, j, value);
        }
    }
    pc
}

/// Builds `G_pc`: `O -> k` with weight 0 for every `k` in `[1, N]`, and `j+1 -> i+1` with weight
/// `PC[i][j]` for every `(i, j)`.
pub fn build_pc_graph(pc: &Matrix) -> PcGraph {
    let n = pc.side();
    let mut graph: PcGraph = MatrixGraph::with_nodes(n + 1);
    for _ in 0..=n {
        graph.add_node(());
    }

    for k in 1..=n {
        graph.add_edge(NodeIndex::new(ORIGIN), NodeIndex::new(k), 0);
    }

    for i in 0..n {
        for j in 0..n {
            graph.add_edge(NodeIndex::new(j + 1), NodeIndex::new(i + 1), pc.get(i, j));
        }
    }

    graph
}
