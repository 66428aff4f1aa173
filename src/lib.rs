//! Leiserson-Saxe retiming for edge-weighted synchronous circuit graphs.
//!
//! The pipeline lives in [`core`]: build the `W`/`D` matrices with a modified Dijkstra, derive
//! the PC constraint graph, solve it with Bellman-Ford, apply the resulting retiming vector to
//! the circuit's edge weights, then schedule the retimed circuit with a BFS.

pub mod core;
#[cfg(feature = "logging")]
mod settings;
